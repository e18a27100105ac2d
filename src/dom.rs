use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config;

fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Stops the page behind an overlay from scrolling.
pub fn set_page_scroll_locked(locked: bool) {
    let Some(body) = body() else {
        return;
    };
    let overflow = if locked { "hidden" } else { "auto" };
    let _ = body.style().set_property("overflow", overflow);
}

pub fn set_body_opacity(opacity: &str, transition: Option<&str>) {
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    if let Some(transition) = transition {
        let _ = style.set_property("transition", transition);
    }
    let _ = style.set_property("opacity", opacity);
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Where the page has to scroll so a section starts just below the fixed navbar.
pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - config::NAVBAR_HEIGHT
}

/// Scrolls to the element matching `selector` (an `#id` anchor). Missing
/// targets are skipped.
pub fn scroll_to_section(selector: &str) {
    let section = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match section {
        Some(section) => smooth_scroll_to(section_scroll_top(section.offset_top() as f64)),
        None => debug!("No section for {}, not scrolling", selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_scroll_accounts_for_navbar() {
        assert_eq!(section_scroll_top(600.0), 520.0);
    }
}
