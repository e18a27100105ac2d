use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::dom;

pub fn scroll_top_style(scroll_y: f64) -> &'static str {
    if scroll_y > config::SCROLL_TOP_VISIBLE_AT {
        "opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(20px);"
    }
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = Callback::from(|_: MouseEvent| dom::smooth_scroll_to(0.0));

    html! {
        <button class="scroll-top-button" style={scroll_top_style(scroll_y)} {onclick} aria-label="Back to top">
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_past_threshold() {
        assert!(scroll_top_style(300.0).starts_with("opacity: 0"));
        assert!(scroll_top_style(301.0).starts_with("opacity: 1"));
    }
}
