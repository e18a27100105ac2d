use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;

const HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(30px); transition: all 0.6s ease-out;";
const SHOWN_STYLE: &str = "opacity: 1; transform: translateY(0); transition: all 0.6s ease-out;";

pub fn reveal_style(visible: bool) -> &'static str {
    if visible {
        SHOWN_STYLE
    } else {
        HIDDEN_STYLE
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("transform: translateY({}px);", scroll_y * config::PARALLAX_RATE)
}

/// Observer plus the closure it calls; both must outlive the observation.
struct Visibility {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array)>,
}

impl Visibility {
    fn observe(target: &Element, on_visible: impl Fn() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            if intersecting {
                on_visible();
            }
        }) as Box<dyn FnMut(Array)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(0.1));
        options.set_root_margin("0px 0px -50px 0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Visibility {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observation = node.cast::<Element>().and_then(|el| {
                    Visibility::observe(&el, move || visible.set(true))
                        .map_err(|e| debug!("IntersectionObserver unavailable: {:?}", e))
                        .ok()
                });
                move || drop(observation)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={reveal_style(*visible)}>
            { props.children.clone() }
        </div>
    }
}

/// Inline style moving the hero at half the scroll speed.
#[hook]
pub fn use_parallax() -> String {
    let (_, scroll_y) = use_window_scroll();
    parallax_transform(scroll_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_style() {
        assert!(reveal_style(false).starts_with("opacity: 0;"));
        assert!(reveal_style(true).contains("translateY(0)"));
    }

    #[test]
    fn test_parallax_moves_up_at_half_speed() {
        assert_eq!(parallax_transform(200.0), "transform: translateY(-100px);");
        assert_eq!(parallax_transform(35.0), "transform: translateY(-17.5px);");
    }
}
