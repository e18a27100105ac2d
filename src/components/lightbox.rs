use stylist::yew::styled_component;
use yew::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub on_close: Callback<()>,
}

/// Full-screen view of one gallery image. Any click closes it.
#[styled_component]
pub fn Lightbox(props: &LightboxProps) -> Html {
    use_effect_with_deps(
        |_| {
            dom::set_page_scroll_locked(true);
            || dom::set_page_scroll_locked(false)
        },
        (),
    );

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let overlay = css!(
        r#"
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background: rgba(0, 0, 0, 0.9);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 3000;
        cursor: pointer;

        .lightbox-content {
            max-width: 90%;
            max-height: 90%;
            position: relative;
        }
        .lightbox-content img {
            max-width: 100%;
            max-height: 90vh;
            border-radius: 8px;
        }
        .lightbox-close {
            position: absolute;
            top: -40px;
            right: 0;
            color: white;
            font-size: 30px;
            cursor: pointer;
            z-index: 3001;
        }
        "#
    );

    html! {
        <div class={classes!("lightbox-overlay", overlay)} onclick={close}>
            <div class="lightbox-content">
                <div class="lightbox-close">{"×"}</div>
                <img src={props.src.clone()} alt={props.alt.clone()} />
            </div>
        </div>
    }
}
