use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::config;
use crate::dom;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#rooms", "Rooms"),
    ("#amenities", "Amenities"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

pub fn navbar_style(scroll_y: f64) -> &'static str {
    if scroll_y > config::NAVBAR_SCROLLED_AT {
        "background: rgba(255, 255, 255, 0.98); backdrop-filter: blur(15px);"
    } else {
        "background: rgba(255, 255, 255, 0.95); backdrop-filter: blur(10px);"
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_book = {
        let on_book = props.on_book.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_book.emit(());
        })
    };

    let active = (*menu_open).then(|| "active");

    html! {
        <nav class="navbar" style={navbar_style(scroll_y)}>
            <div class="nav-container">
                <a href="#home" class="nav-logo">
                    <i class="fas fa-crown"></i>
                    {config::HOTEL_NAME}
                </a>
                <ul class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(target, label)| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            dom::scroll_to_section(target);
                        });
                        html! {
                            <li class="nav-item">
                                <a href={*target} class="nav-link" {onclick}>{*label}</a>
                            </li>
                        }
                    }) }
                    <li class="nav-item">
                        <button class="nav-book-button" onclick={on_book}>{"Book Now"}</button>
                    </li>
                </ul>
                <button class={classes!("hamburger", active)} onclick={toggle_menu} aria-label="Toggle menu">
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
            </div>
        </nav>
    }
}
