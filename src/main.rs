use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{window, ErrorEvent};
use yew::prelude::*;

mod config;
mod content;
mod dom;
mod booking {
    pub mod deep_link;
    pub mod message;
    pub mod modal;
    pub mod request;
}
mod components {
    pub mod booking_modal;
    pub mod carousel;
    pub mod contact_float;
    pub mod lightbox;
    pub mod nav;
    pub mod notification;
    pub mod reveal;
    pub mod scroll_top;
}
mod pages {
    pub mod landing;
}

use components::notification::NotificationProvider;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <NotificationProvider>
            <Landing />
        </NotificationProvider>
    }
}

// Uncaught errors only reach the console, the page keeps running.
fn log_uncaught_errors() {
    let Some(window) = window() else {
        return;
    };
    let listener = Closure::wrap(Box::new(|e: ErrorEvent| {
        gloo_console::error!("JavaScript Error:", e.error());
    }) as Box<dyn FnMut(ErrorEvent)>);
    if window
        .add_event_listener_with_callback("error", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        listener.forget();
    }
}

fn register_service_worker() {
    let Some(window) = window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = web_sys::js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))
        .unwrap_or(false);
    if !supported {
        debug!("Service workers not supported");
        return;
    }

    let registration = navigator
        .service_worker()
        .register(config::SERVICE_WORKER_PATH);
    spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(registration) => info!("SW registered: {:?}", registration),
            Err(e) => info!("SW registration failed: {:?}", e),
        }
    });
}

fn fade_in_page() {
    dom::set_body_opacity("0", None);
    Timeout::new(config::PAGE_FADE_IN_DELAY_MS, || {
        dom::set_body_opacity("1", Some("opacity 0.5s ease-in"));
    })
    .forget();
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::HOTEL_NAME);
    log_uncaught_errors();
    fade_in_page();
    register_service_worker();
    yew::Renderer::<App>::new().render();
}
