use log::info;
use yew::prelude::*;

use crate::booking::deep_link::{inquiry_link, open_in_new_tab};
use crate::components::notification::use_notifier;

#[function_component(ContactFloat)]
pub fn contact_float() -> Html {
    let notifier = use_notifier();
    let onclick = Callback::from(move |_: MouseEvent| {
        info!("Opening WhatsApp inquiry");
        open_in_new_tab(&inquiry_link());
        notifier.info("Opening WhatsApp chat...");
    });

    html! {
        <button class="whatsapp-float" {onclick} aria-label="Chat on WhatsApp">
            <i class="fab fa-whatsapp"></i>
        </button>
    }
}
