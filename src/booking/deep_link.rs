use log::{debug, warn};
use web_sys::window;

use crate::booking::message::inquiry_message;
use crate::config;

fn digits(number: &str) -> String {
    number.chars().filter(|c| c.is_ascii_digit()).collect()
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        config::WHATSAPP_HOST,
        digits(number),
        urlencoding::encode(message)
    )
}

pub fn booking_link(message: &str) -> String {
    whatsapp_link(config::WHATSAPP_NUMBER, message)
}

pub fn inquiry_link() -> String {
    whatsapp_link(config::WHATSAPP_NUMBER, &inquiry_message())
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else {
        debug!("No window, not opening {}", url);
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => debug!("Opened messaging link"),
        Ok(None) => warn!("Browser blocked the messaging link popup"),
        Err(e) => warn!("Failed to open messaging link: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_is_reduced_to_digits() {
        let url = whatsapp_link("+91 94113-85974", "hi");
        assert_eq!(url, "https://wa.me/919411385974?text=hi");
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let url = whatsapp_link("123", "Name: A&B\nDuration: 2 nights");
        assert_eq!(
            url,
            "https://wa.me/123?text=Name%3A%20A%26B%0ADuration%3A%202%20nights"
        );
    }

    #[test]
    fn test_inquiry_link_uses_configured_number() {
        let url = inquiry_link();
        assert!(url.starts_with("https://wa.me/919411385974?text=Hello%21%20I%20would"));
    }
}
