use log::Level;

pub const HOTEL_NAME: &str = "Royal Palace Hotel";

// Number the booking and inquiry messages are sent to
pub const WHATSAPP_NUMBER: &str = "+919411385974";
pub const WHATSAPP_HOST: &str = "wa.me";

pub const HERO_INTERVAL_MS: u32 = 4000;
pub const TESTIMONIAL_INTERVAL_MS: u32 = 2500;
pub const NOTIFICATION_DISMISS_MS: u32 = 5000;
pub const SUBMIT_BUTTON_RESET_MS: u32 = 2000;
pub const MODAL_CLOSE_DELAY_MS: u32 = 1000;
pub const PAGE_FADE_IN_DELAY_MS: u32 = 100;

pub const NAVBAR_SCROLLED_AT: f64 = 50.0;
pub const NAVBAR_HEIGHT: f64 = 80.0; // fixed navbar covers the top of scrolled-to sections
pub const SCROLL_TOP_VISIBLE_AT: f64 = 300.0;
pub const PARALLAX_RATE: f64 = -0.5;

pub const SERVICE_WORKER_PATH: &str = "/sw.js";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
