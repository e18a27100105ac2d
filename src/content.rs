use log::error;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Room {
    pub name: String,
    pub image: String,
    pub description: String,
    pub price_per_night: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Amenity {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct GalleryImage {
    pub image: String,
    pub caption: String,
}

#[derive(Deserialize, Clone, PartialEq, Debug)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub origin: String,
    pub rating: u8,
}

#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct Contact {
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Everything the landing page shows, embedded at build time.
#[derive(Deserialize, Clone, PartialEq, Debug, Default)]
pub struct SiteContent {
    pub hero_slides: Vec<Slide>,
    pub about: Vec<String>,
    pub rooms: Vec<Room>,
    pub amenities: Vec<Amenity>,
    pub gallery: Vec<GalleryImage>,
    pub testimonials: Vec<Testimonial>,
    pub contact: Contact,
}

impl SiteContent {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Falls back to an empty page when the embedded document is broken.
    pub fn load() -> Self {
        Self::parse(SITE_JSON).unwrap_or_else(|e| {
            error!("Failed to parse site content: {}", e);
            Self::default()
        })
    }

    pub fn room_types(&self) -> Vec<String> {
        self.rooms.iter().map(|r| r.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_parses() {
        let content = SiteContent::parse(SITE_JSON).unwrap();
        assert!(!content.hero_slides.is_empty());
        assert!(!content.testimonials.is_empty());
        assert_eq!(content.room_types().len(), content.rooms.len());
    }

    #[test]
    fn test_broken_content_is_an_error() {
        assert!(SiteContent::parse("{\"rooms\": 3}").is_err());
    }
}
