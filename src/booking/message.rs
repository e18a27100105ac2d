use chrono::NaiveDate;

use crate::booking::request::BookingRequest;
use crate::config;

/// Day, short month, year: `05 Jan 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

pub fn booking_message(request: &BookingRequest) -> String {
    let nights = request.nights();

    let mut message = format!(
        "🏨 *{} - BOOKING REQUEST*\n\n",
        config::HOTEL_NAME.to_uppercase()
    );

    message.push_str("👤 *Guest Details:*\n");
    message.push_str(&format!("Name: {}\n", request.full_name));
    message.push_str(&format!("Phone: {}\n\n", request.phone));

    message.push_str("🗓️ *Booking Details:*\n");
    message.push_str(&format!("Check-in: {}\n", format_date(request.check_in)));
    message.push_str(&format!("Check-out: {}\n", format_date(request.check_out)));
    message.push_str(&format!(
        "Duration: {} night{}\n\n",
        nights,
        if nights > 1 { "s" } else { "" }
    ));

    message.push_str("🏠 *Accommodation:*\n");
    message.push_str(&format!("Room Type: {}\n", request.room_type));
    message.push_str(&format!("Number of Persons: {}\n", request.number_of_persons));
    message.push_str(&format!("Adults: {}\n", request.adults));
    message.push_str(&format!("Children: {}\n\n", request.children));

    if let Some(special) = &request.special_requests {
        message.push_str("📝 *Special Requests:*\n");
        message.push_str(&format!("{}\n\n", special));
    }

    message.push_str("Please confirm availability and provide booking details. Thank you! 🙏");
    message
}

pub fn inquiry_message() -> String {
    format!(
        "Hello! I would like to inquire about booking a room at {}. Could you please provide more information?",
        config::HOTEL_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            full_name: "Asha Verma".to_string(),
            phone: "+91 94113 85974".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            room_type: "Deluxe Room".to_string(),
            number_of_persons: "3".to_string(),
            adults: "2".to_string(),
            children: "1".to_string(),
            special_requests: None,
        }
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "05 Jan 2025");
    }

    #[test]
    fn test_message_contains_booking_details() {
        let message = booking_message(&request());
        assert!(message.starts_with("🏨 *ROYAL PALACE HOTEL - BOOKING REQUEST*\n\n"));
        assert!(message.contains("Name: Asha Verma\n"));
        assert!(message.contains("Check-in: 10 Jan 2025\n"));
        assert!(message.contains("Check-out: 12 Jan 2025\n"));
        assert!(message.contains("Duration: 2 nights\n"));
        assert!(message.contains("Room Type: Deluxe Room\n"));
        assert!(message.contains("Number of Persons: 3\nAdults: 2\nChildren: 1\n\n"));
        assert!(message.ends_with("Thank you! 🙏"));
    }

    #[test]
    fn test_single_night_not_pluralized() {
        let mut req = request();
        req.check_out = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();
        assert!(booking_message(&req).contains("Duration: 1 night\n"));
    }

    #[test]
    fn test_special_requests_section_optional() {
        let mut req = request();
        assert!(!booking_message(&req).contains("Special Requests"));

        req.special_requests = Some("Sea-facing room please".to_string());
        let message = booking_message(&req);
        assert!(message.contains("📝 *Special Requests:*\nSea-facing room please\n\n"));
    }

    #[test]
    fn test_inquiry_message_names_hotel() {
        assert!(inquiry_message().contains("booking a room at Royal Palace Hotel."));
    }
}
