use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const FULL_NAME: &str = "fullName";
pub const PHONE: &str = "phone";
pub const CHECK_IN: &str = "checkIn";
pub const CHECK_OUT: &str = "checkOut";
pub const ROOM_TYPE: &str = "roomType";
pub const NUMBER_OF_PERSONS: &str = "numberOfPersons";
pub const ADULTS: &str = "adults";
pub const CHILDREN: &str = "children";
pub const SPECIAL_REQUESTS: &str = "specialRequests";

pub const REQUIRED_FIELDS: [&str; 7] = [
    FULL_NAME,
    PHONE,
    CHECK_IN,
    CHECK_OUT,
    ROOM_TYPE,
    NUMBER_OF_PERSONS,
    ADULTS,
];

// Same format the date inputs submit
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please fill in the {}", humanize_field(.0))]
    MissingField(&'static str),
    #[error("Please enter valid check-in and check-out dates")]
    UnreadableDate,
    #[error("Check-in date cannot be in the past")]
    CheckInInPast,
    #[error("Check-out date must be after check-in date")]
    CheckOutNotAfterCheckIn,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Raw values of the booking form, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn value(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A booking that passed validation. Lives only long enough to be turned
/// into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub full_name: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: String,
    pub number_of_persons: String,
    pub adults: String,
    pub children: String,
    pub special_requests: Option<String>,
}

impl BookingRequest {
    /// Checks run in a fixed order and stop at the first failure:
    /// required fields, then dates, then the phone number.
    pub fn validate(fields: &FormFields, today: NaiveDate) -> Result<Self, BookingError> {
        for name in REQUIRED_FIELDS {
            if fields.get(name).map_or(true, |v| v.trim().is_empty()) {
                return Err(BookingError::MissingField(name));
            }
        }

        let check_in = parse_date(&fields.value(CHECK_IN))?;
        let check_out = parse_date(&fields.value(CHECK_OUT))?;

        if check_in < today {
            return Err(BookingError::CheckInInPast);
        }
        if check_out <= check_in {
            return Err(BookingError::CheckOutNotAfterCheckIn);
        }

        let phone = fields.value(PHONE);
        if !is_valid_phone(&phone) {
            return Err(BookingError::InvalidPhone);
        }

        let children = match fields.get(CHILDREN) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => "0".to_string(),
        };
        let special_requests = fields
            .get(SPECIAL_REQUESTS)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);

        Ok(Self {
            full_name: fields.value(FULL_NAME),
            phone,
            check_in,
            check_out,
            room_type: fields.value(ROOM_TYPE),
            number_of_persons: fields.value(NUMBER_OF_PERSONS),
            adults: fields.value(ADULTS),
            children,
            special_requests,
        })
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| BookingError::UnreadableDate)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
        .collect();
    PHONE_PATTERN.is_match(&stripped)
}

/// `numberOfPersons` -> `number of persons`
pub fn humanize_field(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    fn valid_fields() -> FormFields {
        [
            (FULL_NAME, "Asha Verma"),
            (PHONE, "+91 94113 85974"),
            (CHECK_IN, "2025-01-10"),
            (CHECK_OUT, "2025-01-12"),
            (ROOM_TYPE, "Deluxe Room"),
            (NUMBER_OF_PERSONS, "2"),
            (ADULTS, "2"),
            (CHILDREN, ""),
            (SPECIAL_REQUESTS, ""),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_valid_form_passes() {
        let request = BookingRequest::validate(&valid_fields(), today()).unwrap();
        assert_eq!(request.full_name, "Asha Verma");
        assert_eq!(request.nights(), 2);
        assert_eq!(request.children, "0");
        assert_eq!(request.special_requests, None);
    }

    #[test]
    fn test_missing_fields_checked_in_order() {
        let mut fields = valid_fields();
        fields.set(PHONE, "   ");
        fields.0.remove(ADULTS);
        assert_eq!(
            BookingRequest::validate(&fields, today()),
            Err(BookingError::MissingField(PHONE))
        );

        fields.set(PHONE, "1234567");
        let err = BookingRequest::validate(&fields, today()).unwrap_err();
        assert_eq!(err, BookingError::MissingField(ADULTS));
        assert_eq!(err.to_string(), "Please fill in the adults");
    }

    #[test]
    fn test_missing_field_message_is_humanized() {
        let mut fields = valid_fields();
        fields.set(NUMBER_OF_PERSONS, "");
        let err = BookingRequest::validate(&fields, today()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in the number of persons");
    }

    #[test]
    fn test_humanize_field() {
        assert_eq!(humanize_field("fullName"), "full name");
        assert_eq!(humanize_field("checkIn"), "check in");
        assert_eq!(humanize_field("phone"), "phone");
    }

    #[test]
    fn test_check_in_in_past_rejected() {
        let mut fields = valid_fields();
        fields.set(CHECK_IN, "2025-01-04");
        assert_eq!(
            BookingRequest::validate(&fields, today()),
            Err(BookingError::CheckInInPast)
        );

        // Today itself is allowed
        fields.set(CHECK_IN, "2025-01-05");
        assert!(BookingRequest::validate(&fields, today()).is_ok());
    }

    #[test]
    fn test_check_out_equal_to_check_in_rejected() {
        let mut fields = valid_fields();
        fields.set(CHECK_OUT, "2025-01-10");
        let err = BookingRequest::validate(&fields, today()).unwrap_err();
        assert_eq!(err, BookingError::CheckOutNotAfterCheckIn);
        assert_eq!(err.to_string(), "Check-out date must be after check-in date");
    }

    #[test]
    fn test_unreadable_date_rejected() {
        let mut fields = valid_fields();
        fields.set(CHECK_OUT, "12/01/2025");
        assert_eq!(
            BookingRequest::validate(&fields, today()),
            Err(BookingError::UnreadableDate)
        );
    }

    #[test]
    fn test_phone_separators_are_stripped() {
        assert!(is_valid_phone("123-456-7890"));
        assert!(is_valid_phone("+1 (555) 010-9999"));
        assert!(!is_valid_phone("abc123"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("+12345678901234567"));
    }

    #[test]
    fn test_bad_phone_fails_after_dates() {
        let mut fields = valid_fields();
        fields.set(PHONE, "abc123");
        assert_eq!(
            BookingRequest::validate(&fields, today()),
            Err(BookingError::InvalidPhone)
        );

        // Date errors win over phone errors
        fields.set(CHECK_OUT, "2025-01-09");
        assert_eq!(
            BookingRequest::validate(&fields, today()),
            Err(BookingError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_optional_fields_kept_when_present() {
        let mut fields = valid_fields();
        fields.set(CHILDREN, "1");
        fields.set(SPECIAL_REQUESTS, "Late arrival, around 11pm");
        let request = BookingRequest::validate(&fields, today()).unwrap();
        assert_eq!(request.children, "1");
        assert_eq!(
            request.special_requests.as_deref(),
            Some("Late arrival, around 11pm")
        );
    }
}
