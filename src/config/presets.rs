//! Booking types and their built-in presets
//!
//! Each booking type selects a base [`BookingFieldConfig`]. Presets are
//! built once at first use and never change at runtime; per-activity
//! customization happens exclusively through override merging.

use crate::config::{BookingFieldConfig, FieldGroup};
use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The kind of bookable item, fixed for the lifetime of an activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    Standard,
    Accommodation,
    Rental,
    Transfer,
    Tour,
    Digital,
}

impl BookingType {
    pub const ALL: [BookingType; 6] = [
        BookingType::Standard,
        BookingType::Accommodation,
        BookingType::Rental,
        BookingType::Transfer,
        BookingType::Tour,
        BookingType::Digital,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Standard => "standard",
            BookingType::Accommodation => "accommodation",
            BookingType::Rental => "rental",
            BookingType::Transfer => "transfer",
            BookingType::Tour => "tour",
            BookingType::Digital => "digital",
        }
    }

    /// The built-in base configuration for this booking type
    pub fn preset(self) -> &'static BookingFieldConfig {
        &preset_table()[self as usize]
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(BookingType::Standard),
            "accommodation" => Ok(BookingType::Accommodation),
            "rental" => Ok(BookingType::Rental),
            "transfer" => Ok(BookingType::Transfer),
            "tour" => Ok(BookingType::Tour),
            "digital" => Ok(BookingType::Digital),
            other => Err(ConfigError::UnknownBookingType {
                value: other.to_string(),
            }),
        }
    }
}

// Indexed by discriminant, in BookingType::ALL order
fn preset_table() -> &'static [BookingFieldConfig; 6] {
    static PRESETS: OnceLock<[BookingFieldConfig; 6]> = OnceLock::new();
    PRESETS.get_or_init(|| {
        [
            standard_preset(),
            accommodation_preset(),
            rental_preset(),
            transfer_preset(),
            tour_preset(),
            digital_preset(),
        ]
    })
}

fn names(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn group(title: &str, fields: &[&str]) -> FieldGroup {
    FieldGroup {
        title: title.to_string(),
        description: None,
        fields: names(fields),
    }
}

fn standard_preset() -> BookingFieldConfig {
    BookingFieldConfig {
        required_fields: names(&["full_name", "email"]),
        hide_fields: vec![],
        field_groups: Some(vec![
            group("booking.section.contact", &["full_name", "email", "phone"]),
            group(
                "booking.section.details",
                &["visit_purpose", "visit_purpose_other", "special_requests"],
            ),
        ]),
        extra_fields: vec![],
    }
}

fn accommodation_preset() -> BookingFieldConfig {
    BookingFieldConfig {
        required_fields: names(&["full_name", "email", "check_in_date", "check_out_date"]),
        hide_fields: vec![],
        field_groups: Some(vec![
            group(
                "booking.section.guest",
                &["full_name", "email", "phone", "nationality", "id_number"],
            ),
            group(
                "booking.section.stay",
                &["check_in_date", "check_out_date", "number_of_rooms"],
            ),
            group("booking.section.requests", &["special_requests"]),
        ]),
        extra_fields: vec![],
    }
}

fn rental_preset() -> BookingFieldConfig {
    BookingFieldConfig {
        required_fields: names(&[
            "full_name",
            "email",
            "driver_license_number",
            "pickup_date",
            "return_date",
        ]),
        hide_fields: vec![],
        field_groups: Some(vec![
            group(
                "booking.section.driver",
                &[
                    "full_name",
                    "email",
                    "phone",
                    "driver_license_number",
                    "driver_age",
                ],
            ),
            group(
                "booking.section.rental",
                &[
                    "pickup_date",
                    "return_date",
                    "pickup_location",
                    "dropoff_location",
                ],
            ),
            group("booking.section.requests", &["special_requests"]),
        ]),
        extra_fields: vec![],
    }
}

fn transfer_preset() -> BookingFieldConfig {
    BookingFieldConfig {
        required_fields: names(&["full_name", "phone", "pickup_location", "dropoff_location"]),
        hide_fields: vec![],
        field_groups: Some(vec![
            group(
                "booking.section.passenger",
                &["full_name", "phone", "email"],
            ),
            group(
                "booking.section.transfer",
                &[
                    "pickup_location",
                    "dropoff_location",
                    "pickup_time",
                    "flight_number",
                    "luggage_count",
                ],
            ),
        ]),
        extra_fields: vec![],
    }
}

fn tour_preset() -> BookingFieldConfig {
    BookingFieldConfig {
        required_fields: names(&["full_name", "email"]),
        hide_fields: vec![],
        field_groups: Some(vec![
            group("booking.section.contact", &["full_name", "email", "phone"]),
            group(
                "booking.section.tour",
                &["tour_language", "dietary_requirements"],
            ),
            group(
                "booking.section.emergency",
                &["emergency_contact_name", "emergency_contact_phone"],
            ),
            group("booking.section.requests", &["special_requests"]),
        ]),
        extra_fields: vec![],
    }
}

fn digital_preset() -> BookingFieldConfig {
    BookingFieldConfig {
        required_fields: names(&["full_name", "recipient_email"]),
        hide_fields: names(&["phone"]),
        field_groups: Some(vec![group(
            "booking.section.delivery",
            &["full_name", "recipient_email"],
        )]),
        extra_fields: vec![],
    }
}
