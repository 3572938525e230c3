//! Booking boundary contracts
//!
//! The engine's two edges: the activity record it reads its configuration
//! from, and the booking submission payload the surrounding application
//! sends to the booking API once the form is filled.

pub mod activity;
pub mod submission;

pub use activity::{Activity, ActivityPackage};
pub use submission::{
    collect_customer_info, validate_submission, BookingOutcome, BookingRequest, CustomerInfo,
};
