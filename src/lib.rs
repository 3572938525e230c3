//! # Bookform
//!
//! Dynamic booking-form field configuration for bookable activities.
//!
//! ## Features
//!
//! - **Field Catalog**: One registry of every standard booking input with
//!   its kind, display keys, constraints and display conditions
//! - **Booking-Type Presets**: Built-in base configurations for standard,
//!   accommodation, rental, transfer, tour and digital bookings
//! - **Override Merging**: Vendor-authored per-activity overrides merge
//!   deterministically over presets with well-defined precedence
//! - **Field Resolution**: Effective configs resolve into an ordered,
//!   deduplicated, grouped render plan, failing loudly on authoring errors
//! - **Conditional Display**: Per-field `depends_on` conditions evaluated
//!   against live form values, total and allocation-free
//! - **Submission Contracts**: The booking request payload shape plus
//!   collection and validation of submitted values
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookform::prelude::*;
//!
//! // Fetched from the activity API
//! let activity: Activity = fetch_activity()?;
//!
//! // Preset + vendor override, merged and resolved
//! let form = activity.resolve_form()?;
//!
//! // Re-evaluated by the UI on every input event
//! let visible = form.visible_fields(&values);
//!
//! // At submission time
//! validate_submission(&form, &values)?;
//! let customer_info = collect_customer_info(&form, &values);
//! ```
//!
//! All engine components are pure, synchronous functions over immutable
//! inputs; they are safe to call concurrently without coordination.

pub mod booking;
pub mod catalog;
pub mod config;
pub mod core;
pub mod resolve;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        condition::{is_visible, DisplayCondition, Predicate},
        error::{
            CatalogError, ConfigError, FieldValidationError, FormError, FormResult, ResolveError,
            ValidationError,
        },
        field::{FieldDefinition, FieldKind, FieldValue, FormValues},
        validation::FieldConstraints,
    };

    // === Catalog ===
    pub use crate::catalog::FieldCatalog;

    // === Configuration ===
    pub use crate::config::{
        presets::BookingType, BookingFieldConfig, EffectiveConfig, FieldGroup,
    };

    // === Resolution ===
    pub use crate::resolve::{
        resolve_fields, resolve_with, ResolvedForm, ResolvedGroup, DEFAULT_GROUP_TITLE,
    };

    // === Booking boundary ===
    pub use crate::booking::{
        collect_customer_info, validate_submission, Activity, ActivityPackage, BookingOutcome,
        BookingRequest, CustomerInfo,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::NaiveDate;
    pub use indexmap::{IndexMap, IndexSet};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
