//! Activity boundary record
//!
//! Activities are owned by the external activity API; the engine only ever
//! reads two of their attributes: the booking type (fixed once assigned)
//! and the optional vendor-authored field config override. The effective
//! config is computed fresh per request, never cached on the record.

use crate::config::presets::BookingType;
use crate::config::{BookingFieldConfig, EffectiveConfig};
use crate::core::error::FormResult;
use crate::resolve::{resolve_fields, ResolvedForm};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable package variant of an activity, selectable via the
/// `package` query parameter
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityPackage {
    pub id: Uuid,
    pub name: String,
    pub price_per_person: f64,
}

/// Read-only view of an activity record as fetched from the activity API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub id: Uuid,

    pub title: String,

    pub booking_type: BookingType,

    /// Vendor-authored override, stored as JSON on the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_field_config: Option<BookingFieldConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<ActivityPackage>,
}

impl Activity {
    /// Merge this activity's booking-type preset with its override
    pub fn effective_field_config(&self) -> EffectiveConfig {
        EffectiveConfig::merge(self.booking_type.preset(), self.booking_field_config.as_ref())
    }

    /// The full pipeline: preset + override, merged and resolved
    pub fn resolve_form(&self) -> FormResult<ResolvedForm> {
        resolve_fields(&self.effective_field_config())
    }

    pub fn package(&self, id: &Uuid) -> Option<&ActivityPackage> {
        self.packages.iter().find(|p| &p.id == id)
    }
}
