//! Booking field configuration loading and merging
//!
//! A [`BookingFieldConfig`] is a partial specification of what a booking
//! form shows: presets (one per booking type) provide the base, and an
//! activity may carry a vendor-authored override. Merging the two yields
//! an [`EffectiveConfig`], the input to the field resolver.

pub mod presets;

use crate::core::error::FormResult;
use crate::core::field::FieldDefinition;
use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A named, ordered section of the booking form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldGroup {
    /// Display key for the section heading
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Field names in render order
    pub fields: Vec<String>,
}

/// A partial field configuration for one context.
///
/// Every sub-object is optional: overrides stored on activity records are
/// partial by definition, so an absent section deserializes to its empty
/// default rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BookingFieldConfig {
    /// Field names that must be filled in this context
    pub required_fields: Vec<String>,

    /// Field names to suppress even if the preset shows them
    pub hide_fields: Vec<String>,

    /// Section layout. `None` means "not specified", which is distinct
    /// from an explicit empty list for the merge replacement rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_groups: Option<Vec<FieldGroup>>,

    /// Vendor-custom definitions scoped to this config
    pub extra_fields: Vec<FieldDefinition>,
}

impl BookingFieldConfig {
    /// Load a configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Decode a configuration stored as JSON on an activity record
    pub fn from_json_value(value: serde_json::Value) -> FormResult<Self> {
        let config: Self = serde_json::from_value(value)?;
        Ok(config)
    }

    pub fn is_empty(&self) -> bool {
        self.required_fields.is_empty()
            && self.hide_fields.is_empty()
            && self.field_groups.is_none()
            && self.extra_fields.is_empty()
    }
}

/// The result of merging a preset with an optional override.
///
/// `required_fields` and `hide_fields` are guaranteed disjoint, and all
/// collections preserve insertion order so repeated merges of the same
/// inputs are structurally identical.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub required_fields: IndexSet<String>,
    pub hide_fields: IndexSet<String>,
    pub field_groups: Vec<FieldGroup>,
    pub extra_fields: Vec<FieldDefinition>,
}

impl EffectiveConfig {
    /// Merge a base preset with an optional per-activity override.
    ///
    /// Precedence:
    /// - required = base.required ∪ override.required, minus anything hidden
    /// - hide = base.hide ∪ override.hide, minus fields the override requires
    /// - a field both hidden and required by the *same* source is hidden
    /// - override groups replace base groups wholesale when specified
    /// - extra fields accumulate, last definition wins per name
    ///
    /// Unknown field names are passed through untouched; reference checking
    /// happens at resolve time.
    pub fn merge(base: &BookingFieldConfig, override_cfg: Option<&BookingFieldConfig>) -> Self {
        let empty = BookingFieldConfig::default();
        let over = override_cfg.unwrap_or(&empty);

        // hide beats require inside a single source
        let base_required: Vec<&String> = base
            .required_fields
            .iter()
            .filter(|f| !base.hide_fields.contains(*f))
            .collect();
        let over_required: Vec<&String> = over
            .required_fields
            .iter()
            .filter(|f| !over.hide_fields.contains(*f))
            .collect();

        let mut required: IndexSet<String> = base_required
            .iter()
            .chain(over_required.iter())
            .map(|f| f.to_string())
            .collect();

        let mut hide: IndexSet<String> = base
            .hide_fields
            .iter()
            .chain(over.hide_fields.iter())
            .cloned()
            .collect();

        // an override-level "required" lifts a base-level "hidden"
        for field in &over_required {
            hide.shift_remove(field.as_str());
        }
        // an override-level "hidden" beats a base-level "required"
        required.retain(|f| !hide.contains(f));

        let field_groups = over
            .field_groups
            .clone()
            .or_else(|| base.field_groups.clone())
            .unwrap_or_default();

        let mut extras: IndexMap<String, FieldDefinition> = IndexMap::new();
        for def in base.extra_fields.iter().chain(over.extra_fields.iter()) {
            extras.insert(def.name.clone(), def.clone());
        }

        tracing::debug!(
            required = required.len(),
            hidden = hide.len(),
            groups = field_groups.len(),
            extras = extras.len(),
            "merged booking field config"
        );

        Self {
            required_fields: required,
            hide_fields: hide,
            field_groups,
            extra_fields: extras.into_values().collect(),
        }
    }
}
