//! Field resolution
//!
//! Turns an [`EffectiveConfig`] into the final render plan: which fields,
//! in which order, under which section. Resolution is strict about
//! references: a config that names a field nobody defines is an authoring
//! defect and fails loudly, unlike the tolerant merge step before it.

use crate::catalog::FieldCatalog;
use crate::config::EffectiveConfig;
use crate::core::condition::is_visible;
use crate::core::error::{FormResult, ResolveError};
use crate::core::field::{FieldDefinition, FormValues};
use indexmap::IndexSet;
use serde::Serialize;

/// Title key of the section synthesized for fields no declared group claims
pub const DEFAULT_GROUP_TITLE: &str = "booking.section.details";

/// One resolved form section
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedGroup {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Full definitions in render order
    pub fields: Vec<FieldDefinition>,
}

/// The complete render plan for one booking form
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedForm {
    pub groups: Vec<ResolvedGroup>,
}

impl ResolvedForm {
    /// Iterate every resolved field in render order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.groups.iter().flat_map(|g| g.fields.iter())
    }

    /// Find a resolved field by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields().find(|f| f.name == name)
    }

    /// The fields currently visible given in-progress form values.
    ///
    /// Total: unknown or missing dependency values hide the dependent
    /// field, they never error.
    pub fn visible_fields(&self, values: &FormValues) -> Vec<&FieldDefinition> {
        self.fields().filter(|f| is_visible(f, values)).collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.fields.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve an effective config against the builtin catalog
pub fn resolve_fields(config: &EffectiveConfig) -> FormResult<ResolvedForm> {
    resolve_with(FieldCatalog::builtin(), config)
}

/// Resolve an effective config against a specific catalog.
///
/// Ordering rules:
/// - declared groups come first, in declared order, members in listed order
/// - a field belongs to the first group that lists it; repeats are dropped
/// - required or extra fields no group claims land in a trailing section
///   titled [`DEFAULT_GROUP_TITLE`], in catalog declaration order; with no
///   declared groups at all, that section is the entire form
/// - groups left empty after hiding are dropped
pub fn resolve_with(catalog: &FieldCatalog, config: &EffectiveConfig) -> FormResult<ResolvedForm> {
    let scoped = catalog.scoped(&config.extra_fields);

    // every referenced name must resolve, hidden or not
    for name in config.required_fields.iter().chain(&config.hide_fields) {
        scoped.get(name)?;
    }

    let mut seen: IndexSet<String> = IndexSet::new();
    let mut groups = Vec::new();

    for declared in &config.field_groups {
        let mut fields = Vec::new();
        for name in &declared.fields {
            let def = scoped.get(name).map_err(|_| ResolveError::UnresolvedField {
                group: declared.title.clone(),
                field: name.clone(),
            })?;
            if config.hide_fields.contains(name) {
                continue;
            }
            if !seen.insert(name.clone()) {
                continue;
            }
            fields.push(promote(def, config));
        }
        if !fields.is_empty() {
            groups.push(ResolvedGroup {
                title: declared.title.clone(),
                description: declared.description.clone(),
                fields,
            });
        }
    }

    // required and extra fields no declared group claimed
    let extra_names: IndexSet<&str> = config.extra_fields.iter().map(|f| f.name.as_str()).collect();
    let mut rest = Vec::new();
    for def in scoped.fields() {
        let referenced = config.required_fields.contains(def.name.as_str())
            || extra_names.contains(def.name.as_str());
        if referenced && !config.hide_fields.contains(def.name.as_str()) && !seen.contains(def.name.as_str())
        {
            rest.push(promote(def, config));
        }
    }
    if !rest.is_empty() {
        groups.push(ResolvedGroup {
            title: DEFAULT_GROUP_TITLE.to_string(),
            description: None,
            fields: rest,
        });
    }

    let form = ResolvedForm { groups };
    tracing::debug!(
        groups = form.groups.len(),
        fields = form.len(),
        "resolved booking form"
    );
    Ok(form)
}

// A config-level "required" overrides the catalog default on the emitted
// definition; group membership alone never changes the flag.
fn promote(def: &FieldDefinition, config: &EffectiveConfig) -> FieldDefinition {
    let mut def = def.clone();
    if config.required_fields.contains(def.name.as_str()) {
        def.required = true;
    }
    def
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BookingFieldConfig, FieldGroup};
    use crate::core::error::FormError;
    use crate::core::field::{FieldKind, FieldValue};
    use std::collections::HashMap;

    fn catalog() -> FieldCatalog {
        FieldCatalog::with_fields([
            FieldDefinition::new("full_name", FieldKind::Text),
            FieldDefinition::new("email", FieldKind::Email),
            FieldDefinition::new("phone", FieldKind::Tel),
            FieldDefinition::new("check_in_date", FieldKind::Date),
            FieldDefinition::new("check_out_date", FieldKind::Date),
            FieldDefinition::new("payment_method", FieldKind::Select),
        ])
    }

    fn names(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    fn effective(config: BookingFieldConfig) -> EffectiveConfig {
        EffectiveConfig::merge(&config, None)
    }

    #[test]
    fn test_grouped_resolution_preserves_order() {
        let config = effective(BookingFieldConfig {
            field_groups: Some(vec![
                FieldGroup {
                    title: "Stay".to_string(),
                    description: None,
                    fields: names(&["check_in_date", "check_out_date"]),
                },
                FieldGroup {
                    title: "Contact".to_string(),
                    description: None,
                    fields: names(&["email", "phone"]),
                },
            ]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert_eq!(form.groups.len(), 2);
        assert_eq!(form.groups[0].title, "Stay");
        let stay: Vec<&str> = form.groups[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(stay, vec!["check_in_date", "check_out_date"]);
    }

    #[test]
    fn test_first_group_wins_on_repeats() {
        let config = effective(BookingFieldConfig {
            field_groups: Some(vec![
                FieldGroup {
                    title: "A".to_string(),
                    description: None,
                    fields: names(&["email", "email", "phone"]),
                },
                FieldGroup {
                    title: "B".to_string(),
                    description: None,
                    fields: names(&["phone", "full_name"]),
                },
            ]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        let a: Vec<&str> = form.groups[0].fields.iter().map(|f| f.name.as_str()).collect();
        let b: Vec<&str> = form.groups[1].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(a, vec!["email", "phone"]);
        assert_eq!(b, vec!["full_name"]);
    }

    #[test]
    fn test_hidden_fields_are_excluded() {
        let config = effective(BookingFieldConfig {
            hide_fields: names(&["payment_method"]),
            field_groups: Some(vec![FieldGroup {
                title: "Payment".to_string(),
                description: None,
                fields: names(&["payment_method", "email"]),
            }]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert!(form.field("payment_method").is_none());
        assert!(form.field("email").is_some());
    }

    #[test]
    fn test_fully_hidden_group_is_dropped() {
        let config = effective(BookingFieldConfig {
            hide_fields: names(&["payment_method"]),
            field_groups: Some(vec![
                FieldGroup {
                    title: "Payment".to_string(),
                    description: None,
                    fields: names(&["payment_method"]),
                },
                FieldGroup {
                    title: "Contact".to_string(),
                    description: None,
                    fields: names(&["email"]),
                },
            ]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert_eq!(form.groups.len(), 1);
        assert_eq!(form.groups[0].title, "Contact");
    }

    #[test]
    fn test_no_groups_synthesizes_default_in_catalog_order() {
        let config = effective(BookingFieldConfig {
            // listed out of catalog order on purpose
            required_fields: names(&["check_in_date", "full_name"]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert_eq!(form.groups.len(), 1);
        assert_eq!(form.groups[0].title, DEFAULT_GROUP_TITLE);
        let fields: Vec<&str> = form.groups[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["full_name", "check_in_date"]);
    }

    #[test]
    fn test_ungrouped_required_fields_trail_in_default_group() {
        let config = effective(BookingFieldConfig {
            required_fields: names(&["payment_method"]),
            field_groups: Some(vec![FieldGroup {
                title: "Contact".to_string(),
                description: None,
                fields: names(&["full_name", "email"]),
            }]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert_eq!(form.groups.len(), 2);
        assert_eq!(form.groups[1].title, DEFAULT_GROUP_TITLE);
        assert_eq!(form.groups[1].fields[0].name, "payment_method");
    }

    #[test]
    fn test_required_promotion() {
        let config = effective(BookingFieldConfig {
            required_fields: names(&["phone"]),
            field_groups: Some(vec![FieldGroup {
                title: "Contact".to_string(),
                description: None,
                fields: names(&["phone", "email"]),
            }]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert!(form.field("phone").unwrap().required);
        assert!(!form.field("email").unwrap().required);
    }

    #[test]
    fn test_unresolved_group_member_fails_with_group_and_field() {
        let config = effective(BookingFieldConfig {
            field_groups: Some(vec![FieldGroup {
                title: "Stay".to_string(),
                description: None,
                fields: names(&["nonexistent_field"]),
            }]),
            ..Default::default()
        });

        let err = resolve_with(&catalog(), &config).unwrap_err();
        match err {
            FormError::Resolve(ResolveError::UnresolvedField { group, field }) => {
                assert_eq!(group, "Stay");
                assert_eq!(field, "nonexistent_field");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_required_reference_fails() {
        let config = effective(BookingFieldConfig {
            required_fields: names(&["not_in_catalog"]),
            ..Default::default()
        });

        let err = resolve_with(&catalog(), &config).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_extra_field_resolves_in_group() {
        let config = effective(BookingFieldConfig {
            extra_fields: vec![FieldDefinition::new("loyalty_number", FieldKind::Text)],
            field_groups: Some(vec![FieldGroup {
                title: "Extras".to_string(),
                description: None,
                fields: names(&["loyalty_number"]),
            }]),
            ..Default::default()
        });

        let form = resolve_with(&catalog(), &config).unwrap();
        assert_eq!(form.groups[0].fields[0].name, "loyalty_number");
    }

    #[test]
    fn test_resolution_is_stable_across_calls() {
        let config = effective(BookingFieldConfig {
            required_fields: names(&["full_name", "phone"]),
            extra_fields: vec![FieldDefinition::new("loyalty_number", FieldKind::Text)],
            field_groups: Some(vec![FieldGroup {
                title: "Contact".to_string(),
                description: None,
                fields: names(&["email", "phone"]),
            }]),
            ..Default::default()
        });

        let catalog = catalog();
        let first = resolve_with(&catalog, &config).unwrap();
        let second = resolve_with(&catalog, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_visible_fields_filters_on_conditions() {
        let catalog = FieldCatalog::with_fields([
            FieldDefinition::new("visit_purpose", FieldKind::Select),
            FieldDefinition::new("visit_purpose_other", FieldKind::Text).depends_on(
                "visit_purpose",
                crate::core::condition::Predicate::Equals(FieldValue::from("other")),
            ),
        ]);
        let config = effective(BookingFieldConfig {
            field_groups: Some(vec![FieldGroup {
                title: "Purpose".to_string(),
                description: None,
                fields: names(&["visit_purpose", "visit_purpose_other"]),
            }]),
            ..Default::default()
        });

        let form = resolve_with(&catalog, &config).unwrap();

        let blank = HashMap::new();
        let visible: Vec<&str> = form.visible_fields(&blank).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(visible, vec!["visit_purpose"]);

        let mut values = HashMap::new();
        values.insert("visit_purpose".to_string(), FieldValue::from("other"));
        let visible: Vec<&str> = form.visible_fields(&values).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(visible, vec!["visit_purpose", "visit_purpose_other"]);
    }
}
