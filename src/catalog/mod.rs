//! Field catalog
//!
//! Single source of truth for field metadata. The builtin catalog is
//! constructed once at first use and never mutated afterwards; per-merge
//! extra fields are layered on through [`FieldCatalog::scoped`], which
//! leaves the global catalog untouched.

use crate::core::condition::Predicate;
use crate::core::error::CatalogError;
use crate::core::field::{FieldDefinition, FieldKind, FieldValue};
use crate::core::validation::FieldConstraints;
use indexmap::IndexMap;
use std::sync::OnceLock;

/// Registry mapping field names to their definitions.
///
/// Iteration follows declaration order, which is what "catalog order"
/// means everywhere in the resolver.
#[derive(Debug, Clone, Default)]
pub struct FieldCatalog {
    fields: IndexMap<String, FieldDefinition>,
}

impl FieldCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of definitions.
    ///
    /// A repeated name replaces the earlier definition and keeps its
    /// original position.
    pub fn with_fields(fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        let mut catalog = Self::new();
        for def in fields {
            catalog.register(def);
        }
        catalog
    }

    pub fn register(&mut self, def: FieldDefinition) {
        self.fields.insert(def.name.clone(), def);
    }

    /// Look up a field definition by name
    pub fn get(&self, name: &str) -> Result<&FieldDefinition, CatalogError> {
        self.fields.get(name).ok_or_else(|| CatalogError::UnknownField {
            field: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate definitions in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// An ephemeral view with `extras` layered on top.
    ///
    /// An extra colliding with an existing name replaces the definition for
    /// this view only, keeping the original declaration position; novel
    /// extras append after the catalog fields in their declared order.
    pub fn scoped(&self, extras: &[FieldDefinition]) -> FieldCatalog {
        let mut scoped = self.clone();
        for def in extras {
            scoped.register(def.clone());
        }
        scoped
    }

    /// The process-wide catalog of standard booking fields
    pub fn builtin() -> &'static FieldCatalog {
        static CATALOG: OnceLock<FieldCatalog> = OnceLock::new();
        CATALOG.get_or_init(builtin_fields)
    }
}

fn builtin_fields() -> FieldCatalog {
    FieldCatalog::with_fields([
        // Guest identity and contact
        FieldDefinition::new("full_name", FieldKind::Text)
            .required(true)
            .validation(FieldConstraints {
                max_length: Some(120),
                ..Default::default()
            }),
        FieldDefinition::new("email", FieldKind::Email)
            .required(true)
            .placeholder("booking.field.email.placeholder"),
        FieldDefinition::new("phone", FieldKind::Tel),
        FieldDefinition::new("nationality", FieldKind::Text),
        FieldDefinition::new("id_number", FieldKind::Text)
            .help_text("booking.field.id_number.help"),
        // Purpose of visit
        FieldDefinition::new("visit_purpose", FieldKind::Select).options(&[
            "tourism",
            "business",
            "family_event",
            "other",
        ]),
        FieldDefinition::new("visit_purpose_other", FieldKind::Text)
            .depends_on("visit_purpose", Predicate::Equals(FieldValue::from("other"))),
        // Accommodation
        FieldDefinition::new("check_in_date", FieldKind::Date),
        FieldDefinition::new("check_out_date", FieldKind::Date)
            .depends_on("check_in_date", Predicate::NotEmpty),
        FieldDefinition::new("number_of_rooms", FieldKind::Number).validation(FieldConstraints {
            min: Some(1.0),
            max: Some(10.0),
            ..Default::default()
        }),
        // Rental
        FieldDefinition::new("pickup_date", FieldKind::Date),
        FieldDefinition::new("return_date", FieldKind::Date)
            .depends_on("pickup_date", Predicate::NotEmpty),
        FieldDefinition::new("pickup_location", FieldKind::Text),
        FieldDefinition::new("dropoff_location", FieldKind::Text),
        FieldDefinition::new("driver_license_number", FieldKind::Text),
        FieldDefinition::new("driver_age", FieldKind::Number).validation(FieldConstraints {
            min: Some(18.0),
            max: Some(99.0),
            ..Default::default()
        }),
        // Transfer
        FieldDefinition::new("pickup_time", FieldKind::Text)
            .help_text("booking.field.pickup_time.help")
            .validation(FieldConstraints {
                pattern: Some(r"^([01][0-9]|2[0-3]):[0-5][0-9]$".to_string()),
                ..Default::default()
            }),
        FieldDefinition::new("flight_number", FieldKind::Text).validation(FieldConstraints {
            pattern: Some(r"^[A-Z]{2,3}\s?\d{1,4}$".to_string()),
            ..Default::default()
        }),
        FieldDefinition::new("luggage_count", FieldKind::Number).validation(FieldConstraints {
            min: Some(0.0),
            max: Some(20.0),
            ..Default::default()
        }),
        // Tour
        FieldDefinition::new("tour_language", FieldKind::Select).options(&[
            "english",
            "spanish",
            "french",
            "german",
        ]),
        FieldDefinition::new("dietary_requirements", FieldKind::Textarea).validation(
            FieldConstraints {
                max_length: Some(300),
                ..Default::default()
            },
        ),
        // Emergency contact
        FieldDefinition::new("emergency_contact_name", FieldKind::Text),
        FieldDefinition::new("emergency_contact_phone", FieldKind::Tel)
            .depends_on("emergency_contact_name", Predicate::NotEmpty),
        // Payment and misc
        FieldDefinition::new("payment_method", FieldKind::Select).options(&[
            "card",
            "cash",
            "bank_transfer",
        ]),
        FieldDefinition::new("special_requests", FieldKind::Textarea).validation(
            FieldConstraints {
                max_length: Some(500),
                ..Default::default()
            },
        ),
        FieldDefinition::new("recipient_email", FieldKind::Email),
    ])
}
