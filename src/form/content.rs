//! The semantic value of a form: title plus ordered fields

use serde::{Deserialize, Serialize};

use super::field::FieldDefinition;

/// Title and ordered field sequence of one form.
///
/// Field order is the display and submission order and is preserved exactly
/// through every editor mutation and through the encode/decode round trip.
/// Equality is by value: two contents are equal iff their titles and field
/// sequences (in order) are equal.
///
/// Serde attributes here define the canonical document's top-level keys;
/// the [`crate::codec`] module is the only place that should move this type
/// across the persistence boundary, since it also normalizes per-type
/// attribute applicability.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormContent {
    #[serde(rename = "formTitle", default)]
    pub title: String,
    #[serde(rename = "formFields", default)]
    pub fields: Vec<FieldDefinition>,
}

impl FormContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_fields(title: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            title: title.into(),
            fields,
        }
    }
}
