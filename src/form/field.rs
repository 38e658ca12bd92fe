//! Field descriptor and the closed field-type enumeration

use serde::{Deserialize, Serialize};

/// The set of input types a form field can take.
///
/// Wire names match the canonical document exactly (`"datetime-local"`
/// included), so these serialize as the lowercase strings an HTML input
/// `type` attribute would use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Date,
    Time,
    #[serde(rename = "datetime-local")]
    DatetimeLocal,
}

impl FieldType {
    /// Whether this type carries an `options` list (choice-style inputs).
    pub fn needs_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    /// Whether this type accepts a `placeholder`. Choice and date/time
    /// inputs have nowhere to show one.
    pub fn accepts_placeholder(&self) -> bool {
        !matches!(
            self,
            FieldType::Select
                | FieldType::Radio
                | FieldType::Checkbox
                | FieldType::Date
                | FieldType::Time
                | FieldType::DatetimeLocal
        )
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// One input descriptor within a form.
///
/// `placeholder` and `options` are applicable purely as a function of
/// `field_type`; the codec strips inapplicable attributes on encode, so an
/// in-memory value may temporarily carry both (e.g. right after the editor
/// switches a field's type).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub label: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(label: impl Into<String>, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            field_type,
            placeholder: None,
            options: None,
            required: false,
        }
    }

    /// A field is well-formed when both its label and machine name are
    /// non-empty after trimming.
    pub fn is_well_formed(&self) -> bool {
        !self.label.trim().is_empty() && !self.name.trim().is_empty()
    }
}
