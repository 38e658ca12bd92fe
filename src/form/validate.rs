//! Pre-save validation gate
//!
//! Checked immediately before persistence; a failure blocks the save with a
//! single first-encountered reason so failure reporting stays deterministic:
//! title first, then field count, then the first ill-formed field in order.

use thiserror::Error;

use super::content::FormContent;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Form title is required")]
    EmptyTitle,

    #[error("At least one field is required")]
    NoFields,

    #[error("Field {0} must have a label and name")]
    InvalidField(usize),
}

/// Check that a form is save-worthy. Never mutates the content.
pub fn validate(content: &FormContent) -> Result<(), ValidationError> {
    if content.title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    if content.fields.is_empty() {
        return Err(ValidationError::NoFields);
    }

    for (index, field) in content.fields.iter().enumerate() {
        if !field.is_well_formed() {
            return Err(ValidationError::InvalidField(index));
        }
    }

    Ok(())
}
