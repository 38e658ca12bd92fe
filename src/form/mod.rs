//! Form definition types
//!
//! This module holds the typed model of a form: the field enumeration,
//! the per-field descriptor, the ordered form content, and the
//! validate-before-save gate.

pub mod content;
pub mod field;
pub mod validate;

pub use content::FormContent;
pub use field::{FieldDefinition, FieldType};
pub use validate::{validate, ValidationError};

/// Stable identifier of a stored form, assigned at creation.
pub type FormId = i64;

/// Identifier of an owning principal (the authentication provider's user id).
pub type PrincipalId = String;
