//! Canonical document codec
//!
//! The single point where untyped stored JSON becomes typed [`FormContent`]
//! and back. The canonical document has exactly two top-level keys:
//!
//! ```json
//! { "formTitle": "...", "formFields": [ { "label": "...", "name": "...",
//!   "type": "...", "placeholder": "...", "options": [...], "required": false } ] }
//! ```
//!
//! Encoding normalizes attribute applicability per field type: `options` is
//! always written (empty when unset) for choice-style fields and never for
//! anything else; `placeholder` is written only where the type accepts it.
//! Decoding is defensive about stored documents that predate normalization:
//! inapplicable attributes are dropped, a missing `formFields` array yields
//! an empty sequence, and an option-bearing field without an `options` key
//! comes back with an empty list. Session keys are never part of the
//! document in either direction.

use thiserror::Error;

use crate::form::FormContent;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed form document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Normalize each field's optional attributes to what its type allows.
fn normalize(mut content: FormContent) -> FormContent {
    for field in &mut content.fields {
        if field.field_type.needs_options() {
            if field.options.is_none() {
                field.options = Some(Vec::new());
            }
        } else {
            field.options = None;
        }

        if !field.field_type.accepts_placeholder() {
            field.placeholder = None;
        }
    }
    content
}

/// Encode content as canonical JSON document text.
pub fn encode(content: &FormContent) -> Result<String, CodecError> {
    let normalized = normalize(content.clone());
    Ok(serde_json::to_string(&normalized)?)
}

/// Decode a stored document string into typed content.
pub fn decode(document: &str) -> Result<FormContent, CodecError> {
    let content: FormContent = serde_json::from_str(document)?;
    Ok(normalize(content))
}

/// Decode already-structured JSON, for callers holding a parsed value
/// rather than the stored text.
pub fn decode_value(document: serde_json::Value) -> Result<FormContent, CodecError> {
    let content: FormContent = serde_json::from_value(document)?;
    Ok(normalize(content))
}
