//! In-memory form editing session
//!
//! A `FormEditor` is a caller-owned mutation surface over one form's
//! content. Fields are addressed by a transient session key that is never
//! persisted; keys are regenerated every time a session is built from
//! stored content. All operations are synchronous and total: unknown keys
//! and out-of-range indices degrade to no-ops rather than errors.

use uuid::Uuid;

use crate::form::{FieldDefinition, FieldType, FormContent};

/// Transient identifier addressing a field within one editing session.
pub type FieldKey = Uuid;

/// Direction for [`FormEditor::move_field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A field together with its session key.
#[derive(Clone, Debug)]
pub struct EditorField {
    pub key: FieldKey,
    pub field: FieldDefinition,
}

/// Partial update applied to one field. Attributes left as `None` are
/// untouched; `clear_placeholder`/`clear_options` exist because `None`
/// already means "no change" for the optional attributes.
#[derive(Clone, Debug, Default)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub placeholder: Option<String>,
    pub options: Option<Vec<String>>,
    pub required: Option<bool>,
    pub clear_placeholder: bool,
    pub clear_options: bool,
}

/// Single-writer editing session over one form.
pub struct FormEditor {
    title: String,
    fields: Vec<EditorField>,
}

impl FormEditor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Build a session from decoded content, assigning a fresh session key
    /// to each field positionally.
    pub fn from_content(content: FormContent) -> Self {
        Self {
            title: content.title,
            fields: content
                .fields
                .into_iter()
                .map(|field| EditorField {
                    key: Uuid::new_v4(),
                    field,
                })
                .collect(),
        }
    }

    /// Snapshot of the session as plain content. Session keys are stripped.
    pub fn content(&self) -> FormContent {
        FormContent {
            title: self.title.clone(),
            fields: self.fields.iter().map(|f| f.field.clone()).collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[EditorField] {
        &self.fields
    }

    pub fn field(&self, key: FieldKey) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.field)
    }

    /// Replace the title. No validation happens here; the validation gate
    /// runs at save time.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Append a new field with default attributes and return its key.
    pub fn add_field(&mut self) -> FieldKey {
        let key = Uuid::new_v4();
        let field = FieldDefinition {
            label: "New Field".to_string(),
            name: format!("field_{}", self.fields.len() + 1),
            field_type: FieldType::Text,
            placeholder: Some("Enter value".to_string()),
            options: None,
            required: false,
        };
        self.fields.push(EditorField { key, field });
        key
    }

    /// Merge a partial update into the addressed field.
    ///
    /// Changing the type does not strip now-inapplicable attributes; the
    /// codec drops those at encode time, so switching a field from `select`
    /// back to `text` and forth does not lose its options mid-session.
    pub fn update_field(&mut self, key: FieldKey, patch: FieldPatch) {
        let Some(entry) = self.fields.iter_mut().find(|f| f.key == key) else {
            return;
        };

        let field = &mut entry.field;
        if let Some(label) = patch.label {
            field.label = label;
        }
        if let Some(name) = patch.name {
            field.name = name;
        }
        if let Some(field_type) = patch.field_type {
            field.field_type = field_type;
        }
        if let Some(placeholder) = patch.placeholder {
            field.placeholder = Some(placeholder);
        }
        if let Some(options) = patch.options {
            field.options = Some(options);
        }
        if let Some(required) = patch.required {
            field.required = required;
        }
        if patch.clear_placeholder {
            field.placeholder = None;
        }
        if patch.clear_options {
            field.options = None;
        }
    }

    /// Remove the addressed field, preserving the order of the rest.
    pub fn delete_field(&mut self, key: FieldKey) {
        self.fields.retain(|f| f.key != key);
    }

    /// Swap the addressed field with its immediate neighbor. No-op when the
    /// field is already at that boundary or the key is unknown.
    pub fn move_field(&mut self, key: FieldKey, direction: Direction) {
        let Some(index) = self.fields.iter().position(|f| f.key == key) else {
            return;
        };

        match direction {
            Direction::Up if index > 0 => self.fields.swap(index, index - 1),
            Direction::Down if index + 1 < self.fields.len() => {
                self.fields.swap(index, index + 1)
            }
            _ => {}
        }
    }

    /// Append a default option to the addressed field, treating an absent
    /// options list as empty.
    pub fn add_option(&mut self, key: FieldKey) {
        let Some(entry) = self.fields.iter_mut().find(|f| f.key == key) else {
            return;
        };
        entry
            .field
            .options
            .get_or_insert_with(Vec::new)
            .push("New Option".to_string());
    }

    /// Replace one option by index. Out-of-range indices are no-ops.
    pub fn update_option(&mut self, key: FieldKey, index: usize, value: impl Into<String>) {
        let Some(entry) = self.fields.iter_mut().find(|f| f.key == key) else {
            return;
        };
        if let Some(options) = entry.field.options.as_mut() {
            if let Some(slot) = options.get_mut(index) {
                *slot = value.into();
            }
        }
    }

    /// Remove one option by index. Out-of-range indices are no-ops.
    pub fn delete_option(&mut self, key: FieldKey, index: usize) {
        let Some(entry) = self.fields.iter_mut().find(|f| f.key == key) else {
            return;
        };
        if let Some(options) = entry.field.options.as_mut() {
            if index < options.len() {
                options.remove(index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_fields(labels: &[&str]) -> FormEditor {
        let fields = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                FieldDefinition::new(*label, format!("field_{}", i + 1), FieldType::Text)
            })
            .collect();
        FormEditor::from_content(FormContent::with_fields("Test Form", fields))
    }

    #[test]
    fn test_add_field_defaults() {
        let mut editor = FormEditor::new("Test Form");
        let key = editor.add_field();

        let field = editor.field(key).unwrap();
        assert_eq!(field.label, "New Field");
        assert_eq!(field.name, "field_1");
        assert_eq!(field.field_type, FieldType::Text);
        assert_eq!(field.placeholder.as_deref(), Some("Enter value"));
        assert!(!field.required);
    }

    #[test]
    fn test_session_keys_unique() {
        let mut editor = session_with_fields(&["A", "B", "C"]);
        let extra = editor.add_field();

        let mut keys: Vec<FieldKey> = editor.fields().iter().map(|f| f.key).collect();
        keys.push(extra);
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_add_then_delete_restores_sequence() {
        let mut editor = session_with_fields(&["A", "B"]);
        let before = editor.content();

        let key = editor.add_field();
        assert_eq!(editor.fields().len(), 3);

        editor.delete_field(key);
        assert_eq!(editor.content(), before);
    }

    #[test]
    fn test_update_field_merges_partial() {
        let mut editor = session_with_fields(&["A"]);
        let key = editor.fields()[0].key;

        editor.update_field(
            key,
            FieldPatch {
                label: Some("Renamed".to_string()),
                required: Some(true),
                ..Default::default()
            },
        );

        let field = editor.field(key).unwrap();
        assert_eq!(field.label, "Renamed");
        assert_eq!(field.name, "field_1"); // untouched
        assert!(field.required);
    }

    #[test]
    fn test_update_unknown_key_is_noop() {
        let mut editor = session_with_fields(&["A"]);
        let before = editor.content();

        editor.update_field(
            Uuid::new_v4(),
            FieldPatch {
                label: Some("Ghost".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(editor.content(), before);
    }

    #[test]
    fn test_move_field_swaps_neighbors() {
        let mut editor = session_with_fields(&["A", "B", "C"]);
        let middle = editor.fields()[1].key;

        editor.move_field(middle, Direction::Up);
        let labels: Vec<&str> = editor
            .fields()
            .iter()
            .map(|f| f.field.label.as_str())
            .collect();
        assert_eq!(labels, ["B", "A", "C"]);

        editor.move_field(middle, Direction::Down);
        let labels: Vec<&str> = editor
            .fields()
            .iter()
            .map(|f| f.field.label.as_str())
            .collect();
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn test_move_at_boundaries_is_noop() {
        let mut editor = session_with_fields(&["A", "B"]);
        let first = editor.fields()[0].key;
        let last = editor.fields()[1].key;
        let before = editor.content();

        editor.move_field(first, Direction::Up);
        editor.move_field(last, Direction::Down);
        assert_eq!(editor.content(), before);
    }

    #[test]
    fn test_delete_preserves_order_of_rest() {
        let mut editor = session_with_fields(&["A", "B", "C"]);
        let middle = editor.fields()[1].key;

        editor.delete_field(middle);
        let labels: Vec<&str> = editor
            .fields()
            .iter()
            .map(|f| f.field.label.as_str())
            .collect();
        assert_eq!(labels, ["A", "C"]);
    }

    #[test]
    fn test_add_option_starts_from_empty() {
        let mut editor = session_with_fields(&["A"]);
        let key = editor.fields()[0].key;
        assert!(editor.field(key).unwrap().options.is_none());

        editor.add_option(key);
        editor.add_option(key);
        assert_eq!(
            editor.field(key).unwrap().options,
            Some(vec!["New Option".to_string(), "New Option".to_string()])
        );
    }

    #[test]
    fn test_option_index_out_of_range_is_noop() {
        let mut editor = session_with_fields(&["A"]);
        let key = editor.fields()[0].key;
        editor.add_option(key);

        editor.update_option(key, 5, "Nope");
        editor.delete_option(key, 5);
        assert_eq!(
            editor.field(key).unwrap().options,
            Some(vec!["New Option".to_string()])
        );
    }

    #[test]
    fn test_update_and_delete_option() {
        let mut editor = session_with_fields(&["A"]);
        let key = editor.fields()[0].key;
        editor.add_option(key);
        editor.add_option(key);

        editor.update_option(key, 0, "Red");
        editor.update_option(key, 1, "Blue");
        editor.delete_option(key, 0);
        assert_eq!(
            editor.field(key).unwrap().options,
            Some(vec!["Blue".to_string()])
        );
    }

    #[test]
    fn test_set_title() {
        let mut editor = session_with_fields(&["A"]);
        editor.set_title("Renamed Form");
        assert_eq!(editor.title(), "Renamed Form");
    }
}
