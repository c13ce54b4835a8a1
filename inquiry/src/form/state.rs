use std::fmt;

use log::debug;

use super::layout::FormLayout;
use super::values::{FieldValue, FormValues};
use super::widget::Widget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    missing: Vec<String>,
}

impl ValidationErrors {
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    pub fn contains(&self, name: &str) -> bool {
        self.missing.iter().any(|field| field == name)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Required fields missing: {}", self.missing.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RegisteredField {
    name: String,
    required: bool,
    value: FieldValue,
}

/// Current values of every registered field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<RegisteredField>,
}

impl FormState {
    pub fn from_layout(layout: &FormLayout) -> Self {
        let fields = layout
            .supported()
            .filter_map(|widget| {
                let value = match widget {
                    Widget::TextField { .. } => FieldValue::empty(),
                    Widget::RadioGroup { selected, .. } => FieldValue::Single(
                        selected.clone().unwrap_or_default(),
                    ),
                    Widget::CheckboxGroup { initial, .. } => {
                        FieldValue::Multiple(initial.clone())
                    }
                    Widget::Unsupported { .. } => return None,
                };
                Some(RegisteredField {
                    name: widget.name().to_string(),
                    required: widget.is_required(),
                    value,
                })
            })
            .collect();
        Self { fields }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut RegisteredField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    pub fn set_text<S: Into<String>>(&mut self, name: &str, text: S) {
        match self.field_mut(name) {
            Some(field) => field.value = FieldValue::Single(text.into()),
            None => debug!("Ignoring input for unregistered field {}", name),
        }
    }

    pub fn select<S: Into<String>>(&mut self, name: &str, key: S) {
        self.set_text(name, key);
    }

    /// Adds `key` to a multi-valued field when `checked`, removes it
    /// otherwise. A value that is not a list is treated as an empty list.
    pub fn toggle(&mut self, name: &str, key: &str, checked: bool) {
        let field = match self.field_mut(name) {
            Some(field) => field,
            None => {
                debug!("Ignoring toggle for unregistered field {}", name);
                return;
            }
        };
        let mut keys = match &field.value {
            FieldValue::Multiple(keys) => keys.clone(),
            FieldValue::Single(_) => Vec::new(),
        };
        if checked {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        } else {
            keys.retain(|k| k != key);
        }
        field.value = FieldValue::Multiple(keys);
    }

    pub fn is_checked(&self, name: &str, key: &str) -> bool {
        match self.value(name) {
            Some(FieldValue::Multiple(keys)) => keys.iter().any(|k| k == key),
            _ => false,
        }
    }

    pub fn is_missing(&self, name: &str) -> bool {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map_or(false, |field| field.required && field.value.is_empty())
    }

    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }

    /// Values ready for submission, or the required fields left empty.
    pub fn validate(&self) -> Result<FormValues, ValidationErrors> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|field| field.required && field.value.is_empty())
            .map(|field| field.name.clone())
            .collect();
        if missing.is_empty() {
            Ok(self.values())
        } else {
            Err(ValidationErrors { missing })
        }
    }
}
