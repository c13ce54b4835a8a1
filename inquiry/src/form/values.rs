use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::InquiryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Single(String::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Single(text) => Some(text),
            FieldValue::Multiple(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Single(_) => None,
            FieldValue::Multiple(items) => Some(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Single(text) => text.is_empty(),
            FieldValue::Multiple(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Single(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Single(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::Multiple(items)
    }
}

/// Collected field values, serialized as the JSON body of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues {
    values: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>, V: Into<FieldValue>>(
        &mut self,
        name: S,
        value: V,
    ) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    pub fn to_json(&self) -> Result<String, InquiryError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<S: Into<String>, V: Into<FieldValue>> FromIterator<(S, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}
