use serde::{Deserialize, Serialize};

use super::FieldKind;

/// `required` value that marks a field as mandatory. Any other value,
/// including a missing one, leaves the field optional.
pub const REQUIRED_SENTINEL: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldOption {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default: bool,
}

impl FieldOption {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            default: false,
        }
    }

    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub type_code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub required: Option<i64>,
    #[serde(
        default,
        rename = "contents",
        alias = "options",
        deserialize_with = "null_as_default"
    )]
    pub options: Vec<FieldOption>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_no: Option<i64>,
}

impl FieldDefinition {
    pub fn new<S: Into<String>>(type_code: i64, title: S) -> Self {
        Self {
            type_code,
            title: title.into(),
            required: None,
            options: Vec::new(),
            order_no: None,
        }
    }

    pub fn with_required(mut self, required: i64) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = FieldOption>,
    {
        self.options = options.into_iter().collect();
        self
    }

    pub fn with_order_no(mut self, order_no: i64) -> Self {
        self.order_no = Some(order_no);
        self
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_code(self.type_code)
    }

    pub fn is_required(&self) -> bool {
        self.required == Some(REQUIRED_SENTINEL)
    }

    pub fn sort_key(&self) -> i64 {
        self.order_no.unwrap_or(0)
    }
}

/// A JSON `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
