mod definition;
mod field_kind;

pub use definition::{FieldDefinition, FieldOption, REQUIRED_SENTINEL};
pub use field_kind::FieldKind;
use log::warn;
use serde_json::Value;

use crate::InquiryError;

/// Remotely defined shape of the form, in the order the API lists the
/// fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    fields: Vec<(String, FieldDefinition)>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field<S: Into<String>>(
        mut self,
        name: S,
        field: FieldDefinition,
    ) -> Self {
        self.insert(name, field);
        self
    }

    pub fn insert<S: Into<String>>(&mut self, name: S, field: FieldDefinition) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = field,
            None => self.fields.push((name, field)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, field)| field)
    }

    pub fn fields(&self) -> &[(String, FieldDefinition)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields sorted by `order_no`, highest first. A missing `order_no`
    /// counts as 0 and equal keys keep their wire order.
    pub fn ordered_fields(&self) -> Vec<(&str, &FieldDefinition)> {
        let mut ordered: Vec<(&str, &FieldDefinition)> = self
            .fields
            .iter()
            .map(|(name, field)| (name.as_str(), field))
            .collect();
        ordered.sort_by(|a, b| b.1.sort_key().cmp(&a.1.sort_key()));
        ordered
    }

    /// Parses the `{ "details": { "cols": { .. } } }` envelope returned by
    /// the inquiry endpoint.
    pub fn from_response_body(body: &[u8]) -> Result<Self, InquiryError> {
        let payload: Value = serde_json::from_slice(body)?;
        Self::from_payload(&payload)
    }

    pub fn from_payload(payload: &Value) -> Result<Self, InquiryError> {
        let details = payload.get("details").ok_or_else(|| {
            InquiryError::MalformedSchema("missing details".to_string())
        })?;
        let cols = details
            .get("cols")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                InquiryError::MalformedSchema(
                    "details.cols is not an object".to_string(),
                )
            })?;

        let mut schema = FormSchema::new();
        for (name, value) in cols {
            match serde_json::from_value::<FieldDefinition>(value.clone()) {
                Ok(field) => schema.insert(name.clone(), field),
                Err(err) => warn!("Skipping field {}: {}", name, err),
            }
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with_order(order_no: Option<i64>) -> FieldDefinition {
        let field = FieldDefinition::new(1, "Field");
        match order_no {
            Some(order_no) => field.with_order_no(order_no),
            None => field,
        }
    }

    #[test]
    fn test_ordered_fields_descending() {
        let schema = FormSchema::new()
            .with_field("five", field_with_order(Some(5)))
            .with_field("missing", field_with_order(None))
            .with_field("one", field_with_order(Some(1)))
            .with_field("ten", field_with_order(Some(10)));

        let names: Vec<&str> =
            schema.ordered_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["ten", "five", "one", "missing"]);
    }

    #[test]
    fn test_ordered_fields_ties_keep_wire_order() {
        let schema = FormSchema::new()
            .with_field("b", field_with_order(Some(0)))
            .with_field("a", field_with_order(None))
            .with_field("c", field_with_order(Some(-1)))
            .with_field("d", field_with_order(Some(0)));

        let names: Vec<&str> =
            schema.ordered_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "d", "c"]);
    }

    #[test]
    fn test_from_response_body_keeps_wire_order() {
        let body = br#"{
            "details": {
                "cols": {
                    "zeta": {"type": 1, "title": "Zeta"},
                    "alpha": {"type": 2, "title": "Alpha", "required": 2},
                    "mid": {"type": 99, "title": "Unknown"}
                }
            }
        }"#;
        let schema = FormSchema::from_response_body(body).unwrap();
        let names: Vec<&str> =
            schema.fields().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(schema.get("alpha").unwrap().is_required());
        assert_eq!(schema.get("mid").unwrap().kind(), FieldKind::Unknown(99));
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            FormSchema::from_response_body(b"{}"),
            Err(InquiryError::MalformedSchema(_))
        ));
        assert!(matches!(
            FormSchema::from_response_body(br#"{"details": null}"#),
            Err(InquiryError::MalformedSchema(_))
        ));
        assert!(matches!(
            FormSchema::from_response_body(br#"{"details": {"cols": []}}"#),
            Err(InquiryError::MalformedSchema(_))
        ));
        assert!(matches!(
            FormSchema::from_response_body(b"<html>"),
            Err(InquiryError::Json(_))
        ));
    }

    #[test]
    fn test_invalid_field_is_skipped() {
        let body = br#"{"details": {"cols": {
            "ok": {"type": 1, "title": "Ok"},
            "broken": {"title": "No type"}
        }}}"#;
        let schema = FormSchema::from_response_body(body).unwrap();
        assert_eq!(schema.len(), 1);
        assert!(schema.get("ok").is_some());
    }

    #[test]
    fn test_null_attributes_keep_field() {
        let body = br#"{"details": {"cols": {
            "name": {"type": 1, "title": null, "required": 2},
            "topic": {"type": 4, "contents": [{"key": "a", "value": null}]},
            "ok": {"type": 1, "title": "Ok", "order_no": null}
        }}}"#;
        let schema = FormSchema::from_response_body(body).unwrap();

        let names: Vec<&str> =
            schema.fields().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["name", "topic", "ok"]);

        let name = schema.get("name").unwrap();
        assert_eq!(name.title, "");
        assert!(name.is_required());

        let topic = schema.get("topic").unwrap();
        assert_eq!(topic.options, vec![FieldOption::new("a", "")]);
        match crate::form::dispatch("topic", topic) {
            crate::form::Widget::TextField {
                select: Some(items),
                ..
            } => assert_eq!(items[0].label, "-"),
            other => panic!("unexpected widget {:?}", other),
        }
    }
}
