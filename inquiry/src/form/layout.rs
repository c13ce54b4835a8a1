use super::widget::{dispatch, Widget};
use crate::schema::FormSchema;

/// Widgets of a schema in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormLayout {
    widgets: Vec<Widget>,
}

impl FormLayout {
    pub fn from_schema(schema: &FormSchema) -> Self {
        let widgets = schema
            .ordered_fields()
            .into_iter()
            .map(|(name, field)| dispatch(name, field))
            .collect();
        Self { widgets }
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn supported(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter().filter(|widget| widget.is_supported())
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDefinition;

    #[test]
    fn test_unknown_type_does_not_block_siblings() {
        let schema = FormSchema::new()
            .with_field(
                "name",
                FieldDefinition::new(1, "Name").with_order_no(1),
            )
            .with_field("odd", FieldDefinition::new(99, "Odd").with_order_no(2))
            .with_field("body", FieldDefinition::new(2, "Body"));

        let layout = FormLayout::from_schema(&schema);
        let names: Vec<&str> =
            layout.widgets().iter().map(Widget::name).collect();
        assert_eq!(names, vec!["odd", "name", "body"]);

        let supported: Vec<&str> =
            layout.supported().map(Widget::name).collect();
        assert_eq!(supported, vec!["name", "body"]);
    }

    #[test]
    fn test_empty_schema() {
        let layout = FormLayout::from_schema(&FormSchema::new());
        assert!(layout.is_empty());
    }
}
