use crate::schema::{FieldDefinition, FieldKind, FieldOption};

const EMPTY_LABEL: &str = "-";
const TEXT_AREA_MIN_ROWS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub value: String,
    pub label: String,
}

impl From<&FieldOption> for MenuItem {
    fn from(option: &FieldOption) -> Self {
        let label = if option.value.is_empty() {
            EMPTY_LABEL.to_string()
        } else {
            option.value.clone()
        };
        Self {
            value: option.key.clone(),
            label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl From<&FieldOption> for Choice {
    fn from(option: &FieldOption) -> Self {
        Self {
            value: option.key.clone(),
            label: option.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    TextField {
        name: String,
        label: String,
        multiline: bool,
        min_rows: u32,
        select: Option<Vec<MenuItem>>,
        required: bool,
        autocomplete: String,
    },
    RadioGroup {
        name: String,
        label: String,
        choices: Vec<Choice>,
        selected: Option<String>,
    },
    CheckboxGroup {
        name: String,
        label: String,
        choices: Vec<Choice>,
        initial: Vec<String>,
    },
    Unsupported {
        name: String,
        code: i64,
    },
}

impl Widget {
    pub fn name(&self) -> &str {
        match self {
            Widget::TextField { name, .. }
            | Widget::RadioGroup { name, .. }
            | Widget::CheckboxGroup { name, .. }
            | Widget::Unsupported { name, .. } => name,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Widget::TextField { required: true, .. })
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Widget::Unsupported { .. })
    }
}

/// Maps one field definition onto the widget that renders it.
pub fn dispatch(name: &str, field: &FieldDefinition) -> Widget {
    let kind = field.kind();
    match kind {
        FieldKind::SingleLineText
        | FieldKind::MultiLineText
        | FieldKind::Dropdown => Widget::TextField {
            name: name.to_string(),
            label: field.title.clone(),
            multiline: kind.is_multi_line(),
            min_rows: TEXT_AREA_MIN_ROWS,
            select: kind
                .is_dropdown()
                .then(|| field.options.iter().map(MenuItem::from).collect()),
            required: field.is_required(),
            autocomplete: name.to_string(),
        },
        FieldKind::SingleSelect => Widget::RadioGroup {
            name: name.to_string(),
            label: field.title.clone(),
            choices: field.options.iter().map(Choice::from).collect(),
            // several defaults: the last one wins
            selected: field
                .options
                .iter()
                .rev()
                .find(|option| option.default)
                .map(|option| option.key.clone()),
        },
        FieldKind::MultiSelect => Widget::CheckboxGroup {
            name: name.to_string(),
            label: field.title.clone(),
            choices: field.options.iter().map(Choice::from).collect(),
            initial: field
                .options
                .iter()
                .filter(|option| option.default)
                .map(|option| option.key.clone())
                .collect(),
        },
        FieldKind::Unknown(code) => Widget::Unsupported {
            name: name.to_string(),
            code,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<FieldOption> {
        vec![
            FieldOption::new("a", "Alpha").with_default(true),
            FieldOption::new("b", ""),
            FieldOption::new("c", "Gamma").with_default(true),
        ]
    }

    #[test]
    fn test_text_family_required_flag() {
        for code in [1, 2, 4] {
            for (required, expected) in
                [
                    (None, false),
                    (Some(0), false),
                    (Some(1), false),
                    (Some(2), true),
                ]
            {
                let mut field = FieldDefinition::new(code, "Title");
                field.required = required;
                let widget = dispatch("name", &field);
                match widget {
                    Widget::TextField { required, .. } => {
                        assert_eq!(required, expected, "code {}", code)
                    }
                    other => panic!("unexpected widget {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_single_and_multi_line() {
        let single = dispatch("email", &FieldDefinition::new(1, "Email"));
        let multi = dispatch("body", &FieldDefinition::new(2, "Body"));
        match (single, multi) {
            (
                Widget::TextField {
                    multiline: false,
                    select: None,
                    autocomplete,
                    label,
                    ..
                },
                Widget::TextField {
                    multiline: true,
                    select: None,
                    min_rows,
                    ..
                },
            ) => {
                assert_eq!(autocomplete, "email");
                assert_eq!(label, "Email");
                assert_eq!(min_rows, 4);
            }
            other => panic!("unexpected widgets {:?}", other),
        }
    }

    #[test]
    fn test_dropdown_menu_items() {
        let field = FieldDefinition::new(4, "Topic").with_options(options());
        let widget = dispatch("topic", &field);
        let items = match widget {
            Widget::TextField {
                select: Some(items),
                multiline: false,
                ..
            } => items,
            other => panic!("unexpected widget {:?}", other),
        };
        let pairs: Vec<(&str, &str)> = items
            .iter()
            .map(|item| (item.value.as_str(), item.label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "Alpha"), ("b", "-"), ("c", "Gamma")]);
    }

    #[test]
    fn test_radio_picks_last_default() {
        let field = FieldDefinition::new(3, "Plan").with_options(options());
        match dispatch("plan", &field) {
            Widget::RadioGroup {
                choices, selected, ..
            } => {
                assert_eq!(selected.as_deref(), Some("c"));
                assert_eq!(choices[1].label, "");
                assert_eq!(choices[1].value, "b");
            }
            other => panic!("unexpected widget {:?}", other),
        }

        let no_default = FieldDefinition::new(3, "Plan")
            .with_options(vec![FieldOption::new("x", "X")]);
        assert!(matches!(
            dispatch("plan", &no_default),
            Widget::RadioGroup { selected: None, .. }
        ));
    }

    #[test]
    fn test_checkbox_initial_defaults_in_order() {
        let field = FieldDefinition::new(5, "Tags").with_options(options());
        match dispatch("tags", &field) {
            Widget::CheckboxGroup {
                initial, choices, ..
            } => {
                assert_eq!(initial, vec!["a".to_string(), "c".to_string()]);
                assert_eq!(choices.len(), 3);
            }
            other => panic!("unexpected widget {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let widget = dispatch("mystery", &FieldDefinition::new(99, "?"));
        assert_eq!(
            widget,
            Widget::Unsupported {
                name: "mystery".to_string(),
                code: 99
            }
        );
        assert!(!widget.is_supported());
        assert!(!widget.is_required());
        assert_eq!(widget.name(), "mystery");
    }
}
