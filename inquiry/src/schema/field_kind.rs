/// Widget family selected by a field's integer `type` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SingleLineText,
    MultiLineText,
    SingleSelect,
    Dropdown,
    MultiSelect,
    Unknown(i64),
}

impl FieldKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::SingleLineText,
            2 => Self::MultiLineText,
            3 => Self::SingleSelect,
            4 => Self::Dropdown,
            5 => Self::MultiSelect,
            other => Self::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            Self::SingleLineText => 1,
            Self::MultiLineText => 2,
            Self::SingleSelect => 3,
            Self::Dropdown => 4,
            Self::MultiSelect => 5,
            Self::Unknown(code) => *code,
        }
    }

    // single-line, multi-line and dropdown share one text-field widget
    pub fn is_text_family(&self) -> bool {
        matches!(
            self,
            Self::SingleLineText | Self::MultiLineText | Self::Dropdown
        )
    }

    pub fn is_multi_line(&self) -> bool {
        matches!(self, Self::MultiLineText)
    }

    pub fn is_dropdown(&self) -> bool {
        matches!(self, Self::Dropdown)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<i64> for FieldKind {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        for code in 1..=5 {
            let kind = FieldKind::from_code(code);
            assert!(kind.is_known());
            assert_eq!(kind.code(), code);
        }
        assert!(FieldKind::from_code(1).is_text_family());
        assert!(FieldKind::from_code(2).is_multi_line());
        assert!(FieldKind::from_code(4).is_dropdown());
        assert!(!FieldKind::from_code(3).is_text_family());
        assert!(!FieldKind::from_code(5).is_text_family());
    }

    #[test]
    fn test_unknown_code() {
        let kind = FieldKind::from_code(99);
        assert_eq!(kind, FieldKind::Unknown(99));
        assert!(!kind.is_known());
        assert_eq!(kind.code(), 99);
        assert_eq!(FieldKind::from(0), FieldKind::Unknown(0));
    }
}
