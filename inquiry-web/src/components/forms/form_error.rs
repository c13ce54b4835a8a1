use inquiry::form::ValidationErrors;
use inquiry::InquiryError;

#[derive(Debug, Clone)]
pub enum FormError {
    SubmitError(String),
    ValidationError { fields: Vec<String> },
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::SubmitError(msg) => write!(f, "Submit error: {}", msg),
            FormError::ValidationError { fields } => {
                write!(f, "Validation error: {} required", fields.join(", "))
            }
        }
    }
}

impl From<InquiryError> for FormError {
    fn from(err: InquiryError) -> Self {
        FormError::SubmitError(err.to_string())
    }
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        FormError::ValidationError {
            fields: errors.missing().to_vec(),
        }
    }
}
