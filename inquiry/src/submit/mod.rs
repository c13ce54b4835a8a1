use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::notify::{Notification, NotificationQueue};
use crate::InquiryError;

pub const SUCCESS_MESSAGE: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted,
    Rejected(Vec<ErrorRecord>),
}

impl SubmissionResult {
    /// Any JSON body without a non-empty `errors` array counts as
    /// accepted.
    pub fn from_response_body(body: &[u8]) -> Result<Self, InquiryError> {
        let payload: Value = serde_json::from_slice(body)?;
        Ok(Self::from_payload(&payload))
    }

    pub fn from_payload(payload: &Value) -> Self {
        let errors: Vec<ErrorRecord> = payload
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| errors.iter().map(error_record).collect())
            .unwrap_or_default();
        if errors.is_empty() {
            SubmissionResult::Accepted
        } else {
            SubmissionResult::Rejected(errors)
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted)
    }

    /// One error notification per record in order, or a single success.
    pub fn notifications(&self) -> Vec<Notification> {
        match self {
            SubmissionResult::Accepted => {
                vec![Notification::success(SUCCESS_MESSAGE)]
            }
            SubmissionResult::Rejected(errors) => errors
                .iter()
                .map(|record| Notification::error(record.message.clone()))
                .collect(),
        }
    }

    pub fn notify(&self, queue: &mut NotificationQueue) {
        for notification in self.notifications() {
            queue.push(notification);
        }
    }
}

fn error_record(value: &Value) -> ErrorRecord {
    let message = match value.get("message") {
        Some(Value::String(message)) => message.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    ErrorRecord { message }
}
