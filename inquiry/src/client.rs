use log::{debug, error, info};

use crate::base::InquiryConfig;
use crate::form::FormValues;
use crate::http::{HttpRequest, HttpTransport};
use crate::schema::FormSchema;
use crate::submit::SubmissionResult;
use crate::InquiryError;

/// Round-trips between the inquiry form and the remote API.
#[derive(Clone, Debug)]
pub struct InquiryClient<T: HttpTransport> {
    config: InquiryConfig,
    transport: T,
}

impl<T: HttpTransport> InquiryClient<T> {
    pub fn new(config: InquiryConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &InquiryConfig {
        &self.config
    }

    pub async fn load_schema(&self) -> Result<FormSchema, InquiryError> {
        let url = self.config.inquiry_url();
        info!("Loading inquiry schema from {}", url);
        let response = self.transport.send(HttpRequest::get(url)).await?;
        let schema = FormSchema::from_response_body(&response.body)?;
        debug!("Loaded inquiry schema with {} fields", schema.len());
        Ok(schema)
    }

    pub async fn submit(
        &self,
        values: &FormValues,
    ) -> Result<SubmissionResult, InquiryError> {
        let url = self.config.inquiry_url();
        info!("Submitting {} fields to {}", values.len(), url);
        let request = HttpRequest::post_json(url, values.to_json()?);
        let response = self.transport.send(request).await?;
        SubmissionResult::from_response_body(&response.body)
    }

    /// Whether the browser session is signed in. Unreachable servers
    /// count as signed out.
    pub async fn check_session(&self) -> bool {
        let url = self.config.profile_url();
        match self.transport.send(HttpRequest::get(url)).await {
            Ok(response) => {
                debug!("Session probe returned status {}", response.status);
                response.is_success()
            }
            Err(err) => {
                error!("Session probe failed: {}", err);
                false
            }
        }
    }
}
