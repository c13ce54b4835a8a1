use async_trait::async_trait;
use log::error;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::InquiryError;

/// Stand-in for targets without `window.fetch`. Every request fails.
#[derive(Clone, Debug, Default)]
pub struct UnavailableTransport;

impl UnavailableTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for UnavailableTransport {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, InquiryError> {
        error!("No HTTP transport for {}", request.url);
        Err(InquiryError::Http(
            "HTTP is only available in the browser".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_transport_fails() {
        let result = UnavailableTransport::new()
            .send(HttpRequest::get("https://example.com"))
            .await;
        assert!(matches!(result, Err(InquiryError::Http(_))));
    }
}
