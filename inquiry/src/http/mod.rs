#[cfg(not(target_arch = "wasm32"))]
mod requests;
#[cfg(target_arch = "wasm32")]
mod requests_wasm32;

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(not(target_arch = "wasm32"))]
pub use requests::UnavailableTransport;
#[cfg(target_arch = "wasm32")]
pub use requests_wasm32::FetchTransport;

use crate::InquiryError;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Transport the application uses on the current target.
#[cfg(target_arch = "wasm32")]
pub type DefaultTransport = FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTransport = UnavailableTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get<S: Into<String>>(url: S) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn post_json<S: Into<String>>(url: S, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            "Content-Type".to_string(),
            CONTENT_TYPE_JSON.to_string(),
        );
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers,
            body: Some(body),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new<B: Into<Bytes>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests with the browser session's credentials attached.
/// Every HTTP status is returned as a response; only failures to reach
/// the server are errors.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, InquiryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_sets_content_type() {
        let request = HttpRequest::post_json("https://x/y", "{}".to_string());
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some(CONTENT_TYPE_JSON)
        );
        assert_eq!(request.body.as_deref(), Some("{}"));

        let request = HttpRequest::get("https://x/y");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_response_status() {
        assert!(HttpResponse::new(204, Vec::new()).is_success());
        assert!(!HttpResponse::new(401, Vec::new()).is_success());
        assert!(!HttpResponse::new(302, Vec::new()).is_success());
    }
}
