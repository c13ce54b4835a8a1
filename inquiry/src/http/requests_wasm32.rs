use async_trait::async_trait;
use bytes::Bytes;
use js_sys::{ArrayBuffer, Uint8Array};
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Headers, Request, RequestCredentials, RequestInit, RequestMode, Response,
};

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::InquiryError;

/// `window.fetch` with credentials included.
#[derive(Clone, Debug, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse, InquiryError> {
        info!("http_request: {} {}", request.method.as_str(), request.url);
        let window = web_sys::window().ok_or_else(|| {
            InquiryError::Http("No window available".to_string())
        })?;

        let request_init = RequestInit::new();
        request_init.set_method(request.method.as_str());
        request_init.set_mode(RequestMode::Cors);
        request_init.set_credentials(RequestCredentials::Include);

        let headers_map = Headers::new()?;
        for (key, value) in request.headers.iter() {
            headers_map.set(key, value)?;
        }
        request_init.set_headers(&headers_map);

        if let Some(body) = request.body.as_deref() {
            request_init.set_body(&JsValue::from_str(body));
        }

        let js_request =
            Request::new_with_str_and_init(&request.url, &request_init)?;
        let response_js =
            JsFuture::from(window.fetch_with_request(&js_request)).await?;
        let response: Response = response_js.dyn_into()?;

        let status = response.status();
        let body_js = JsFuture::from(response.array_buffer()?).await?;
        let body: ArrayBuffer = body_js.dyn_into()?;
        let body_bytes = Uint8Array::new(&body).to_vec();

        Ok(HttpResponse::new(status, Bytes::from(body_bytes)))
    }
}
