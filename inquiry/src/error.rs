use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum InquiryError {
    Config(String),
    Http(String),
    Json(serde_json::Error),
    MalformedSchema(String),
    #[cfg(target_arch = "wasm32")]
    Js(wasm_bindgen::JsValue),
}

impl fmt::Display for InquiryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InquiryError::Config(s) => write!(f, "Config error: {}", s),
            InquiryError::Http(s) => write!(f, "Http error: {}", s),
            InquiryError::Json(e) => write!(f, "Json error: {}", e),
            InquiryError::MalformedSchema(s) => {
                write!(f, "Malformed schema: {}", s)
            }
            #[cfg(target_arch = "wasm32")]
            InquiryError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| "Unknown error".to_string())
            ),
        }
    }
}

impl Error for InquiryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InquiryError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for InquiryError {
    fn from(error: serde_json::Error) -> Self {
        InquiryError::Json(error)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for InquiryError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        InquiryError::Js(error)
    }
}
