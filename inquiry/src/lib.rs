pub(crate) mod base;
pub(crate) mod error;

pub mod client;
pub mod form;
pub mod http;
pub mod loader;
pub mod notify;
pub mod schema;
pub mod submit;

pub use base::config::{
    EnvironmentConfig, InquiryConfig, BASE_URL_KEY, INQUIRY_PATH_KEY,
    LOGIN_URL_KEY, PROFILE_PATH_KEY,
};
pub use client::InquiryClient;
pub use error::InquiryError;
pub use loader::LoadGate;
