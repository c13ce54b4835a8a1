pub mod config;

pub use config::{EnvironmentConfig, InquiryConfig};
