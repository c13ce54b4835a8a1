use std::collections::HashMap;

use crate::InquiryError;

pub const DEFAULT_INQUIRY_PATH: &str = "/rcms-api/1/inquiry/1";
pub const DEFAULT_PROFILE_PATH: &str = "/rcms-api/1/profile";
pub const DEFAULT_LOGIN_URL: &str = "/login";

pub const BASE_URL_KEY: &str = "INQUIRY_BASE_URL";
pub const INQUIRY_PATH_KEY: &str = "INQUIRY_PATH";
pub const PROFILE_PATH_KEY: &str = "PROFILE_PATH";
pub const LOGIN_URL_KEY: &str = "LOGIN_URL";

#[derive(Clone, Default, Debug)]
pub struct EnvironmentConfig {
    pub settings: HashMap<String, String>,
}

impl EnvironmentConfig {
    pub fn new(settings: HashMap<String, String>) -> EnvironmentConfig {
        EnvironmentConfig { settings }
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.settings.get(key)
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.settings.insert(key, value);
    }
}

/// Endpoints of the remote API, resolved once and handed to the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InquiryConfig {
    base_url: String,
    inquiry_path: String,
    profile_path: String,
    login_url: String,
}

impl InquiryConfig {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            inquiry_path: DEFAULT_INQUIRY_PATH.to_string(),
            profile_path: DEFAULT_PROFILE_PATH.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }

    pub fn from_environment(
        environment: &EnvironmentConfig,
    ) -> Result<Self, InquiryError> {
        let base_url = environment
            .get(BASE_URL_KEY)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                InquiryError::Config(format!("{} is not set", BASE_URL_KEY))
            })?;

        let mut config = Self::new(base_url.trim());
        if let Some(path) = environment.get(INQUIRY_PATH_KEY) {
            config.inquiry_path = normalize_path(path);
        }
        if let Some(path) = environment.get(PROFILE_PATH_KEY) {
            config.profile_path = normalize_path(path);
        }
        if let Some(url) = environment.get(LOGIN_URL_KEY) {
            config.login_url = url.clone();
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }

    pub fn inquiry_url(&self) -> String {
        format!("{}{}", self.base_url, self.inquiry_path)
    }

    pub fn profile_url(&self) -> String {
        format!("{}{}", self.base_url, self.profile_path)
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(pairs: &[(&str, &str)]) -> EnvironmentConfig {
        EnvironmentConfig::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_default_endpoints() {
        let config = InquiryConfig::new("https://example.com/");
        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(
            config.inquiry_url(),
            "https://example.com/rcms-api/1/inquiry/1"
        );
        assert_eq!(
            config.profile_url(),
            "https://example.com/rcms-api/1/profile"
        );
        assert_eq!(config.login_url(), "/login");
    }

    #[test]
    fn test_from_environment_overrides() {
        let env = environment(&[
            (BASE_URL_KEY, "https://api.example.com"),
            (INQUIRY_PATH_KEY, "rcms-api/2/inquiry/7"),
            (LOGIN_URL_KEY, "/auth/login"),
        ]);
        let config = InquiryConfig::from_environment(&env).unwrap();
        assert_eq!(
            config.inquiry_url(),
            "https://api.example.com/rcms-api/2/inquiry/7"
        );
        assert_eq!(config.login_url(), "/auth/login");
    }

    #[test]
    fn test_missing_base_url() {
        let result = InquiryConfig::from_environment(&environment(&[]));
        assert!(matches!(result, Err(InquiryError::Config(_))));

        let blank = environment(&[(BASE_URL_KEY, "  ")]);
        assert!(InquiryConfig::from_environment(&blank).is_err());
    }
}
