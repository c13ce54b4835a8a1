use inquiry::{
    EnvironmentConfig, InquiryConfig, InquiryError, BASE_URL_KEY,
    INQUIRY_PATH_KEY, LOGIN_URL_KEY, PROFILE_PATH_KEY,
};

// the browser has no process environment: values are fixed at build time
const BUILD_SETTINGS: [(&str, Option<&str>); 4] = [
    (BASE_URL_KEY, option_env!("INQUIRY_BASE_URL")),
    (INQUIRY_PATH_KEY, option_env!("INQUIRY_PATH")),
    (PROFILE_PATH_KEY, option_env!("PROFILE_PATH")),
    (LOGIN_URL_KEY, option_env!("LOGIN_URL")),
];

pub fn build_environment() -> EnvironmentConfig {
    let mut environment = EnvironmentConfig::default();
    for (key, value) in BUILD_SETTINGS {
        if let Some(value) = value {
            environment.insert(key.to_string(), value.to_string());
        }
    }
    environment
}

pub fn load_config() -> Result<InquiryConfig, InquiryError> {
    InquiryConfig::from_environment(&build_environment())
}
