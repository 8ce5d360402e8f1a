use super::{Config, ConfigError};

/// Validate a loaded configuration before use.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let endpoints = &config.endpoints;

    if endpoints.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "endpoints.base_url must not be empty".to_string(),
        ));
    }

    if !endpoints.base_url.starts_with("http://") && !endpoints.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "endpoints.base_url must be an http(s) URL, got: {}",
            endpoints.base_url
        )));
    }

    if endpoints.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "endpoints.timeout_secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
