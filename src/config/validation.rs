use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty
/// - API base URL must use the http:// or https:// scheme
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    api_base_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_base_url.trim().is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "API base URL must start with http:// or https:// (got '{api_base_url}')"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
