use crate::error::AppError;

/// Check that `url` uses the `http` or `https` scheme.
///
/// This is a prefix check only; it performs no parsing and no network access.
pub fn validate_url_scheme(url: &str) -> Result<(), AppError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(AppError::InvalidUrlFormat)
    }
}
