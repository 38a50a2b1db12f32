use std::time::Duration;

use bookmarker_core::AppError;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_ELEMENTS: usize = 9000;
pub const DEFAULT_USER_AGENT: &str = "Bookmarker/0.1 (+readable article fetcher)";

/// Configuration for the fetch/extract/sanitize pipeline.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub fetch_timeout: Duration,
    pub user_agent: String,
    /// Refuse URLs whose host resolves to a private/reserved address.
    pub block_private_urls: bool,
    /// Remove `<script>`/`<style>` content instead of keeping it as text.
    pub drop_script_content: bool,
    /// Element budget for the readability pass; larger documents skip straight to the body walk.
    pub max_elements_to_parse: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            block_private_urls: false,
            drop_script_content: false,
            max_elements_to_parse: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl ClientConfig {
    /// Read configuration from environment variables.
    ///
    /// - `BOOKMARKER_FETCH_TIMEOUT_SECS` (optional, defaults to 10)
    /// - `BOOKMARKER_USER_AGENT` (optional)
    /// - `BOOKMARKER_BLOCK_PRIVATE_URLS` (optional, defaults to false)
    /// - `BOOKMARKER_DROP_SCRIPT_CONTENT` (optional, defaults to false)
    /// - `BOOKMARKER_MAX_ELEMENTS` (optional, defaults to 9000, 0 for no limit)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let fetch_timeout = match lookup("BOOKMARKER_FETCH_TIMEOUT_SECS") {
            None => defaults.fetch_timeout,
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    AppError::ConfigError(format!(
                        "Invalid BOOKMARKER_FETCH_TIMEOUT_SECS '{raw}': must be a positive integer"
                    ))
                })?;
                if secs == 0 {
                    return Err(AppError::ConfigError(
                        "BOOKMARKER_FETCH_TIMEOUT_SECS must be at least 1".into(),
                    ));
                }
                Duration::from_secs(secs)
            }
        };

        let user_agent = lookup("BOOKMARKER_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        let max_elements_to_parse = match lookup("BOOKMARKER_MAX_ELEMENTS") {
            None => defaults.max_elements_to_parse,
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid BOOKMARKER_MAX_ELEMENTS '{raw}': must be a non-negative integer"
                ))
            })?,
        };

        Ok(Self {
            fetch_timeout,
            user_agent,
            block_private_urls: parse_flag(&lookup, "BOOKMARKER_BLOCK_PRIVATE_URLS")?,
            drop_script_content: parse_flag(&lookup, "BOOKMARKER_DROP_SCRIPT_CONTENT")?,
            max_elements_to_parse,
        })
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<bool, AppError> {
    match lookup(key) {
        None => Ok(false),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(AppError::ConfigError(format!(
                "Invalid {key} '{raw}': expected true or false"
            ))),
        },
    }
}
