use bookmarker_core::AppError;

/// Listener configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read configuration from environment variables.
    ///
    /// - `BOOKMARKER_HOST` (optional, defaults to 0.0.0.0)
    /// - `BOOKMARKER_PORT` (optional, defaults to 8000)
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("BOOKMARKER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("BOOKMARKER_PORT") {
            Err(_) => 8000,
            Ok(raw) => raw.parse().map_err(|_| {
                AppError::ConfigError(format!(
                    "Invalid BOOKMARKER_PORT '{raw}': must be a port number"
                ))
            })?,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
