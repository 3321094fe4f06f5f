use cadenza_core::CadenzaError;

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host (default: 127.0.0.1)
    pub server_host: String,

    /// Server port (default: 3000)
    pub server_port: u16,

    /// `pretty` or `json` (default: pretty)
    pub log_format: LogFormat,

    /// Environment: development, production, test
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables (with .env support).
    pub fn from_env() -> Result<Self, CadenzaError> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, CadenzaError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = match var("SERVER_PORT") {
            Some(port) => port
                .parse()
                .map_err(|_| CadenzaError::Config(format!("invalid SERVER_PORT: {port:?}")))?,
            None => 3000,
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(CadenzaError::Config(format!(
                    "invalid LOG_FORMAT: {other:?} (expected pretty or json)"
                )));
            }
        };

        Ok(Config {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            server_port,
            log_format,
            environment: var("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        })
    }

    /// Check if running in development mode.
    pub fn is_dev(&self) -> bool {
        self.environment == "development"
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
