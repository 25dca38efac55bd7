//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// JWT authentication settings
    pub jwt: JwtSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Redirect targets used by the sidebar guards
    pub navigation: NavigationSettings,

    /// Log output configuration
    pub telemetry: TelemetrySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply embedded migrations on startup
    pub run_migrations: bool,
}

/// JWT authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key used to verify tokens
    pub secret: String,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Redirect targets.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationSettings {
    /// Where unauthenticated requests are sent
    pub sign_in_path: String,

    /// Where requests for unknown servers are sent
    pub home_path: String,
}

/// Log output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    /// Emit JSON lines instead of human-readable logs
    pub json_logs: bool,
}

/// Minimum required length for JWT secret (256 bits = 32 bytes)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if JWT secret is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            .set_default("navigation.sign_in_path", "/sign-in")?
            .set_default("navigation.home_path", "/")?
            .set_default("telemetry.json_logs", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validate)
    }

    /// Reject settings that would make the service insecure.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::Message(format!(
                "JWT secret must be at least {} characters for security. Current length: {}",
                MIN_JWT_SECRET_LENGTH,
                self.jwt.secret.len()
            )));
        }
        if !self.navigation.sign_in_path.starts_with('/')
            || !self.navigation.home_path.starts_with('/')
        {
            return Err(ConfigError::Message(
                "Navigation paths must be absolute (start with '/')".into(),
            ));
        }
        Ok(self)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(secret: &str, sign_in: &str) -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".into(),
                port: 3000,
            },
            database: DatabaseSettings {
                url: "postgres://localhost/chat_sidebar".into(),
                max_connections: 5,
                min_connections: 1,
                acquire_timeout: 5,
                run_migrations: false,
            },
            jwt: JwtSettings {
                secret: secret.into(),
            },
            cors: CorsSettings {
                allowed_origins: vec![],
            },
            navigation: NavigationSettings {
                sign_in_path: sign_in.into(),
                home_path: "/".into(),
            },
            telemetry: TelemetrySettings { json_logs: false },
            environment: "test".into(),
        }
    }

    #[test]
    fn test_short_jwt_secret_rejected() {
        assert!(settings("short", "/sign-in").validate().is_err());
    }

    #[test]
    fn test_relative_navigation_path_rejected() {
        let secret = "x".repeat(MIN_JWT_SECRET_LENGTH);
        assert!(settings(&secret, "sign-in").validate().is_err());
    }

    #[test]
    fn test_valid_settings_pass() {
        let secret = "x".repeat(MIN_JWT_SECRET_LENGTH);
        let settings = settings(&secret, "/sign-in").validate().unwrap();
        assert_eq!(settings.server_addr(), "127.0.0.1:3000");
    }
}
