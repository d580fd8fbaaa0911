// src/shared/config.rs
use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENV: &str = "development";
const DEFAULT_WIZARD_SESSION_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),

    #[error("Invalid WIZARD_SESSION_CAPACITY value '{0}'")]
    InvalidSessionCapacity(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_env: String,
    /// Upper bound on in-progress wizards kept in memory.
    pub wizard_session_capacity: usize,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) into the process
    /// environment. Missing files are not an error.
    pub fn load_dotenv() -> String {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }
        env_file
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let rust_env = lookup("RUST_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string());
        let wizard_session_capacity = match lookup("WIZARD_SESSION_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => return Err(ConfigError::InvalidSessionCapacity(raw)),
            },
            None => DEFAULT_WIZARD_SESSION_CAPACITY,
        };

        Ok(Self {
            host,
            port,
            rust_env,
            wizard_session_capacity,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_env, "development");
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.wizard_session_capacity, 256);
    }

    #[test]
    fn reads_values_from_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("RUST_ENV", "production"),
            ("WIZARD_SESSION_CAPACITY", "32"),
        ]))
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.rust_env, "production");
        assert_eq!(config.wizard_session_capacity, 32);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")]));

        assert_eq!(result, Err(ConfigError::InvalidPort("eighty".to_string())));
    }

    #[test]
    fn zero_or_garbage_session_capacity_is_rejected() {
        for raw in ["0", "-3", "many"] {
            let result =
                AppConfig::from_lookup(lookup_from(&[("WIZARD_SESSION_CAPACITY", raw)]));

            assert_eq!(
                result,
                Err(ConfigError::InvalidSessionCapacity(raw.to_string()))
            );
        }
    }
}
