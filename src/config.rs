//! Configuration file structures for the bilancia bot.
//!
//! The bot reads a YAML configuration file, with environment variable
//! overrides using the `BILANCIA_` prefix and `__` as section separator.
//!
//! # Configuration File Format
//!
//! ```yaml
//! discord:
//!   application_id: "1234567890"
//!   token: "bot-token"
//!
//! balancer:
//!   url: "http://127.0.0.1:8000"
//!   timeout: 5
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export BILANCIA_DISCORD__APPLICATION_ID="1234567890"
//! export BILANCIA_DISCORD__TOKEN="bot-token"
//! export BILANCIA_BALANCER__URL="http://127.0.0.1:8000"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

/// Root configuration structure for the bilancia bot.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Discord application configuration
    pub discord: Discord,
    /// Balancing service configuration
    pub balancer: Balancer,
}

/// Discord application configuration.
///
/// Both values are opaque credentials handed to the registrar and the
/// gateway client.
#[derive(Deserialize, Debug)]
pub struct Discord {
    /// Discord application identifier, as a decimal string.
    pub application_id: String,

    /// Static bot token.
    ///
    /// Used as bearer credential for command registration and for the
    /// gateway login.
    pub token: String,
}

/// Balancing service configuration.
#[derive(Deserialize, Debug)]
pub struct Balancer {
    /// Base URL of the balancing service.
    ///
    /// Should include the protocol and port but no trailing slash.
    ///
    /// # Examples
    ///
    /// - `http://127.0.0.1:8000`
    pub url: String,

    /// Request timeout in seconds for balancing calls.
    ///
    /// An invocation whose request exceeds this deadline is answered with the
    /// generic failure reply.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    5
}

impl Config {
    /// Loads the configuration from a YAML file, merged with `BILANCIA_`
    /// prefixed environment variables.
    ///
    /// Environment variables take precedence over file values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns a figment error if the file cannot be read or a required field
    /// is missing or has the wrong type.
    pub fn load(path: &str) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("BILANCIA_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    const CONFIG: &str = r#"
discord:
  application_id: "1234567890"
  token: "secret-token"

balancer:
  url: "http://127.0.0.1:8000"
  timeout: 10
"#;

    #[test]
    #[serial]
    fn test_load_config() {
        let file = write_config(CONFIG);

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.discord.application_id, "1234567890");
        assert_eq!(config.discord.token, "secret-token");
        assert_eq!(config.balancer.url, "http://127.0.0.1:8000");
        assert_eq!(config.balancer.timeout, 10);
    }

    #[test]
    #[serial]
    fn test_load_config_default_timeout() {
        let file = write_config(
            r#"
discord:
  application_id: "1234567890"
  token: "secret-token"

balancer:
  url: "http://127.0.0.1:8000"
"#,
        );

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.balancer.timeout, 5);
    }

    #[test]
    #[serial]
    fn test_load_config_env_override() {
        let file = write_config(CONFIG);

        unsafe { std::env::set_var("BILANCIA_DISCORD__TOKEN", "token-from-env") };
        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        unsafe { std::env::remove_var("BILANCIA_DISCORD__TOKEN") };

        assert_eq!(config.discord.token, "token-from-env");
        assert_eq!(config.discord.application_id, "1234567890");
    }

    #[test]
    #[serial]
    fn test_load_config_missing_field() {
        let file = write_config(
            r#"
discord:
  application_id: "1234567890"
"#,
        );

        let result = Config::load(file.path().to_str().unwrap());
        assert!(result.is_err());
    }
}
