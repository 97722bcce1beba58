pub mod toml_config;

use crate::core::client::DEFAULT_UPSTREAM_URL;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 2000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Command line and environment. Anything left unset falls back to the
/// `--config` file, then to the built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "people-in-space")]
#[command(about = "Serves the people currently in space, grouped by spacecraft")]
pub struct CliArgs {
    /// Listen port [default: 2000]
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Listen address [default: 0.0.0.0]
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// People-in-space endpoint [default: http://api.open-notify.org/astros.json]
    #[arg(long, env = "UPSTREAM_URL")]
    pub upstream_url: Option<String>,

    /// Upstream request timeout; the transport default applies when unset
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECONDS")]
    pub upstream_timeout_seconds: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Loads the `--config` file, if any, and resolves the effective settings.
    pub fn resolve(self) -> Result<ServiceConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };
        Ok(ServiceConfig::resolve(self, file))
    }
}

/// Effective settings the service runs with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub port: u16,
    pub host: String,
    pub upstream_url: String,
    pub upstream_timeout_seconds: Option<u64>,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout_seconds: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ServiceConfig {
    /// Command line and environment win over the file, the file wins over defaults.
    /// `--verbose` and `--json-logs` can only switch a setting on.
    pub fn resolve(args: CliArgs, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            port: args.port.or(file.server.port).unwrap_or(defaults.port),
            host: args.host.or(file.server.host).unwrap_or(defaults.host),
            upstream_url: args
                .upstream_url
                .or(file.upstream.endpoint)
                .unwrap_or(defaults.upstream_url),
            upstream_timeout_seconds: args
                .upstream_timeout_seconds
                .or(file.upstream.timeout_seconds),
            verbose: args.verbose || file.logging.verbose.unwrap_or(defaults.verbose),
            json_logs: args.json_logs || file.logging.json.unwrap_or(defaults.json_logs),
        }
    }
}

impl ConfigProvider for ServiceConfig {
    fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ServiceError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: format!("Not an IP address: {}", e),
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_url("upstream_url", &self.upstream_url)?;
        if let Some(timeout) = self.upstream_timeout_seconds {
            validate_range("upstream_timeout_seconds", timeout, 1, 300)?;
        }
        self.bind_address()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file(content: &str) -> TomlConfig {
        TomlConfig::from_toml_str(content).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::resolve(CliArgs::default(), None);

        assert_eq!(config.port, 2000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert!(config.upstream_timeout().is_none());
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let args = CliArgs::try_parse_from([
            "people-in-space",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
            "--upstream-timeout-seconds",
            "5",
            "--verbose",
        ])
        .unwrap();

        let config = args.resolve().unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(
            config.bind_address().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert!(config.verbose);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ServiceConfig::default();
        config.port = 0;
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::default();
        config.upstream_url = "ftp://api.open-notify.org/astros.json".to_string();
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::default();
        config.host = "not-an-ip".to_string();
        assert!(config.validate().is_err());

        let mut config = ServiceConfig::default();
        config.upstream_timeout_seconds = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_values_fill_unset_args() {
        let config = ServiceConfig::resolve(
            CliArgs::default(),
            Some(file(
                r#"
[server]
port = 4321

[upstream]
timeout_seconds = 3

[logging]
json = true
"#,
            )),
        );

        assert_eq!(config.port, 4321);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.upstream_timeout_seconds, Some(3));
        assert!(config.json_logs);
    }

    #[test]
    fn test_explicit_args_beat_file_values() {
        let args = CliArgs {
            port: Some(8080),
            upstream_url: Some("http://localhost:9000/astros.json".to_string()),
            ..CliArgs::default()
        };

        let config = ServiceConfig::resolve(
            args,
            Some(file(
                r#"
[server]
port = 4321
host = "127.0.0.1"

[upstream]
endpoint = "http://example.com/astros.json"
"#,
            )),
        );

        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url, "http://localhost:9000/astros.json");
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_port_flag_beats_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server]\nport = 4321\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliArgs::try_parse_from(["people-in-space", "--port", "8080", "--config", &path])
            .unwrap()
            .resolve()
            .unwrap();

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[upstream]\nendpoint = \"ftp://example.com\"\n")
            .unwrap();

        let args = CliArgs {
            config: Some(temp_file.path().to_path_buf()),
            ..CliArgs::default()
        };

        assert!(args.resolve().is_err());
    }
}
