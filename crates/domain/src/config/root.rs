use super::errors::ConfigError;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::records::{normalize_name, RecordEntry, ZoneEntry};
use super::server::ServerConfig;
use serde::{Deserialize, Serialize};
use std::fs;

/// Top-level configuration. Loaded once at startup; the record and zone
/// tables it carries are read-only for the lifetime of the process.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub http: HttpConfig,

    /// Origins for which unanswerable queries defer to the next handler.
    /// Absent: never fall through. Present but empty: always.
    #[serde(default)]
    pub fallthrough: Option<Vec<String>>,

    #[serde(default)]
    pub records: Vec<RecordEntry>,

    #[serde(default)]
    pub zones: Vec<ZoneEntry>,
}

/// Command line flags that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub dns_port: Option<u16>,
}

impl Config {
    /// Load, validate and normalize configuration. With no path, the
    /// defaults apply (an empty record table that answers nothing).
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => Config::default(),
        };

        if let Some(bind_address) = overrides.bind_address {
            config.server.bind_address = bind_address;
        }
        if let Some(dns_port) = overrides.dns_port {
            config.server.dns_port = dns_port;
        }

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Lowercase every configured name and make it fully qualified, so
    /// lookups against wire-format query names compare exactly.
    fn normalize(&mut self) {
        for record in &mut self.records {
            record.name = normalize_name(&record.name);
        }
        for zone in &mut self.zones {
            zone.origin = normalize_name(&zone.origin);
        }
        if let Some(zones) = &mut self.fallthrough {
            for origin in zones.iter_mut() {
                *origin = normalize_name(origin);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for record in &self.records {
            if record.name == "." {
                return Err(ConfigError::EmptyRecordName);
            }
            validate_endpoint(&record.endpoint)?;
        }
        for zone in &self.zones {
            if zone.origin.is_empty() {
                return Err(ConfigError::EmptyZoneOrigin);
            }
            validate_endpoint(&zone.endpoint)?;
        }
        if self.http.cache_capacity == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEndpoint(endpoint.to_string()))
    }
}
