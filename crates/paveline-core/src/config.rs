use crate::error::{PavelineError, Result};
use crate::models::ServiceType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

/// Default base URL of the estimate backend
pub const DEFAULT_ESTIMATE_ENDPOINT: &str = "http://localhost:8001";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for the estimate pipeline
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    /// Unit the drawing widget reports areas in
    pub area_unit: ConfigValue<String>,
    /// Unit the drawing widget's coordinates are projected in
    pub length_unit: ConfigValue<String>,
    pub default_service_type: ConfigValue<ServiceType>,
    /// Base URL of the backend receiving estimate requests
    pub estimate_endpoint: ConfigValue<String>,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            area_unit: ConfigValue::new("square-meters".to_string(), ConfigSource::Default),
            length_unit: ConfigValue::new("meters".to_string(), ConfigSource::Default),
            default_service_type: ConfigValue::new(ServiceType::Residential, ConfigSource::Default),
            estimate_endpoint: ConfigValue::new(
                DEFAULT_ESTIMATE_ENDPOINT.to_string(),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| PavelineError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| PavelineError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(area_unit) = file_config.area_unit {
            self.area_unit.update(area_unit, ConfigSource::File);
        }

        if let Some(length_unit) = file_config.length_unit {
            self.length_unit.update(length_unit, ConfigSource::File);
        }

        if let Some(service_type) = file_config.default_service_type {
            self.default_service_type.update(service_type, ConfigSource::File);
        }

        if let Some(endpoint) = file_config.estimate_endpoint {
            self.estimate_endpoint.update(parse_endpoint(&endpoint)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // PAVELINE_AREA_UNIT
        if let Ok(unit) = env::var("PAVELINE_AREA_UNIT") {
            self.area_unit.update(unit, ConfigSource::Environment);
        }

        // PAVELINE_LENGTH_UNIT
        if let Ok(unit) = env::var("PAVELINE_LENGTH_UNIT") {
            self.length_unit.update(unit, ConfigSource::Environment);
        }

        // PAVELINE_DEFAULT_SERVICE_TYPE
        if let Ok(service_str) = env::var("PAVELINE_DEFAULT_SERVICE_TYPE") {
            match service_str.parse::<ServiceType>() {
                Ok(service) => self.default_service_type.update(service, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PAVELINE_DEFAULT_SERVICE_TYPE value '{}': expected residential, commercial, maintenance, custom, or emergency",
                    service_str
                ),
            }
        }

        // PAVELINE_ESTIMATE_ENDPOINT
        if let Ok(endpoint_str) = env::var("PAVELINE_ESTIMATE_ENDPOINT") {
            match parse_endpoint(&endpoint_str) {
                Ok(endpoint) => self.estimate_endpoint.update(endpoint, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid PAVELINE_ESTIMATE_ENDPOINT value '{}': expected an http(s) URL",
                    endpoint_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(area_unit) = overrides.area_unit {
            self.area_unit.update(area_unit, ConfigSource::Cli);
        }

        if let Some(length_unit) = overrides.length_unit {
            self.length_unit.update(length_unit, ConfigSource::Cli);
        }

        if let Some(service_type) = overrides.default_service_type {
            self.default_service_type.update(service_type, ConfigSource::Cli);
        }

        if let Some(endpoint) = overrides.estimate_endpoint {
            self.estimate_endpoint.update(endpoint, ConfigSource::Cli);
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("area_unit".to_string(), (self.area_unit.value.clone(), self.area_unit.source));

        map.insert(
            "length_unit".to_string(),
            (self.length_unit.value.clone(), self.length_unit.source),
        );

        map.insert(
            "default_service_type".to_string(),
            (self.default_service_type.value.to_string(), self.default_service_type.source),
        );

        map.insert(
            "estimate_endpoint".to_string(),
            (self.estimate_endpoint.value.clone(), self.estimate_endpoint.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    area_unit: Option<String>,
    length_unit: Option<String>,
    default_service_type: Option<ServiceType>,
    estimate_endpoint: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub area_unit: Option<String>,
    pub length_unit: Option<String>,
    pub default_service_type: Option<ServiceType>,
    pub estimate_endpoint: Option<String>,
}

/// Parse and normalize an estimate backend URL
pub fn parse_endpoint(s: &str) -> Result<String> {
    let trimmed = s.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(PavelineError::ConfigInvalid {
            key: "estimate_endpoint".to_string(),
            reason: format!("Invalid endpoint: {}. Use an http:// or https:// URL", s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.area_unit.value, "square-meters");
        assert_eq!(config.area_unit.source, ConfigSource::Default);
        assert_eq!(config.length_unit.value, "meters");
        assert_eq!(config.default_service_type.value, ServiceType::Residential);
        assert_eq!(config.estimate_endpoint.value, DEFAULT_ESTIMATE_ENDPOINT);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
area_unit = "sqft"
length_unit = "feet"
default_service_type = "commercial"
estimate_endpoint = "https://estimates.example.com/"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.area_unit.value, "sqft");
        assert_eq!(config.area_unit.source, ConfigSource::File);
        assert_eq!(config.length_unit.value, "feet");
        assert_eq!(config.default_service_type.value, ServiceType::Commercial);
        assert_eq!(config.estimate_endpoint.value, "https://estimates.example.com");
    }

    #[test]
    fn test_load_from_file_rejects_bad_endpoint() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"estimate_endpoint = "ftp://nope""#).unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(PavelineError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            area_unit: Some("acres".to_string()),
            default_service_type: Some(ServiceType::Emergency),
            ..Default::default()
        };

        config.update_from_cli(overrides);

        assert_eq!(config.area_unit.value, "acres");
        assert_eq!(config.area_unit.source, ConfigSource::Cli);
        assert_eq!(config.default_service_type.value, ServiceType::Emergency);
        // These should still be defaults
        assert_eq!(config.length_unit.source, ConfigSource::Default);
        assert_eq!(config.estimate_endpoint.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_endpoint() {
        assert_eq!(parse_endpoint("http://localhost:8001/").unwrap(), "http://localhost:8001");
        assert_eq!(parse_endpoint(" https://x.io ").unwrap(), "https://x.io");
        assert!(parse_endpoint("localhost:8001").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert_eq!(map.len(), 4);
        let (service, source) = &map["default_service_type"];
        assert_eq!(service, "residential");
        assert_eq!(*source, ConfigSource::Default);
    }
}
