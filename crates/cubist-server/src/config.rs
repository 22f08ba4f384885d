//! Configuration loading and typed config structures for the Cubist server.
//!
//! The canonical configuration lives in `cubist-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every field has a default, so a missing file or a partial file both
//! produce a runnable configuration.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `cubist-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CubistConfig {
    /// Bind address settings.
    pub server: ServerSection,

    /// Scan workflow settings (detector choice, session lifecycle).
    pub scan: ScanSection,

    /// Solver backend settings.
    pub solver: SolverSection,
}

impl CubistConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `CUBIST_SOLVER_URL` overrides `solver.url`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CUBIST_SOLVER_URL") {
            self.solver.url = url;
        }
    }
}

/// Bind address settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// The host address to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
        }
    }
}

/// Scan workflow settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanSection {
    /// Which stand-in color detector serves image-based scans.
    pub detector: DetectorKind,
    /// Idle seconds after which a session is evicted by the sweep.
    pub session_ttl_seconds: u64,
    /// Seconds between sweep runs.
    pub sweep_interval_seconds: u64,
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            detector: DetectorKind::Fixed,
            session_ttl_seconds: 900,
            sweep_interval_seconds: 60,
        }
    }
}

/// Available stand-in color detectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// The fixed-pattern detector.
    #[default]
    Fixed,
    /// The randomized detector.
    Random,
}

/// Solver backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SolverSection {
    /// Which backend answers solve requests.
    pub backend: BackendKind,
    /// Base URL of the external solver service (remote backend only).
    pub url: String,
    /// Deadline for one solve call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            backend: BackendKind::Remote,
            url: String::from("http://localhost:8081"),
            timeout_ms: 5000,
        }
    }
}

/// Available solver backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// External solver service over HTTP.
    #[default]
    Remote,
    /// In-memory scripted table (no external service needed).
    Scripted,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = CubistConfig::parse("{}").unwrap();
        assert_eq!(config, CubistConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.solver.timeout_ms, 5000);
        assert_eq!(config.scan.detector, DetectorKind::Fixed);
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let yaml = r"
server:
  port: 9000
solver:
  backend: scripted
";
        let config = CubistConfig::parse(yaml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.solver.backend, BackendKind::Scripted);
        assert_eq!(config.scan.session_ttl_seconds, 900);
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r"
server:
  host: 127.0.0.1
  port: 8000
scan:
  detector: random
  session_ttl_seconds: 120
  sweep_interval_seconds: 10
solver:
  backend: remote
  url: http://solver.internal:9001
  timeout_ms: 2500
";
        let config = CubistConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.scan.detector, DetectorKind::Random);
        assert_eq!(config.scan.session_ttl_seconds, 120);
        assert_eq!(config.solver.url, "http://solver.internal:9001");
        assert_eq!(config.solver.timeout_ms, 2500);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(CubistConfig::parse("server: [not, a, map]").is_err());
    }
}
