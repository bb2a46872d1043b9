use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::path::expand_path;

use super::cli::CliConfig;
use super::constants::{APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_HOST, DEFAULT_PORT};

// =============================================================================
// Storage Backend Enum
// =============================================================================

/// Where the string collection lives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Pretty-printed JSON file in the data directory
    #[default]
    Json,
    /// Process memory only, lost on exit
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Json => write!(f, "json"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// Server configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ServerFileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Storage configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StorageFileConfig {
    pub backend: Option<StorageBackend>,
    /// Data directory for the json backend
    pub path: Option<String>,
}

/// File-based configuration (JSON)
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub server: Option<ServerFileConfig>,
    pub storage: Option<StorageFileConfig>,
    pub debug: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str = map.keys().map(|k| k.as_str()).collect::<Vec<_>>().join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if let Some(server) = other.server {
            let current = self.server.get_or_insert_with(ServerFileConfig::default);
            if server.host.is_some() {
                tracing::trace!(host = ?server.host, "Merging server.host");
                current.host = server.host;
            }
            if server.port.is_some() {
                tracing::trace!(port = ?server.port, "Merging server.port");
                current.port = server.port;
            }
        }

        if let Some(storage) = other.storage {
            let current = self.storage.get_or_insert_with(StorageFileConfig::default);
            if storage.backend.is_some() {
                tracing::trace!(backend = ?storage.backend, "Merging storage.backend");
                current.backend = storage.backend;
            }
            if storage.path.is_some() {
                tracing::trace!(path = ?storage.path, "Merging storage.path");
                current.path = storage.path;
            }
        }

        if other.debug.is_some() {
            self.debug = other.debug;
        }
    }
}

// =============================================================================
// Resolved Config Structs
// =============================================================================

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Storage configuration
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Explicit data directory; platform default when `None`
    pub path: Option<PathBuf>,
}

/// Final merged application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub debug: bool,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.string-analyzer/string-analyzer.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        if let Some(profile_path) = get_profile_config_path()
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        let config = Self::resolve(cli, file_config);
        config.validate()?;

        tracing::debug!(
            host = %config.server.host,
            port = config.server.port,
            storage = %config.storage.backend,
            debug = config.debug,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Layer CLI/env values over the merged file config, then defaults
    fn resolve(cli: &CliConfig, file_config: FileConfig) -> Self {
        let file_server = file_config.server.unwrap_or_default();
        let file_storage = file_config.storage.unwrap_or_default();

        let host = cli
            .host
            .clone()
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = cli.port.or(file_server.port).unwrap_or(DEFAULT_PORT);

        let backend = cli.storage.or(file_storage.backend).unwrap_or_default();
        let path = cli
            .data_dir
            .as_ref()
            .map(|p| expand_path(&p.to_string_lossy()))
            .or_else(|| file_storage.path.as_deref().map(expand_path));

        // --debug can only turn debug on; the file may set it either way
        let debug = cli.debug || file_config.debug.unwrap_or(false);

        Self {
            server: ServerConfig { host, port },
            storage: StorageConfig { backend, path },
            debug,
        }
    }

    /// Validate the configuration for consistency and correctness
    fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            anyhow::bail!("Configuration error: server.host must not be empty");
        }
        if self.server.port == 0 {
            anyhow::bail!("Configuration error: server.port must be greater than 0");
        }
        if self.storage.backend == StorageBackend::Memory && self.storage.path.is_some() {
            tracing::warn!("storage.path is ignored by the memory backend");
        }
        if is_all_interfaces(&self.server.host) {
            tracing::warn!(
                host = %self.server.host,
                "Binding to all network interfaces. Stored strings are readable and deletable by anyone on your network."
            );
        }
        Ok(())
    }
}

/// Get the profile config path (~/.string-analyzer/string-analyzer.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}

/// Check if host binds to all network interfaces
pub(crate) fn is_all_interfaces(host: &str) -> bool {
    matches!(host, "0.0.0.0" | "::" | "[::]")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn test_storage_backend_serde() {
        let backend: StorageBackend = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(backend, StorageBackend::Json);
        let backend: StorageBackend = serde_json::from_str(r#""memory""#).unwrap();
        assert_eq!(backend, StorageBackend::Memory);
        assert!(serde_json::from_str::<StorageBackend>(r#""sqlite""#).is_err());
    }

    #[test]
    fn test_storage_backend_display() {
        assert_eq!(StorageBackend::Json.to_string(), "json");
        assert_eq!(StorageBackend::Memory.to_string(), "memory");
    }

    #[test]
    fn test_file_config_parse_full() {
        let json = r#"{
            "server": { "host": "0.0.0.0", "port": 9090 },
            "storage": { "backend": "memory", "path": "/tmp/strings" },
            "debug": true
        }"#;
        let config: FileConfig = serde_json::from_str(json).unwrap();

        let server = config.server.as_ref().unwrap();
        assert_eq!(server.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(server.port, Some(9090));
        let storage = config.storage.as_ref().unwrap();
        assert_eq!(storage.backend, Some(StorageBackend::Memory));
        assert_eq!(storage.path.as_deref(), Some("/tmp/strings"));
        assert_eq!(config.debug, Some(true));
    }

    #[test]
    fn test_file_config_parse_empty() {
        let config: FileConfig = serde_json::from_str("{}").unwrap();
        assert!(config.server.is_none());
        assert!(config.storage.is_none());
        assert!(config.debug.is_none());
    }

    #[test]
    fn test_file_config_parse_extra_fields() {
        let json = r#"{ "server": { "host": "localhost" }, "unknown_field": 123 }"#;
        let config: FileConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.server.as_ref().unwrap().host.as_deref(),
            Some("localhost")
        );
        assert_eq!(config.extra.get("unknown_field").unwrap(), 123);
    }

    #[test]
    fn test_file_config_merge() {
        let mut base = FileConfig {
            server: Some(ServerFileConfig {
                host: Some("base.host".to_string()),
                port: Some(1000),
            }),
            storage: Some(StorageFileConfig {
                backend: Some(StorageBackend::Json),
                path: Some("/base".to_string()),
            }),
            debug: Some(false),
            ..Default::default()
        };
        let overlay = FileConfig {
            server: Some(ServerFileConfig {
                host: None,
                port: Some(2000),
            }),
            storage: Some(StorageFileConfig {
                backend: Some(StorageBackend::Memory),
                path: None,
            }),
            ..Default::default()
        };

        base.merge(overlay);

        let server = base.server.unwrap();
        assert_eq!(server.host.as_deref(), Some("base.host"));
        assert_eq!(server.port, Some(2000));
        let storage = base.storage.unwrap();
        assert_eq!(storage.backend, Some(StorageBackend::Memory));
        assert_eq!(storage.path.as_deref(), Some("/base"));
        assert_eq!(base.debug, Some(false));
    }

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(&CliConfig::default(), FileConfig::default());
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert!(config.storage.path.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn test_resolve_cli_over_file() {
        let file: FileConfig = serde_json::from_str(
            r#"{
                "server": { "host": "file.host", "port": 7000 },
                "storage": { "backend": "json" },
                "debug": false
            }"#,
        )
        .unwrap();
        let cli = CliConfig {
            port: Some(3000),
            storage: Some(StorageBackend::Memory),
            debug: true,
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, file);
        assert_eq!(config.server.host, "file.host");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.debug);
    }

    #[test]
    fn test_resolve_file_debug_without_cli_flag() {
        let file: FileConfig = serde_json::from_str(r#"{ "debug": true }"#).unwrap();
        let config = AppConfig::resolve(&CliConfig::default(), file);
        assert!(config.debug);
    }

    #[test]
    fn test_resolve_data_dir_from_cli() {
        let file: FileConfig =
            serde_json::from_str(r#"{ "storage": { "path": "/from/file" } }"#).unwrap();
        let cli = CliConfig {
            data_dir: Some(PathBuf::from("/from/cli")),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, file);
        assert_eq!(config.storage.path, Some(PathBuf::from("/from/cli")));
    }

    #[test]
    fn test_load_explicit_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "server": {{ "port": 6123 }}, "storage": {{ "backend": "memory" }} }}"#
        )
        .unwrap();

        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            host: Some("127.0.0.1".to_string()),
            ..Default::default()
        };
        let config = AppConfig::load(&cli).unwrap();
        assert_eq!(config.server.port, 6123);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_load_missing_config_file() {
        let cli = CliConfig {
            config: Some(PathBuf::from("/definitely/not/here/string-analyzer.json")),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_invalid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let cli = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let err = AppConfig::load(&cli).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validation_port_zero() {
        let cli = CliConfig {
            port: Some(0),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, FileConfig::default());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server.port must be greater than 0"));
    }

    #[test]
    fn test_validation_empty_host() {
        let cli = CliConfig {
            host: Some("  ".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, FileConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_all_interfaces() {
        assert!(is_all_interfaces("0.0.0.0"));
        assert!(is_all_interfaces("::"));
        assert!(is_all_interfaces("[::]"));
        assert!(!is_all_interfaces("127.0.0.1"));
        assert!(!is_all_interfaces("localhost"));
    }
}
