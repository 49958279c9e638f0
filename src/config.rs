//! Engine configuration.
//!
//! Configuration is loaded once from a YAML file at process start and
//! passed into constructors explicitly; there is no module-level
//! singleton.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Directory holding the record store fixture files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/demo")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            data_dir: default_data_dir(),
        }
    }
}

/// Auth service settings used by the admin role tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the auth service admin API.
    pub base_url: String,
    /// Service credential presented as a bearer token.
    pub service_token: String,
}

/// Top-level engine configuration.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::EngineConfig;
///
/// let config = EngineConfig::load("./config/engine.yaml")?;
/// println!("binding {}", config.server.bind_addr);
/// # Ok::<(), payslip_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Auth service settings; absent when the deployment only serves
    /// documents.
    #[serde(default)]
    pub auth: Option<AuthConfig>,
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Fails with `ConfigNotFound` when the file is missing and
    /// `ConfigParse` when it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the auth settings, or fails when the config has none.
    pub fn require_auth(&self) -> PayrollResult<&AuthConfig> {
        self.auth.as_ref().ok_or_else(|| PayrollError::ConfigParse {
            path: "auth".to_string(),
            message: "configuration has no auth section".to_string(),
        })
    }
}
