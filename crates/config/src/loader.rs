//! Registry loading from configuration files

use crate::{ChainRegistry, ConfigError, RegistryFile, Result};
use std::path::Path;
use tracing::info;

/// Loader for chain tables in TOML, YAML or JSON
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a chain table from a file
    ///
    /// The format is picked from the file extension
    pub fn from_file(path: &Path) -> Result<RegistryFile> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ConfigError::LoadError("No file extension found".to_string()))?;

        let content = std::fs::read_to_string(path)?;

        match extension {
            "toml" => Self::from_toml(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            "json" => Self::from_json(&content),
            _ => Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {}",
                extension
            ))),
        }
    }

    pub fn from_toml(content: &str) -> Result<RegistryFile> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn from_yaml(content: &str) -> Result<RegistryFile> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    pub fn from_json(content: &str) -> Result<RegistryFile> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }

    /// Merge two chain tables; chains in the overlay replace those in the base
    pub fn merge(base: RegistryFile, overlay: RegistryFile) -> RegistryFile {
        let mut chains = base.chains;
        for chain in overlay.chains {
            match chains.iter_mut().find(|c| c.chain_id == chain.chain_id) {
                Some(existing) => *existing = chain,
                None => chains.push(chain),
            }
        }
        RegistryFile { chains }
    }
}

/// Load and validate a registry from a file
pub fn load_registry(path: &Path) -> Result<ChainRegistry> {
    let file = ConfigLoader::from_file(path)?;
    info!(path = %path.display(), chains = file.chains.len(), "loaded chain table");
    ChainRegistry::new(file.chains)
}
