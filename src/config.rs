//! Export settings, loaded from an optional `export.toml`.

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// How far a merged path may stray from the drawn curve (osu! pixels).
    #[serde(default = "default_simplify_tolerance")]
    pub simplify_tolerance: f32,
    /// Worker threads used by set exports. Defaults to available parallelism.
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

fn default_simplify_tolerance() -> f32 {
    0.5
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            simplify_tolerance: default_simplify_tolerance(),
            worker_threads: None,
        }
    }
}

impl ExportConfig {
    /// Loads the config from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        if !path.exists() {
            log::info!("CONFIG: {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConvertResult<Self> {
        let config: ExportConfig = toml::from_str(content)
            .map_err(|e| ConvertError::Config(format!("failed to parse export config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConvertResult<()> {
        if !(self.simplify_tolerance.is_finite() && self.simplify_tolerance > 0.0) {
            return Err(ConvertError::Config(format!(
                "simplify_tolerance must be a positive number, got {}",
                self.simplify_tolerance
            )));
        }

        if self.worker_threads == Some(0) {
            return Err(ConvertError::Config("worker_threads must be at least 1".into()));
        }

        Ok(())
    }

    /// Number of export workers to spawn.
    pub fn worker_count(&self) -> usize {
        self.worker_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}
