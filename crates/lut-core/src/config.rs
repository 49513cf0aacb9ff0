//! Generator configuration (`lutgen.toml`).
//!
//! Every table has a historical input and output location under
//! `scripts/gen/h264/`. The config file can relocate the whole tree with
//! `root` or override individual paths:
//!
//! ```toml
//! root = "../codec"
//!
//! [tables.cabac-init]
//! input = "tables/cabac-init.txt"
//! output = "src/generated/cabac-init.inc"
//!
//! [tables.cavlc]
//! mode = "sizes"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use lut_model::{CavlcMode, TableKind};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "lutgen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory relative paths are resolved against.
    pub root: Option<PathBuf>,
    pub tables: TablesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct TablesConfig {
    #[serde(rename = "ctxidxinc")]
    pub ctx_idx_inc: TableConfig,
    pub cabac_init: TableConfig,
    pub range_tab_lps: TableConfig,
    pub cavlc: TableConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Answer to the CAVLC mode prompt; ignored by the other tables.
    pub mode: Option<CavlcMode>,
}

impl GeneratorConfig {
    pub fn from_toml(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(path, &contents)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] when present,
    /// else the built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn table(&self, kind: TableKind) -> &TableConfig {
        match kind {
            TableKind::CtxIdxInc => &self.tables.ctx_idx_inc,
            TableKind::CabacInit => &self.tables.cabac_init,
            TableKind::RangeTabLps => &self.tables.range_tab_lps,
            TableKind::Cavlc => &self.tables.cavlc,
        }
    }

    pub fn input_for(&self, kind: TableKind) -> PathBuf {
        let path = self
            .table(kind)
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(kind.default_input()));
        self.resolve(path)
    }

    pub fn output_for(&self, kind: TableKind) -> PathBuf {
        let path = self
            .table(kind)
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(kind.default_output()));
        self.resolve(path)
    }

    pub fn cavlc_mode(&self) -> Option<CavlcMode> {
        self.tables.cavlc.mode
    }

    fn resolve(&self, path: PathBuf) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path,
        }
    }
}
