//! Configuration for Quartet.
//!
//! Settings load from `~/.quartet/config.toml`; every value can be
//! overridden per run with a `QUARTET_*` environment variable, and string
//! values may reference the environment with `${VAR}` (useful for
//! credentialed catalog URLs).
//!
//! ```toml
//! [app]
//! ui = "tui"            # or "plain"
//! seed = 12345          # optional: reproduce a board
//!
//! [catalog]
//! url = "https://my-bucket.s3.amazonaws.com/puzzles/catalog.json"
//! path = "/var/lib/quartet/catalog.json"
//! ```

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

pub const ENV_CATALOG_URL: &str = "QUARTET_CATALOG_URL";
pub const ENV_CATALOG_PATH: &str = "QUARTET_CATALOG_PATH";
pub const ENV_UI: &str = "QUARTET_UI";
pub const ENV_SEED: &str = "QUARTET_SEED";

#[derive(Debug, Default, Deserialize)]
pub struct QuartetConfig {
    pub app: Option<AppConfig>,
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// UI variant: "tui" (default) or "plain".
    pub ui: Option<String>,
    /// Fixed seed for category selection and shuffling.
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// HTTPS object URL serving the catalog JSON.
    pub url: Option<String>,
    /// Local catalog file, used when no URL is configured.
    pub path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl QuartetConfig {
    /// Load the config file if one exists. A missing home directory or a
    /// missing file is not an error; the game runs fine on defaults.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Catalog URL after env override and `${VAR}` expansion.
    #[must_use]
    pub fn catalog_url(&self) -> Option<String> {
        env::var(ENV_CATALOG_URL)
            .ok()
            .or_else(|| self.catalog.as_ref().and_then(|c| c.url.clone()))
            .map(|raw| expand_env_vars(&raw))
            .filter(|value| !value.trim().is_empty())
    }

    /// Catalog file path after env override and `${VAR}` expansion.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        env::var(ENV_CATALOG_PATH)
            .ok()
            .or_else(|| self.catalog.as_ref().and_then(|c| c.path.clone()))
            .map(|raw| expand_env_vars(&raw))
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Requested UI variant, if any. Interpretation belongs to the binary.
    #[must_use]
    pub fn ui(&self) -> Option<String> {
        env::var(ENV_UI)
            .ok()
            .or_else(|| self.app.as_ref().and_then(|a| a.ui.clone()))
            .filter(|value| !value.trim().is_empty())
    }

    /// Fixed rng seed, if configured. A malformed env value is ignored with
    /// a warning rather than aborting the game.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        if let Ok(raw) = env::var(ENV_SEED) {
            match raw.trim().parse() {
                Ok(seed) => return Some(seed),
                Err(_) => {
                    tracing::warn!("Ignoring non-numeric {ENV_SEED}: {raw:?}");
                }
            }
        }
        self.app.as_ref().and_then(|a| a.seed)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".quartet").join("config.toml"))
}

/// Expand `${VAR}` references against the process environment. Unset
/// variables expand to the empty string; an unclosed brace is left as-is.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut i = 0;

    while i < value.len() {
        if value[i..].starts_with("${") {
            let start = i + 2;
            if let Some(end_rel) = value[start..].find('}') {
                let end = start + end_rel;
                let var = &value[start..end];
                if !var.is_empty() {
                    let replacement = env::var(var).unwrap_or_default();
                    out.push_str(&replacement);
                }
                i = end + 1;
                continue;
            }
        }

        let ch = value[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }

    out
}
