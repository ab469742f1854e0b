//! Catalog acquisition for Quartet.
//!
//! The game core never performs IO; this crate turns an external source
//! (a remote object URL, a local JSON file, or the embedded builtin set)
//! into a validated [`Catalog`]. All failure modes surface as a single
//! [`CatalogError`] to the caller of session initialization, before any
//! session exists.
//!
//! Wire format (the same JSON object the original hosted on its object
//! store): `{"categories": {"Fruits": ["Apple", ...], ...}}`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;
use url::Url;

use quartet_types::{Catalog, CatalogFormatError};

/// Embedded fallback catalog used when no source is configured.
const BUILTIN_CATALOG: &str = include_str!("../assets/builtin.json");

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw payload shape. Parsed into a name-ordered map, then validated into
/// the domain [`Catalog`].
#[derive(Debug, Deserialize)]
struct RawCatalog {
    categories: BTreeMap<String, Vec<String>>,
}

/// Failure to produce a catalog from a source.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("failed to fetch catalog from {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Format(#[from] CatalogFormatError),
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// An HTTPS object URL (e.g. a public bucket object).
    Remote(String),
    /// A local JSON file.
    File(PathBuf),
    /// The embedded builtin set.
    Builtin,
}

impl CatalogSource {
    /// Pick a source from resolved configuration: a URL wins over a path,
    /// the builtin set is the fallback.
    #[must_use]
    pub fn from_settings(url: Option<String>, path: Option<PathBuf>) -> Self {
        if let Some(url) = url {
            CatalogSource::Remote(url)
        } else if let Some(path) = path {
            CatalogSource::File(path)
        } else {
            CatalogSource::Builtin
        }
    }

    /// Load and validate the catalog this source points at.
    pub async fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self {
            CatalogSource::Remote(raw_url) => fetch_remote(raw_url).await?,
            CatalogSource::File(path) => load_file(path)?,
            CatalogSource::Builtin => parse_catalog(BUILTIN_CATALOG)?,
        };
        info!(categories = catalog.len(), source = ?self, "catalog loaded");
        Ok(catalog)
    }
}

fn parse_catalog(payload: &str) -> Result<Catalog, CatalogError> {
    let raw: RawCatalog = serde_json::from_str(payload)?;
    Ok(Catalog::from_entries(raw.categories)?)
}

fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let payload = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&payload)
}

async fn fetch_remote(raw_url: &str) -> Result<Catalog, CatalogError> {
    let parsed = Url::parse(raw_url).map_err(|source| CatalogError::InvalidUrl {
        url: raw_url.to_string(),
        source,
    })?;
    info!(url = %parsed, "fetching catalog");

    let fetch_err = |source| CatalogError::Fetch {
        url: raw_url.to_string(),
        source,
    };
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(fetch_err)?;
    let response = client
        .get(parsed)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(fetch_err)?;
    let body = response.text().await.map_err(fetch_err)?;
    parse_catalog(&body)
}
