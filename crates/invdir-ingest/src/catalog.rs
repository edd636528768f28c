//! Source catalog loading.

use std::path::{Path, PathBuf};

use invdir_model::{SourceCatalog, SourceSpec};

use crate::error::{IngestError, Result};

/// Loads and validates a TOML source catalog.
///
/// ```toml
/// [[sources]]
/// id = "indian_vc"
/// file = "Indian VC Access File.csv"
///
/// [geography]
/// indian_vc = "India"
/// ```
pub fn load_catalog(path: &Path) -> Result<SourceCatalog> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    parse_catalog(path, &text)
}

/// Parses catalog text; `path` is only used for error context.
pub fn parse_catalog(path: &Path, text: &str) -> Result<SourceCatalog> {
    let catalog: SourceCatalog = toml::from_str(text).map_err(|source| IngestError::CatalogParse {
        path: path.to_path_buf(),
        source,
    })?;
    catalog
        .validate()
        .map_err(|source| IngestError::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(catalog)
}

/// Resolves a source's backing file against the resources directory.
pub fn resolve_source_path(resources: &Path, spec: &SourceSpec) -> PathBuf {
    if spec.file.is_absolute() {
        spec.file.clone()
    } else {
        resources.join(&spec.file)
    }
}
