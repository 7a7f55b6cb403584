//! Reference table loading for the command line.
//!
//! Tables start from the built-in 2025 defaults. A TOML settings file may
//! replace whole sections, and CSV files may then replace the bracket
//! schedule or the provider list. The result is validated before use.

use std::fs;
use std::path::{Path, PathBuf};

use calc_core::{ReferenceTables, ReferenceTablesError};
use calc_data::{BracketLoader, ProviderLoader, TableLoaderError};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Table(#[from] TableLoaderError),

    #[error(transparent)]
    Invalid(#[from] ReferenceTablesError),
}

/// Where each table comes from. `None` keeps the built-in value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableSources<'a> {
    pub config: Option<&'a Path>,
    pub brackets: Option<&'a Path>,
    pub providers: Option<&'a Path>,
}

/// Parses a TOML settings document. Missing sections keep their defaults.
pub fn parse_tables(text: &str) -> Result<ReferenceTables, toml::de::Error> {
    toml::from_str(text)
}

/// Renders `tables` as a TOML settings document accepted by [`parse_tables`].
pub fn tables_to_toml(tables: &ReferenceTables) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(tables)
}

/// Builds and validates the reference tables from `sources`.
pub fn load_tables(sources: &TableSources<'_>) -> Result<ReferenceTables, SettingsError> {
    let mut tables = match sources.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let tables = parse_tables(&text).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            info!("loaded settings from {}", path.display());
            tables
        }
        None => ReferenceTables::default(),
    };

    if let Some(path) = sources.brackets {
        tables.salary.brackets = BracketLoader::load_from_file(path)?;
        info!("loaded tax brackets from {}", path.display());
    }

    if let Some(path) = sources.providers {
        tables.transfer = ProviderLoader::load_from_file(path, tables.transfer.mid_rate)?;
        info!("loaded transfer providers from {}", path.display());
    }

    tables.validate()?;
    debug!(
        brackets = tables.salary.brackets.len(),
        providers = tables.transfer.providers.len(),
        "reference tables ready"
    );

    Ok(tables)
}
