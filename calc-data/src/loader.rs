use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use calc_core::tables::{ProviderTableError, SalaryRatesError, validate_brackets};
use calc_core::{ProviderTable, TaxBracket, TransferProvider};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading reference tables from CSV.
#[derive(Debug, Error)]
pub enum TableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid bracket schedule: {0}")]
    InvalidBrackets(#[from] SalaryRatesError),

    #[error("invalid provider table: {0}")]
    InvalidProviders(#[from] ProviderTableError),
}

impl From<csv::Error> for TableLoaderError {
    fn from(err: csv::Error) -> Self {
        TableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the tax brackets CSV file.
///
/// - `lower_bound`: Monthly income where the bracket starts
/// - `upper_bound`: Where it ends (empty for the unbounded top bracket)
/// - `rate`: The marginal tax rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl From<BracketRecord> for TaxBracket {
    fn from(record: BracketRecord) -> Self {
        TaxBracket::new(record.lower_bound, record.upper_bound, record.rate)
    }
}

/// A single record from the transfer providers CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProviderRecord {
    pub name: String,
    pub fee_rate: Decimal,
    pub minimum_fee: Decimal,
    pub markup_rate: Decimal,
    pub speed: String,
    pub rating: Decimal,
    #[serde(default)]
    pub referral_url: Option<String>,
}

impl From<ProviderRecord> for TransferProvider {
    fn from(record: ProviderRecord) -> Self {
        TransferProvider {
            name: record.name,
            fee_rate: record.fee_rate,
            minimum_fee: record.minimum_fee,
            markup_rate: record.markup_rate,
            speed: record.speed,
            rating: record.rating,
            referral_url: record.referral_url.unwrap_or_default(),
        }
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn read_records<R, T>(reader: R) -> Result<Vec<T>, TableLoaderError>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: T = result?;
        records.push(record);
    }

    Ok(records)
}

fn open(path: &Path) -> Result<File, TableLoaderError> {
    File::open(path).map_err(|source| TableLoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loader for the income tax bracket schedule.
///
/// CSV columns: `lower_bound,upper_bound,rate`. Rows must be in ascending
/// order; the schedule is validated before it is returned.
pub struct BracketLoader;

impl BracketLoader {
    /// Parse and validate a bracket schedule from any reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracket>, TableLoaderError> {
        let records: Vec<BracketRecord> = read_records(reader)?;
        let brackets: Vec<TaxBracket> = records.into_iter().map(TaxBracket::from).collect();

        validate_brackets(&brackets)?;
        debug!(brackets = brackets.len(), "tax bracket schedule loaded");

        Ok(brackets)
    }

    pub fn load_from_file(path: &Path) -> Result<Vec<TaxBracket>, TableLoaderError> {
        Self::parse(open(path)?)
    }
}

/// Loader for the transfer provider table.
///
/// CSV columns: `name,fee_rate,minimum_fee,markup_rate,speed,rating,referral_url`.
/// Row order becomes the table order used to break ties between providers.
pub struct ProviderLoader;

impl ProviderLoader {
    /// Parse providers from any reader and pair them with `mid_rate`.
    pub fn parse<R: Read>(
        reader: R,
        mid_rate: Decimal,
    ) -> Result<ProviderTable, TableLoaderError> {
        let records: Vec<ProviderRecord> = read_records(reader)?;
        let table = ProviderTable {
            mid_rate,
            providers: records.into_iter().map(TransferProvider::from).collect(),
        };

        table.validate()?;
        debug!(providers = table.providers.len(), "provider table loaded");

        Ok(table)
    }

    pub fn load_from_file(
        path: &Path,
        mid_rate: Decimal,
    ) -> Result<ProviderTable, TableLoaderError> {
        Self::parse(open(path)?, mid_rate)
    }
}
