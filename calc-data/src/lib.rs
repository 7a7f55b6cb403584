//! CSV loaders for the calculators' reference tables.

mod loader;

pub use loader::{BracketLoader, BracketRecord, ProviderLoader, ProviderRecord, TableLoaderError};
