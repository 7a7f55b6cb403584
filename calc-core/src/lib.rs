pub mod analytics;
pub mod calculations;
pub mod format;
pub mod input;
pub mod models;
pub mod tables;

pub use analytics::{AnalyticsEvent, AnalyticsSink, NoopSink, RecordingSink, TracingSink};
pub use format::{Currency, format_currency};
pub use models::*;
pub use tables::{
    ProviderTable, ReferenceTables, ReferenceTablesError, SalaryRates, TierPriceTable,
    TransferProvider,
};
