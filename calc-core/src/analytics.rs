//! Optional analytics for outbound affiliate links.
//!
//! The sink is injected by the caller. Passing `None` (or a [`NoopSink`])
//! turns tracking off without any error.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Event name emitted when an affiliate link is activated.
pub const AFFILIATE_CLICK: &str = "affiliate_click";

const UNKNOWN_CATEGORY: &str = "unknown";
const BEACON_TRANSPORT: &str = "beacon";

/// A single analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub category: String,
    pub label: String,
    pub transport: String,
}

/// Destination for analytics events.
pub trait AnalyticsSink {
    fn emit(
        &self,
        event: &AnalyticsEvent,
    );
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn emit(
        &self,
        _event: &AnalyticsEvent,
    ) {
    }
}

/// Writes events to the `tracing` log at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn emit(
        &self,
        event: &AnalyticsEvent,
    ) {
        info!(
            event = %event.name,
            category = %event.category,
            label = %event.label,
            transport = %event.transport,
            "analytics event"
        );
    }
}

/// Keeps every event in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl AnalyticsSink for RecordingSink {
    fn emit(
        &self,
        event: &AnalyticsEvent,
    ) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Records activation of an affiliate link for `provider`.
///
/// `category` defaults to `"unknown"` when missing or blank. Returns the
/// event that was built, whether or not a sink received it.
///
/// # Examples
///
/// ```
/// use calc_core::analytics::{RecordingSink, track_affiliate_click};
///
/// let sink = RecordingSink::new();
/// track_affiliate_click(Some(&sink), "Wise", Some("transfer"));
/// track_affiliate_click(None, "Wise", None);
///
/// assert_eq!(sink.events().len(), 1);
/// assert_eq!(sink.events()[0].label, "Wise");
/// ```
pub fn track_affiliate_click(
    sink: Option<&dyn AnalyticsSink>,
    provider: &str,
    category: Option<&str>,
) -> AnalyticsEvent {
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(UNKNOWN_CATEGORY);

    let event = AnalyticsEvent {
        name: AFFILIATE_CLICK.to_string(),
        category: category.to_string(),
        label: provider.to_string(),
        transport: BEACON_TRANSPORT.to_string(),
    };

    if let Some(sink) = sink {
        sink.emit(&event);
    }

    event
}
