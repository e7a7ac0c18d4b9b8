//! Common transport-layer types shared between the page server and the
//! browser frontend.
//!
//! The structs here mirror the external forecasting API's payloads so the
//! frontend can deserialize responses without duplicating shapes, and the
//! `ids` / `page` modules pin down the markup contract both sides rely on.

mod error;
mod forecast;
mod overview;
mod report;

pub mod ids;
pub mod metrics;
pub mod page;

pub use error::ParseError;
pub use forecast::{MetricKind, MetricPoint};
pub use overview::{BreakdownItem, DashboardOverview, KpiData, TrendPoint};
pub use page::Page;
pub use report::{ReportFormat, ReportRequest};

use serde::{Deserialize, Serialize};

/// Error body returned by the external API on a non-success status.
///
/// `detail` is usually a human readable string, but validation failures
/// carry a list of field errors instead, so it is kept as a raw value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: serde_json::Value,
}

impl ApiErrorBody {
    /// The `detail` message, if the API sent one as a string.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_str().filter(|s| !s.trim().is_empty())
    }
}
