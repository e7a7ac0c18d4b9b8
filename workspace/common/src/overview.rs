use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    pub today_date: NaiveDate,
    pub next_day_date: NaiveDate,
    pub total_consumption_pred: Option<f64>,
    pub total_generation_pred: Option<f64>,
    pub net_grid_import_pred: Option<f64>,
    pub next_day_forecast: Option<f64>,
}

/// A day of predicted consumption on the overview trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub reading_date: NaiveDate,
    pub total_consumption_pred: Option<f64>,
}

/// A named share of a breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub name: String,
    pub value: f64,
}

/// Response of `GET /dashboard/overview/`.
///
/// The list sections default to empty so a response that omits one still
/// renders the remaining sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardOverview {
    pub kpis: KpiData,
    #[serde(default)]
    pub forecast_trend: Vec<TrendPoint>,
    #[serde(default)]
    pub utilization_breakdown: Vec<BreakdownItem>,
    #[serde(default)]
    pub intake_breakdown: Vec<BreakdownItem>,
}
