//! Text and chart content of the overview page.

use common::ids;
use common::{DashboardOverview, KpiData, TrendPoint};

use crate::charts::{doughnut_chart, intake_bar_chart, trend_chart, ChartSpec};
use crate::error::DashboardError;

/// Formatted text of every KPI card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiText {
    pub today_date: String,
    pub next_day_date: String,
    pub total_consumption: String,
    pub total_generation: String,
    pub net_grid_import: String,
    pub next_day_forecast: String,
}

impl KpiText {
    /// `(element id, text)` for each card.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            (ids::KPI_TODAY_DATE, self.today_date.as_str()),
            (ids::KPI_NEXT_DAY_DATE, self.next_day_date.as_str()),
            (ids::KPI_TOTAL_CONSUMPTION, self.total_consumption.as_str()),
            (ids::KPI_TOTAL_GENERATION, self.total_generation.as_str()),
            (ids::KPI_NET_GRID_IMPORT, self.net_grid_import.as_str()),
            (ids::KPI_NEXT_DAY_FORECAST, self.next_day_forecast.as_str()),
        ]
    }
}

pub fn kpi_text(kpis: &KpiData) -> KpiText {
    KpiText {
        today_date: kpis.today_date.format("%B %-d, %Y").to_string(),
        next_day_date: kpis.next_day_date.format("%B %-d").to_string(),
        total_consumption: format_kwh(kpis.total_consumption_pred),
        total_generation: format_kwh(kpis.total_generation_pred),
        net_grid_import: format_kwh(kpis.net_grid_import_pred),
        next_day_forecast: format_kwh(kpis.next_day_forecast),
    }
}

/// Whole kilowatt-hours, rounding halves up; `--` when there is no value.
pub fn format_kwh(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{} kWh", (v + 0.5).floor() as i64),
        None => "--".to_string(),
    }
}

/// Subtitle of the trend chart, e.g. `(Jun 24 - Jun 30)`.
pub fn trend_range_label(points: &[TrendPoint]) -> Option<String> {
    let first = points.first()?;
    let last = points.last()?;
    Some(format!(
        "({} - {})",
        first.reading_date.format("%b %-d"),
        last.reading_date.format("%b %-d")
    ))
}

/// Shown under the load error; a missing prediction for today is the usual cause.
pub const LOAD_ERROR_HINT: &str =
    "This might be because there is no prediction available for today's date in the database.";

/// Replaces the page content when the overview cannot be loaded.
pub fn load_error_message(error: &DashboardError) -> String {
    format!("Could not load dashboard data: {}", error)
}

/// Chart for each overview canvas. Empty sections yield `None` and are
/// not drawn.
pub fn overview_charts(overview: &DashboardOverview) -> [(&'static str, Option<ChartSpec>); 3] {
    [
        (ids::MAIN_CHART, trend_chart(&overview.forecast_trend)),
        (ids::UTILIZATION_CHART, doughnut_chart(&overview.utilization_breakdown)),
        (ids::INTAKE_CHART, intake_bar_chart(&overview.intake_breakdown)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::registry::testing::RecordingSurface;
    use crate::charts::ChartRegistry;
    use chrono::NaiveDate;
    use common::BreakdownItem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn kpis() -> KpiData {
        KpiData {
            today_date: date(2025, 6, 24),
            next_day_date: date(2025, 6, 25),
            total_consumption_pred: Some(1520.4),
            total_generation_pred: Some(310.5),
            net_grid_import_pred: None,
            next_day_forecast: Some(1499.0),
        }
    }

    #[test]
    fn test_kpi_text() {
        let text = kpi_text(&kpis());

        assert_eq!(text.today_date, "June 24, 2025");
        assert_eq!(text.next_day_date, "June 25");
        assert_eq!(text.total_consumption, "1520 kWh");
        assert_eq!(text.total_generation, "311 kWh");
        assert_eq!(text.net_grid_import, "--");
        assert_eq!(text.entries()[5], (ids::KPI_NEXT_DAY_FORECAST, "1499 kWh"));
    }

    #[test]
    fn test_format_kwh_rounds_like_a_display() {
        assert_eq!(format_kwh(Some(-2.5)), "-2 kWh");
        assert_eq!(format_kwh(Some(0.0)), "0 kWh");
        assert_eq!(format_kwh(Some(f64::NAN)), "--");
    }

    #[test]
    fn test_trend_range_label() {
        let points: Vec<TrendPoint> = (24..=30)
            .map(|day| TrendPoint {
                reading_date: date(2025, 6, day),
                total_consumption_pred: Some(1.0),
            })
            .collect();

        assert_eq!(trend_range_label(&points).as_deref(), Some("(Jun 24 - Jun 30)"));
        assert_eq!(trend_range_label(&[]), None);
    }

    #[test]
    fn test_load_error_message() {
        let error = DashboardError::remote("No prediction available for today");
        assert_eq!(
            load_error_message(&error),
            "Could not load dashboard data: No prediction available for today"
        );
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let overview = DashboardOverview {
            kpis: kpis(),
            forecast_trend: Vec::new(),
            utilization_breakdown: vec![BreakdownItem {
                name: "Hostels".to_string(),
                value: 120.0,
            }],
            intake_breakdown: Vec::new(),
        };
        let mut registry = ChartRegistry::new(RecordingSurface::default());

        for (canvas, spec) in overview_charts(&overview) {
            registry.render(canvas, spec).unwrap();
        }

        assert_eq!(registry.live_count(), 1);
        assert!(registry.handle(ids::UTILIZATION_CHART).is_some());
        let figure = registry.surface().last_figure(ids::UTILIZATION_CHART).unwrap();
        assert_eq!(figure["data"][0]["labels"][0], "Hostels");
    }
}
