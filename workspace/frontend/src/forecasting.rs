//! Forecasting page logic: which metric and horizon to show, and which
//! response is allowed to reach the chart.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use common::metrics::{DEFAULT_FORECAST_HORIZON, DEFAULT_FORECAST_METRIC, FORECAST_HORIZONS};
use common::MetricPoint;

use crate::api_client::forecast::ForecastQuery;
use crate::error::Result;
use crate::requests::{RequestGuard, RequestToken};
use crate::reshape::{reshape, SeriesPair};
use crate::shell::{MapRegion, MapSelection};

/// The calendar date forecast windows start from: the UTC date of `now`,
/// whatever zone the clock reports in.
pub fn window_start<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.with_timezone(&Utc).date_naive()
}

/// Inclusive date window covering `days` days starting today.
pub fn forecast_window(today: NaiveDate, days: u32) -> (NaiveDate, NaiveDate) {
    let span = u64::from(days.max(1) - 1);
    let end = today.checked_add_days(Days::new(span)).unwrap_or(NaiveDate::MAX);
    (today, end)
}

/// A forecast fetch the page should start.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    pub token: RequestToken,
    pub query: ForecastQuery,
    /// Title shown while the request is in flight.
    pub title: String,
}

/// What to show once a current response arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    Render { title: String, series: SeriesPair },
    Failed { title: String },
}

#[derive(Debug)]
pub struct ForecastController {
    guard: RequestGuard,
    selection: MapSelection,
    metric_id: String,
    metric_name: String,
    horizon: u32,
}

impl ForecastController {
    pub fn new(regions: Vec<MapRegion>) -> Self {
        Self {
            guard: RequestGuard::new(),
            selection: MapSelection::new(regions),
            metric_id: DEFAULT_FORECAST_METRIC.id.to_string(),
            metric_name: DEFAULT_FORECAST_METRIC.name.to_string(),
            horizon: DEFAULT_FORECAST_HORIZON,
        }
    }

    pub fn selection(&self) -> &MapSelection {
        &self.selection
    }

    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }

    /// Switch to another metric and request its forecast.
    pub fn select_metric(&mut self, metric_id: &str, name: &str, today: NaiveDate) -> ForecastRequest {
        log::debug!("Selected metric {} ({})", name, metric_id);
        self.metric_id = metric_id.to_string();
        self.metric_name = name.to_string();
        self.selection.select(metric_id);
        self.refresh(today)
    }

    /// Change the horizon. Values outside the offered set fall back to the
    /// default.
    pub fn set_horizon(&mut self, days: u32, today: NaiveDate) -> ForecastRequest {
        self.horizon = if FORECAST_HORIZONS.contains(&days) {
            days
        } else {
            log::warn!("Unsupported forecast horizon {}, using {}", days, DEFAULT_FORECAST_HORIZON);
            DEFAULT_FORECAST_HORIZON
        };
        self.refresh(today)
    }

    /// Request the current metric over the current horizon. Every earlier
    /// request becomes stale.
    pub fn refresh(&mut self, today: NaiveDate) -> ForecastRequest {
        self.selection.select(&self.metric_id);
        let (start_date, end_date) = forecast_window(today, self.horizon);
        ForecastRequest {
            token: self.guard.issue(),
            query: ForecastQuery {
                start_date,
                end_date,
                metric_id: self.metric_id.clone(),
            },
            title: format!("{} Forecast", self.metric_name),
        }
    }

    /// Turn a response into what the page shows, or `None` when a newer
    /// request has been issued since.
    pub fn apply(&self, token: RequestToken, result: Result<Vec<MetricPoint>>) -> Option<ForecastOutcome> {
        if !self.guard.is_current(token) {
            log::debug!("Discarding stale forecast response #{}", token.generation());
            return None;
        }

        Some(match result {
            Ok(points) => ForecastOutcome::Render {
                title: format!("{} Forecast", self.metric_name),
                series: reshape(&points, &self.metric_name),
            },
            Err(error) => ForecastOutcome::Failed {
                title: format!("Error: {}", error),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::forecast::get_metric_forecast;
    use crate::api_client::testing::ScriptedTransport;
    use crate::api_client::ApiClient;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn regions() -> Vec<MapRegion> {
        vec![
            MapRegion {
                metric_id: "hostels_util_pred".to_string(),
                name: "Hostels".to_string(),
            },
            MapRegion {
                metric_id: "stp_util_pred".to_string(),
                name: "STP".to_string(),
            },
        ]
    }

    #[test]
    fn test_forecast_window_includes_today() {
        let today = date(2025, 6, 28);
        assert_eq!(forecast_window(today, 7), (today, date(2025, 7, 4)));
        assert_eq!(forecast_window(today, 1), (today, today));
        assert_eq!(forecast_window(today, 0), (today, today));
    }

    #[test]
    fn test_window_starts_on_the_utc_date() {
        let ahead = DateTime::parse_from_rfc3339("2025-07-01T01:30:00+05:30").unwrap();
        assert_eq!(window_start(&ahead), date(2025, 6, 30));

        let behind = DateTime::parse_from_rfc3339("2025-06-30T20:00:00-05:00").unwrap();
        assert_eq!(window_start(&behind), date(2025, 7, 1));
    }

    #[test]
    fn test_initial_request_uses_defaults() {
        let mut controller = ForecastController::new(regions());
        let request = controller.refresh(date(2025, 6, 24));

        assert_eq!(request.title, "Total Consumption Forecast");
        assert_eq!(request.query.metric_id, "total_consumption_pred");
        assert_eq!(request.query.end_date, date(2025, 6, 30));
        assert!(controller.selection().selected().is_none());
    }

    #[test]
    fn test_horizon_change_keeps_metric() {
        let mut controller = ForecastController::new(regions());
        controller.select_metric("stp_util_pred", "STP", date(2025, 6, 1));

        let request = controller.set_horizon(30, date(2025, 6, 1));
        assert_eq!(request.query.metric_id, "stp_util_pred");
        assert_eq!(request.query.end_date, date(2025, 6, 30));

        let request = controller.set_horizon(9, date(2025, 6, 1));
        assert_eq!(controller.horizon(), DEFAULT_FORECAST_HORIZON);
        assert_eq!(request.query.end_date, date(2025, 6, 7));
    }

    #[tokio::test]
    async fn test_late_response_for_earlier_selection_is_discarded() {
        let client = ApiClient::new(
            "http://api.local",
            ScriptedTransport::new()
                .respond(200, r#"[{"reading_date":"2025-06-24","prediction":1.0,"type":"historical"}]"#)
                .respond(200, r#"[{"reading_date":"2025-06-24","prediction":2.0,"type":"predicted"}]"#),
        );
        let mut controller = ForecastController::new(regions());
        let today = date(2025, 6, 24);

        let hostels = controller.select_metric("hostels_util_pred", "Hostels", today);
        let stp = controller.select_metric("stp_util_pred", "STP", today);

        // Responses arrive in reverse order of issue.
        let stp_points = get_metric_forecast(&client, &stp.query).await;
        let hostels_points = get_metric_forecast(&client, &hostels.query).await;

        let shown = controller.apply(stp.token, stp_points);
        let late = controller.apply(hostels.token, hostels_points);

        assert!(late.is_none());
        let Some(ForecastOutcome::Render { title, series }) = shown else {
            panic!("expected a render outcome");
        };
        assert_eq!(title, "STP Forecast");
        assert_eq!(series.predicted.label, "Predicted STP");
        assert_eq!(controller.selection().selected().map(|r| r.name.as_str()), Some("STP"));
    }

    #[tokio::test]
    async fn test_failure_sets_error_title() {
        let client = ApiClient::new(
            "http://api.local",
            ScriptedTransport::new().respond(404, r#"{"detail":"No data for the requested range"}"#),
        );
        let mut controller = ForecastController::new(regions());
        let request = controller.refresh(date(2025, 6, 24));

        let result = get_metric_forecast(&client, &request.query).await;

        assert_eq!(
            controller.apply(request.token, result),
            Some(ForecastOutcome::Failed {
                title: "Error: No data for the requested range".to_string()
            })
        );
    }
}
