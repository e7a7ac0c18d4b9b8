use chrono::NaiveDate;
use common::MetricPoint;

use super::{ApiClient, Transport};
use crate::error::Result;

pub const METRIC_FORECAST_ENDPOINT: &str = "/forecasts/metric/";

/// Date window and metric column of one forecast lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub metric_id: String,
}

pub async fn get_metric_forecast<T: Transport>(
    client: &ApiClient<T>,
    query: &ForecastQuery,
) -> Result<Vec<MetricPoint>> {
    log::trace!(
        "Fetching forecast for metric {} from {} to {}",
        query.metric_id,
        query.start_date,
        query.end_date
    );

    let result = client
        .get::<Vec<MetricPoint>>(
            METRIC_FORECAST_ENDPOINT,
            &[
                ("start_date", query.start_date.to_string()),
                ("end_date", query.end_date.to_string()),
                ("metric_name", query.metric_id.clone()),
            ],
        )
        .await;

    match &result {
        Ok(points) => log::info!("Fetched {} points for metric {}", points.len(), query.metric_id),
        Err(e) => log::error!("Failed to fetch forecast for {}: {}", query.metric_id, e),
    }

    result
}
