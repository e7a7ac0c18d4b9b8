use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a point was measured or produced by the forecasting model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Historical,
    Predicted,
    /// Any tag the API sends that this client does not know about.
    #[serde(other)]
    Unknown,
}

/// One dated value of a metric, as returned by `GET /forecasts/metric/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    #[serde(rename = "reading_date")]
    pub date: NaiveDate,
    #[serde(rename = "prediction")]
    pub value: Option<f64>,
    #[serde(rename = "type")]
    pub kind: MetricKind,
}

impl MetricPoint {
    pub fn new(date: NaiveDate, value: Option<f64>, kind: MetricKind) -> Self {
        Self { date, value, kind }
    }

    pub fn historical(date: NaiveDate, value: Option<f64>) -> Self {
        Self::new(date, value, MetricKind::Historical)
    }

    pub fn predicted(date: NaiveDate, value: Option<f64>) -> Self {
        Self::new(date, value, MetricKind::Predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"[
            {"reading_date": "2025-06-24", "prediction": 10.0, "type": "historical"},
            {"reading_date": "2025-06-25", "prediction": null, "type": "predicted"},
            {"reading_date": "2025-06-26", "prediction": 3.5, "type": "interpolated"}
        ]"#;

        let points: Vec<MetricPoint> = serde_json::from_str(json).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        assert_eq!(points[0].value, Some(10.0));
        assert_eq!(points[0].kind, MetricKind::Historical);
        assert_eq!(points[1].value, None);
        assert_eq!(points[1].kind, MetricKind::Predicted);
        assert_eq!(points[2].kind, MetricKind::Unknown);
    }
}
