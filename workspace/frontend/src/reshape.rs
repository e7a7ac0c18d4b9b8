//! Splits a mixed historical/predicted metric response into the two series
//! the forecast line chart plots.

use chrono::NaiveDate;
use common::{MetricKind, MetricPoint};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

impl LabeledSeries {
    fn new(label: String) -> Self {
        Self {
            label,
            points: Vec::new(),
        }
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair {
    pub historical: LabeledSeries,
    pub predicted: LabeledSeries,
}

impl SeriesPair {
    pub fn len(&self) -> usize {
        self.historical.points.len() + self.predicted.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `points` by kind, keeping the order they arrived in.
///
/// Points are not sorted: the chart's date axis places them by value.
/// A point of unrecognized kind belongs to neither series and is dropped.
pub fn reshape(points: &[MetricPoint], metric_name: &str) -> SeriesPair {
    let mut pair = SeriesPair {
        historical: LabeledSeries::new(format!("Actual {}", metric_name)),
        predicted: LabeledSeries::new(format!("Predicted {}", metric_name)),
    };

    for point in points {
        let series = match point.kind {
            MetricKind::Historical => &mut pair.historical,
            MetricKind::Predicted => &mut pair.predicted,
            MetricKind::Unknown => {
                log::debug!("Dropping point of unknown kind on {}", point.date);
                continue;
            }
        };
        series.points.push(SeriesPoint {
            date: point.date,
            value: point.value,
        });
    }

    pair
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reshape_mixed_response() {
        let points = vec![
            MetricPoint::historical(date(2025, 6, 24), Some(10.0)),
            MetricPoint::predicted(date(2025, 6, 25), None),
        ];

        let pair = reshape(&points, "Solar Generation");

        assert_eq!(pair.historical.label, "Actual Solar Generation");
        assert_eq!(pair.predicted.label, "Predicted Solar Generation");
        assert_eq!(
            pair.historical.points,
            vec![SeriesPoint { date: date(2025, 6, 24), value: Some(10.0) }]
        );
        assert_eq!(
            pair.predicted.points,
            vec![SeriesPoint { date: date(2025, 6, 25), value: None }]
        );
    }

    #[test]
    fn test_reshape_does_not_sort() {
        let points = vec![
            MetricPoint::predicted(date(2025, 7, 3), Some(3.0)),
            MetricPoint::predicted(date(2025, 7, 1), Some(1.0)),
            MetricPoint::predicted(date(2025, 7, 2), Some(2.0)),
        ];

        let pair = reshape(&points, "STP");

        assert_eq!(pair.predicted.dates(), vec![date(2025, 7, 3), date(2025, 7, 1), date(2025, 7, 2)]);
        assert!(pair.historical.points.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_dropped() {
        let points = vec![
            MetricPoint::historical(date(2025, 6, 29), Some(5.0)),
            MetricPoint::new(date(2025, 6, 30), Some(6.0), MetricKind::Unknown),
        ];

        let pair = reshape(&points, "Hostels");

        assert_eq!(pair.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let pair = reshape(&[], "Hostels");
        assert!(pair.is_empty());
        assert_eq!(pair.historical.label, "Actual Hostels");
    }

    fn arb_point() -> impl Strategy<Value = MetricPoint> {
        (
            0i64..365,
            proptest::option::of(-1.0e6f64..1.0e6),
            prop_oneof![
                Just(MetricKind::Historical),
                Just(MetricKind::Predicted),
                Just(MetricKind::Unknown),
            ],
        )
            .prop_map(|(offset, value, kind)| {
                MetricPoint::new(date(2025, 1, 1) + chrono::Duration::days(offset), value, kind)
            })
    }

    proptest! {
        #[test]
        fn prop_partition_counts_recognized_points(points in proptest::collection::vec(arb_point(), 0..64)) {
            let pair = reshape(&points, "Metric");
            let recognized = points.iter().filter(|p| p.kind != MetricKind::Unknown).count();

            prop_assert_eq!(pair.len(), recognized);
            prop_assert!(pair.len() <= points.len());
        }

        #[test]
        fn prop_partition_preserves_order(points in proptest::collection::vec(arb_point(), 0..64)) {
            let pair = reshape(&points, "Metric");

            let expected_historical: Vec<SeriesPoint> = points
                .iter()
                .filter(|p| p.kind == MetricKind::Historical)
                .map(|p| SeriesPoint { date: p.date, value: p.value })
                .collect();
            let expected_predicted: Vec<SeriesPoint> = points
                .iter()
                .filter(|p| p.kind == MetricKind::Predicted)
                .map(|p| SeriesPoint { date: p.date, value: p.value })
                .collect();

            prop_assert_eq!(pair.historical.points, expected_historical);
            prop_assert_eq!(pair.predicted.points, expected_predicted);
        }
    }
}
