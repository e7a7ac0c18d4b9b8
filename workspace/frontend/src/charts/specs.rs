//! Plotly figures for the dashboard's three chart kinds.

use chrono::NaiveDate;
use common::{BreakdownItem, TrendPoint};
use plotly::common::{DashType, Fill, Line, Marker, Mode, Orientation, Title};
use plotly::layout::{Axis, AxisType};
use plotly::{Bar, Layout, Scatter};
use serde::Serialize;

use crate::reshape::SeriesPair;

/// Colors of the doughnut slices; a sixth category wraps to the first.
pub const PALETTE: [&str; 5] = ["#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff"];

pub const BAR_COLOR: &str = "rgba(75, 192, 192, 0.8)";

const HISTORICAL_LINE: &str = "rgb(54, 162, 235)";
const HISTORICAL_FILL: &str = "rgba(54, 162, 235, 0.2)";
const PREDICTED_LINE: &str = "rgb(255, 99, 132)";
const PREDICTED_FILL: &str = "rgba(255, 99, 132, 0.2)";

const DAY_MS: f64 = 86_400_000.0;

/// Plotly `pie` trace; a non-zero `hole` makes it a doughnut.
#[derive(Debug, Clone, Serialize)]
pub struct DoughnutTrace {
    #[serde(rename = "type")]
    kind: &'static str,
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
    hole: f64,
    sort: bool,
    marker: DoughnutMarker,
}

#[derive(Debug, Clone, Serialize)]
struct DoughnutMarker {
    colors: Vec<&'static str>,
    line: DoughnutOutline,
}

#[derive(Debug, Clone, Serialize)]
struct DoughnutOutline {
    color: &'static str,
    width: f64,
}

/// One dataset of a figure.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChartTrace {
    Line(Box<Scatter<NaiveDate, Option<f64>>>),
    Bar(Box<Bar<f64, String>>),
    Doughnut(DoughnutTrace),
}

/// A complete figure, serialized as the `{data, layout}` object
/// `Plotly.newPlot` accepts.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "data")]
    pub traces: Vec<ChartTrace>,
    pub layout: Layout,
}

impl ChartSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn series_trace(
    dates: Vec<NaiveDate>,
    values: Vec<Option<f64>>,
    label: &str,
    line: Line,
    fill_color: &'static str,
) -> ChartTrace {
    ChartTrace::Line(
        Scatter::new(dates, values)
            .name(label)
            .mode(Mode::Lines)
            .line(line)
            .fill(Fill::ToZeroY)
            .fill_color(fill_color),
    )
}

/// Actual (solid) and predicted (dashed) series on a daily date axis.
///
/// Both datasets are always present, possibly empty.
pub fn time_series_chart(pair: &SeriesPair) -> ChartSpec {
    let historical = series_trace(
        pair.historical.dates(),
        pair.historical.values(),
        &pair.historical.label,
        Line::new().color(HISTORICAL_LINE).width(2.0),
        HISTORICAL_FILL,
    );
    let predicted = series_trace(
        pair.predicted.dates(),
        pair.predicted.values(),
        &pair.predicted.label,
        Line::new().color(PREDICTED_LINE).width(2.0).dash(DashType::Dash),
        PREDICTED_FILL,
    );

    ChartSpec {
        traces: vec![historical, predicted],
        layout: Layout::new().x_axis(date_axis()).height(400),
    }
}

/// Predicted consumption for the coming days on the overview page.
pub fn trend_chart(points: &[TrendPoint]) -> Option<ChartSpec> {
    if points.is_empty() {
        return None;
    }

    let dates = points.iter().map(|p| p.reading_date).collect();
    let values = points.iter().map(|p| p.total_consumption_pred).collect();
    let trace = series_trace(
        dates,
        values,
        "Predicted Consumption (kWh)",
        Line::new().color(PREDICTED_LINE).width(2.0),
        PREDICTED_FILL,
    );

    Some(ChartSpec {
        traces: vec![trace],
        layout: Layout::new().x_axis(date_axis()),
    })
}

/// Utilization breakdown as a doughnut.
pub fn doughnut_chart(items: &[BreakdownItem]) -> Option<ChartSpec> {
    if items.is_empty() {
        return None;
    }

    let trace = DoughnutTrace {
        kind: "pie",
        name: "Predicted Utilization (kWh)".to_string(),
        labels: items.iter().map(|item| item.name.clone()).collect(),
        values: items.iter().map(|item| item.value).collect(),
        hole: 0.55,
        sort: false,
        marker: DoughnutMarker {
            colors: (0..items.len()).map(|i| PALETTE[i % PALETTE.len()]).collect(),
            line: DoughnutOutline {
                color: "#fff",
                width: 2.0,
            },
        },
    };

    Some(ChartSpec {
        traces: vec![ChartTrace::Doughnut(trace)],
        layout: Layout::new(),
    })
}

/// Intake breakdown as horizontal bars, one color, no legend.
pub fn intake_bar_chart(items: &[BreakdownItem]) -> Option<ChartSpec> {
    if items.is_empty() {
        return None;
    }

    let values = items.iter().map(|item| item.value).collect();
    let labels = items.iter().map(|item| item.name.clone()).collect();
    let trace = Bar::new(values, labels)
        .name("Predicted Intake (kWh)")
        .orientation(Orientation::Horizontal)
        .marker(Marker::new().color(BAR_COLOR));

    Some(ChartSpec {
        traces: vec![ChartTrace::Bar(trace)],
        layout: Layout::new().show_legend(false),
    })
}

fn date_axis() -> Axis {
    Axis::new()
        .type_(AxisType::Date)
        .dtick(DAY_MS)
        .tick_format("%b %d")
        .title(Title::with_text("Date"))
}
