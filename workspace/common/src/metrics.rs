//! Metric catalogs understood by the external API.

/// A forecastable metric column and the name shown for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastMetric {
    pub id: &'static str,
    pub name: &'static str,
}

/// Metric the forecasting page opens with.
pub const DEFAULT_FORECAST_METRIC: ForecastMetric = ForecastMetric {
    id: "total_consumption_pred",
    name: "Total Consumption",
};

pub const FORECAST_METRICS: [ForecastMetric; 12] = [
    DEFAULT_FORECAST_METRIC,
    ForecastMetric { id: "net_grid_import_pred", name: "Net Grid Import" },
    ForecastMetric { id: "solar_generation_pred", name: "Solar Generation" },
    ForecastMetric { id: "diesel_generation_pred", name: "Diesel Generation" },
    ForecastMetric { id: "biogas_generation_pred", name: "Biogas Generation" },
    ForecastMetric { id: "tneb_campus_htsc_91_pred", name: "TNEB Campus HTSC-91" },
    ForecastMetric { id: "tneb_new_stp_htsc_178_pred", name: "TNEB New STP HTSC-178" },
    ForecastMetric { id: "staff_quarters_util_pred", name: "Staff Quarters" },
    ForecastMetric { id: "academic_blocks_util_pred", name: "Academic Blocks" },
    ForecastMetric { id: "hostels_util_pred", name: "Hostels" },
    ForecastMetric { id: "chiller_plant_util_pred", name: "Chiller Plant" },
    ForecastMetric { id: "stp_util_pred", name: "STP" },
];

/// Metric names offered on the report form, in display order.
pub const REPORT_METRICS: [&str; 13] = [
    "Total Consumption",
    "Total Generation",
    "Net Grid Import",
    "TNEB Campus HTSC-91",
    "TNEB New STP HTSC-178",
    "Solar Generation",
    "Diesel Generation",
    "Biogas Generation",
    "Staff Quarters Util",
    "Academic Blocks Util",
    "Hostels Util",
    "Chiller Plant Util",
    "STP Util",
];

/// Forecast horizons (days) offered on the forecasting page.
pub const FORECAST_HORIZONS: [u32; 3] = [7, 14, 30];

pub const DEFAULT_FORECAST_HORIZON: u32 = 7;

/// Element id of a metric's checkbox on the report form:
/// lower-cased, with whitespace runs replaced by a hyphen.
pub fn checkbox_id(metric: &str) -> String {
    metric
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
