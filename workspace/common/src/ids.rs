//! Element ids and class names shared by the server-rendered markup and the
//! frontend bindings. Changing a value here changes both sides.

// Shell
pub const SIDEBAR: &str = "sidebar";
pub const SIDEBAR_TOGGLE: &str = "sidebar-toggle";
pub const MAIN_CONTENT: &str = "main-content";

/// Body class that suppresses transitions until the sidebar state is applied.
pub const CLASS_PRELOAD: &str = "preload";
pub const CLASS_SIDEBAR_CLOSED: &str = "closed";
pub const CLASS_CONTENT_SIDEBAR_CLOSED: &str = "sidebar-closed";
pub const CLASS_TOGGLED: &str = "toggled";

// Overview
pub const KPI_TODAY_DATE: &str = "kpi-today-date";
pub const KPI_NEXT_DAY_DATE: &str = "kpi-next-day-date";
pub const KPI_TOTAL_CONSUMPTION: &str = "kpi-total-consumption";
pub const KPI_TOTAL_GENERATION: &str = "kpi-total-generation";
pub const KPI_NET_GRID_IMPORT: &str = "kpi-net-grid-import";
pub const KPI_NEXT_DAY_FORECAST: &str = "kpi-next-day-forecast";
pub const MAIN_CHART: &str = "main-chart-area";
pub const MAIN_CHART_DATES: &str = "main-chart-dates";
pub const UTILIZATION_CHART: &str = "utilization-pie-chart";
pub const INTAKE_CHART: &str = "intake-bar-chart";

// Forecasting
pub const HORIZON_SELECT: &str = "horizon-select";
pub const FORECAST_TITLE: &str = "total-consumption-title";
pub const FORECAST_CHART: &str = "total-consumption-chart";
pub const CAMPUS_MAP: &str = "campus-map";
/// Class carried by every clickable map shape.
pub const CLASS_MAP_SHAPE: &str = "building";
pub const CLASS_SELECTED: &str = "selected";

// Report
pub const REPORT_FORM: &str = "report-form";
pub const METRICS_GRID: &str = "metrics-grid";
pub const START_DATE_INPUT: &str = "start-date";
pub const END_DATE_INPUT: &str = "end-date";
pub const FORMAT_SELECT: &str = "format";
pub const SUBMIT_BUTTON: &str = "generate-report";
pub const STATUS_AREA: &str = "report-status-area";
pub const STATUS_MESSAGE: &str = "status-message";
pub const PROGRESS_BAR: &str = "report-progress-bar";
pub const PROGRESS_VALUE: &str = "report-progress-value";
pub const DOWNLOAD_LINK: &str = "download-link";
pub const RESET_BUTTON: &str = "report-reset";
pub const CLASS_DISABLED: &str = "disabled";

/// Form field name shared by all metric checkboxes.
pub const METRICS_FIELD: &str = "metrics";
