use common::metrics::{DEFAULT_FORECAST_HORIZON, DEFAULT_FORECAST_METRIC, FORECAST_HORIZONS, FORECAST_METRICS};
use common::ids;
use maud::{Markup, html};

const MAP_COLUMNS: usize = 4;
const SHAPE_WIDTH: usize = 140;
const SHAPE_HEIGHT: usize = 80;
const SHAPE_GAP: usize = 20;

/// Clickable campus map: one labelled shape per forecastable metric,
/// laid out on a grid.
fn campus_map() -> Markup {
    let rows = FORECAST_METRICS.len().div_ceil(MAP_COLUMNS);
    let width = MAP_COLUMNS * (SHAPE_WIDTH + SHAPE_GAP) + SHAPE_GAP;
    let height = rows * (SHAPE_HEIGHT + SHAPE_GAP) + SHAPE_GAP;

    html! {
        svg id=(ids::CAMPUS_MAP) class="campus-map-svg" viewBox={ "0 0 " (width) " " (height) } xmlns="http://www.w3.org/2000/svg" {
            @for (index, metric) in FORECAST_METRICS.iter().enumerate() {
                @let x = SHAPE_GAP + (index % MAP_COLUMNS) * (SHAPE_WIDTH + SHAPE_GAP);
                @let y = SHAPE_GAP + (index / MAP_COLUMNS) * (SHAPE_HEIGHT + SHAPE_GAP);
                g {
                    rect class=(ids::CLASS_MAP_SHAPE) x=(x) y=(y) width=(SHAPE_WIDTH) height=(SHAPE_HEIGHT) rx="6"
                        data-metric=(metric.id) data-name=(metric.name) {
                        title { (metric.name) }
                    }
                    text class="building-label" x=(x + SHAPE_WIDTH / 2) y=(y + SHAPE_HEIGHT / 2) text-anchor="middle" { (metric.name) }
                }
            }
        }
    }
}

pub fn content() -> Markup {
    html! {
        div class="forecast-layout" {
            section class="panel" {
                div class="panel-header" {
                    h3 id=(ids::FORECAST_TITLE) { (DEFAULT_FORECAST_METRIC.name) " Forecast" }
                    label for=(ids::HORIZON_SELECT) { "Horizon" }
                    select id=(ids::HORIZON_SELECT) {
                        @for days in FORECAST_HORIZONS {
                            option value=(days) selected[days == DEFAULT_FORECAST_HORIZON] { (days) " days" }
                        }
                    }
                }
                div id=(ids::FORECAST_CHART) class="chart chart-wide" {}
            }
            section class="panel" {
                h3 { "Campus map" }
                p class="hint" { "Select a building to forecast its consumption." }
                (campus_map())
            }
        }
    }
}
