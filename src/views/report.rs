use common::metrics::{REPORT_METRICS, checkbox_id};
use common::{ReportFormat, ids};
use maud::{Markup, html};

fn metrics_grid() -> Markup {
    html! {
        fieldset class="metrics-fieldset" {
            legend { "Metrics" }
            div id=(ids::METRICS_GRID) class="metrics-grid" {
                @for metric in REPORT_METRICS {
                    @let id = checkbox_id(metric);
                    label class="metric-option" for=(id) {
                        input type="checkbox" id=(id) name=(ids::METRICS_FIELD) value=(metric);
                        " " (metric)
                    }
                }
            }
        }
    }
}

/// Status area, hidden until a report is submitted.
fn status_area() -> Markup {
    html! {
        div id=(ids::STATUS_AREA) class="report-status" hidden {
            p id=(ids::STATUS_MESSAGE) class="status-message" {}
            div class="progress" {
                div id=(ids::PROGRESS_BAR) class="progress-bar" style="width: 0%" {}
            }
            span id=(ids::PROGRESS_VALUE) class="progress-value" { "0%" }
            a id=(ids::DOWNLOAD_LINK) class=(ids::CLASS_DISABLED) href="#" { "Download report" }
            button id=(ids::RESET_BUTTON) type="button" class="button-secondary" hidden { "Generate another report" }
        }
    }
}

pub fn content() -> Markup {
    html! {
        section class="panel" {
            form id=(ids::REPORT_FORM) class="report-form" {
                div class="date-range" {
                    label for=(ids::START_DATE_INPUT) { "Start date" }
                    input type="date" id=(ids::START_DATE_INPUT) name=(ids::START_DATE_INPUT) required;
                    label for=(ids::END_DATE_INPUT) { "End date" }
                    input type="date" id=(ids::END_DATE_INPUT) name=(ids::END_DATE_INPUT) required;
                }
                (metrics_grid())
                label for=(ids::FORMAT_SELECT) { "Format" }
                select id=(ids::FORMAT_SELECT) name=(ids::FORMAT_SELECT) {
                    @for format in ReportFormat::ALL {
                        option value=(format.extension()) { (format.label()) }
                    }
                }
                button id=(ids::SUBMIT_BUTTON) type="submit" class="button-primary" { "Generate report" }
            }
            (status_area())
        }
    }
}
