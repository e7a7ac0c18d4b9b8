use common::ids;
use maud::{Markup, html};

/// A KPI card; the frontend fills `value_id` with the formatted
/// `"{n} kWh"` text once the overview loads.
fn kpi_card(label: &str, value_id: &str, date_id: Option<&str>) -> Markup {
    html! {
        div class="kpi-card" {
            div class="kpi-label" {
                (label)
                @if let Some(date_id) = date_id {
                    " " span id=(date_id) class="kpi-date" { "--" }
                }
            }
            div class="kpi-value" {
                span id=(value_id) { "--" }
            }
        }
    }
}

pub fn content() -> Markup {
    html! {
        section class="kpi-grid" {
            div class="kpi-card kpi-date-card" {
                div class="kpi-label" { "Today" }
                div class="kpi-value" { span id=(ids::KPI_TODAY_DATE) { "--" } }
            }
            (kpi_card("Total consumption", ids::KPI_TOTAL_CONSUMPTION, None))
            (kpi_card("Total generation", ids::KPI_TOTAL_GENERATION, None))
            (kpi_card("Net grid import", ids::KPI_NET_GRID_IMPORT, None))
            (kpi_card("Forecast for", ids::KPI_NEXT_DAY_FORECAST, Some(ids::KPI_NEXT_DAY_DATE)))
        }
        section class="panel" {
            h3 { "Predicted consumption " span id=(ids::MAIN_CHART_DATES) class="chart-dates" {} }
            div id=(ids::MAIN_CHART) class="chart chart-wide" {}
        }
        div class="chart-row" {
            section class="panel" {
                h3 { "Predicted utilization by area" }
                div id=(ids::UTILIZATION_CHART) class="chart" {}
            }
            section class="panel" {
                h3 { "Predicted intake by source" }
                div id=(ids::INTAKE_CHART) class="chart" {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpis_start_as_placeholders() {
        let markup = content().into_string();
        for id in [
            ids::KPI_TODAY_DATE,
            ids::KPI_NEXT_DAY_DATE,
            ids::KPI_TOTAL_CONSUMPTION,
            ids::KPI_TOTAL_GENERATION,
            ids::KPI_NET_GRID_IMPORT,
            ids::KPI_NEXT_DAY_FORECAST,
        ] {
            assert!(markup.contains(&format!(r#"id="{}""#, id)), "missing {id}");
        }
        assert_eq!(markup.matches(">--<").count(), 6);
    }

    #[test]
    fn test_kpi_values_carry_no_separate_unit() {
        let markup = content().into_string();

        assert!(!markup.contains("kpi-unit"));
        assert!(!markup.contains("kWh"));
        assert!(markup.contains(&format!(r#"<span id="{}">--</span></div>"#, ids::KPI_TOTAL_CONSUMPTION)));
    }

    #[test]
    fn test_chart_headings_describe_predictions() {
        let markup = content().into_string();

        assert!(markup.contains("Predicted consumption"));
        assert!(markup.contains("Predicted intake by source"));
        assert!(!markup.contains("Water"));
    }
}
