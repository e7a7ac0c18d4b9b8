use common::{ids, DashboardOverview};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::api_client::dashboard::get_dashboard_overview;
use crate::browser::dom;
use crate::browser::plotly::PlotlySurface;
use crate::browser::Client;
use crate::charts::ChartRegistry;
use crate::error::{DashboardError, Result};
use crate::overview::{kpi_text, load_error_message, overview_charts, trend_range_label, LOAD_ERROR_HINT};

const CANVASES: [&str; 3] = [ids::MAIN_CHART, ids::UTILIZATION_CHART, ids::INTAKE_CHART];

struct OverviewView {
    kpis: Vec<(&'static str, Element)>,
    chart_dates: Element,
    main_content: Element,
    charts: ChartRegistry<PlotlySurface>,
}

impl OverviewView {
    fn bind() -> Result<Self> {
        let kpis = [
            ids::KPI_TODAY_DATE,
            ids::KPI_NEXT_DAY_DATE,
            ids::KPI_TOTAL_CONSUMPTION,
            ids::KPI_TOTAL_GENERATION,
            ids::KPI_NET_GRID_IMPORT,
            ids::KPI_NEXT_DAY_FORECAST,
        ]
        .into_iter()
        .map(|id| dom::element::<Element>(id).map(|el| (id, el)))
        .collect::<Result<Vec<_>>>()?;

        for canvas in CANVASES {
            dom::element::<Element>(canvas)?;
        }

        Ok(Self {
            kpis,
            chart_dates: dom::element(ids::MAIN_CHART_DATES)?,
            main_content: dom::element(ids::MAIN_CONTENT)?,
            charts: ChartRegistry::new(PlotlySurface),
        })
    }

    fn show(&mut self, overview: &DashboardOverview) {
        let text = kpi_text(&overview.kpis);
        for (id, value) in text.entries() {
            if let Some((_, element)) = self.kpis.iter().find(|(kpi, _)| *kpi == id) {
                dom::set_text(element, value);
            }
        }

        if let Some(range) = trend_range_label(&overview.forecast_trend) {
            dom::set_text(&self.chart_dates, &range);
        }

        for (canvas, spec) in overview_charts(overview) {
            if let Err(e) = self.charts.render(canvas, spec) {
                log::error!("Failed to draw #{}: {}", canvas, e);
            }
        }
    }

    fn show_error(&mut self, error: &DashboardError) -> Result<()> {
        for canvas in CANVASES {
            self.charts.release(canvas);
        }

        let document = dom::document()?;
        let heading = document.create_element("h1").map_err(dom::js_error)?;
        dom::set_text(&heading, "Error");
        let message = document.create_element("p").map_err(dom::js_error)?;
        dom::set_text(&message, &load_error_message(error));
        let hint = document.create_element("p").map_err(dom::js_error)?;
        dom::set_text(&hint, LOAD_ERROR_HINT);

        self.main_content.set_text_content(None);
        for node in [heading, message, hint] {
            self.main_content.append_child(&node).map_err(dom::js_error)?;
        }
        Ok(())
    }
}

pub fn start(client: Client) -> Result<()> {
    let mut view = OverviewView::bind()?;

    spawn_local(async move {
        match get_dashboard_overview(&*client).await {
            Ok(overview) => view.show(&overview),
            Err(e) => {
                if let Err(render_error) = view.show_error(&e) {
                    log::error!("Failed to show overview error: {}", render_error);
                }
            }
        }
    });

    Ok(())
}
