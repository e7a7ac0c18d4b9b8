use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use common::ids;
use common::metrics::DEFAULT_FORECAST_HORIZON;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlSelectElement};

use crate::api_client::forecast::get_metric_forecast;
use crate::browser::dom;
use crate::browser::plotly::PlotlySurface;
use crate::browser::Client;
use crate::charts::{time_series_chart, ChartRegistry};
use crate::error::Result;
use crate::forecasting::{window_start, ForecastController, ForecastOutcome, ForecastRequest};
use crate::shell::MapRegion;

struct ForecastPage {
    controller: ForecastController,
    charts: ChartRegistry<PlotlySurface>,
    title: Element,
    shapes: Vec<Element>,
}

impl ForecastPage {
    fn show_pending(&self, request: &ForecastRequest) {
        dom::set_text(&self.title, &request.title);
        for (index, shape) in self.shapes.iter().enumerate() {
            dom::set_class(shape, ids::CLASS_SELECTED, self.controller.selection().is_selected(index));
        }
    }

    fn show(&mut self, outcome: ForecastOutcome) {
        match outcome {
            ForecastOutcome::Render { title, series } => {
                dom::set_text(&self.title, &title);
                if let Err(e) = self.charts.render(ids::FORECAST_CHART, Some(time_series_chart(&series))) {
                    log::error!("Failed to draw forecast chart: {}", e);
                }
            }
            ForecastOutcome::Failed { title } => dom::set_text(&self.title, &title),
        }
    }
}

fn today() -> NaiveDate {
    window_start(&Local::now())
}

/// Map shapes that name a metric, with their regions in the same order.
fn bind_map() -> Result<(Vec<Element>, Vec<MapRegion>)> {
    let map = dom::element::<Element>(ids::CAMPUS_MAP)?;
    let mut shapes = Vec::new();
    let mut regions = Vec::new();

    for shape in dom::query_all(&map, &format!(".{}", ids::CLASS_MAP_SHAPE))? {
        let (Some(metric_id), Some(name)) = (shape.get_attribute("data-metric"), shape.get_attribute("data-name"))
        else {
            continue;
        };
        regions.push(MapRegion { metric_id, name });
        shapes.push(shape);
    }

    log::debug!("Bound {} map regions", regions.len());
    Ok((shapes, regions))
}

fn fetch(page: Rc<RefCell<ForecastPage>>, client: Client, request: ForecastRequest) {
    page.borrow().show_pending(&request);

    spawn_local(async move {
        let result = get_metric_forecast(&*client, &request.query).await;
        let mut page = page.borrow_mut();
        if let Some(outcome) = page.controller.apply(request.token, result) {
            page.show(outcome);
        }
    });
}

pub fn start(client: Client) -> Result<()> {
    let horizon = dom::element::<HtmlSelectElement>(ids::HORIZON_SELECT)?;
    let title = dom::element::<Element>(ids::FORECAST_TITLE)?;
    dom::element::<Element>(ids::FORECAST_CHART)?;
    let (shapes, regions) = bind_map()?;

    let mut controller = ForecastController::new(regions.clone());
    let days = horizon.value().parse().unwrap_or(DEFAULT_FORECAST_HORIZON);
    let initial = controller.set_horizon(days, today());

    let page = Rc::new(RefCell::new(ForecastPage {
        controller,
        charts: ChartRegistry::new(PlotlySurface),
        title,
        shapes: shapes.clone(),
    }));

    for (shape, region) in shapes.iter().zip(regions) {
        let page = page.clone();
        let client = client.clone();
        dom::listen(shape, "click", move |_| {
            let request = page
                .borrow_mut()
                .controller
                .select_metric(&region.metric_id, &region.name, today());
            fetch(page.clone(), client.clone(), request);
        })?;
    }

    {
        let page = page.clone();
        let client = client.clone();
        let select = horizon.clone();
        dom::listen(&horizon, "change", move |_| {
            let days = select.value().parse().unwrap_or(DEFAULT_FORECAST_HORIZON);
            let request = page.borrow_mut().controller.set_horizon(days, today());
            fetch(page.clone(), client.clone(), request);
        })?;
    }

    fetch(page, client, initial);
    Ok(())
}
