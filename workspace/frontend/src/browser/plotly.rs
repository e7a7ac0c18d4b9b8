use wasm_bindgen::prelude::*;

use super::dom;
use crate::charts::{ChartSpec, ChartSurface};
use crate::error::{DashboardError, Result};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(element_id: &str, figure: JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(element_id: &str) -> std::result::Result<(), JsValue>;
}

/// Draws into the page's Plotly containers.
#[derive(Debug, Default)]
pub struct PlotlySurface;

impl ChartSurface for PlotlySurface {
    fn draw(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<()> {
        dom::element::<web_sys::Element>(canvas_id)?;

        let json = spec
            .to_json()
            .map_err(|e| DashboardError::Browser(format!("Failed to serialize chart: {}", e)))?;
        let figure = js_sys::JSON::parse(&json).map_err(dom::js_error)?;
        new_plot(canvas_id, figure).map_err(dom::js_error)?;
        Ok(())
    }

    fn release(&mut self, canvas_id: &str) {
        if let Err(e) = purge(canvas_id) {
            log::warn!("Plotly.purge failed on #{}: {:?}", canvas_id, e);
        }
    }
}
