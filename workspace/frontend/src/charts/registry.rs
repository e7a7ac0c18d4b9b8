use std::collections::HashMap;

use super::specs::ChartSpec;
use crate::error::Result;

/// Where charts are actually drawn.
pub trait ChartSurface {
    /// Construct a chart in the canvas with the given id.
    fn draw(&mut self, canvas_id: &str, spec: &ChartSpec) -> Result<()>;

    /// Destroy whatever chart the canvas currently shows.
    fn release(&mut self, canvas_id: &str);
}

/// Ownership token for the chart currently bound to a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartHandle {
    pub canvas_id: String,
    /// Increases with every chart constructed through the registry.
    pub serial: u64,
}

/// Holds at most one live chart per canvas.
///
/// Rendering into a canvas releases the previous chart before the new one
/// is constructed, so repeated renders never accumulate instances.
#[derive(Debug)]
pub struct ChartRegistry<S> {
    surface: S,
    live: HashMap<String, ChartHandle>,
    next_serial: u64,
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: HashMap::new(),
            next_serial: 1,
        }
    }

    /// Draw `spec` into `canvas_id`.
    ///
    /// `None` means there was nothing to plot: the call is a no-op and any
    /// chart already on the canvas stays. Returns the new handle otherwise.
    pub fn render(&mut self, canvas_id: &str, spec: Option<ChartSpec>) -> Result<Option<ChartHandle>> {
        let Some(spec) = spec else {
            log::debug!("No data for #{}, skipping render", canvas_id);
            return Ok(None);
        };

        self.release(canvas_id);

        self.surface.draw(canvas_id, &spec)?;
        let handle = ChartHandle {
            canvas_id: canvas_id.to_string(),
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.live.insert(canvas_id.to_string(), handle.clone());

        log::trace!("Rendered chart #{} into #{}", handle.serial, canvas_id);
        Ok(Some(handle))
    }

    /// Destroy the chart bound to `canvas_id`, if any.
    pub fn release(&mut self, canvas_id: &str) {
        if let Some(handle) = self.live.remove(canvas_id) {
            log::trace!("Releasing chart #{} on #{}", handle.serial, canvas_id);
            self.surface.release(canvas_id);
        }
    }

    pub fn handle(&self, canvas_id: &str) -> Option<&ChartHandle> {
        self.live.get(canvas_id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSurface;
    use super::*;
    use crate::charts::specs::{doughnut_chart, time_series_chart};
    use crate::reshape::reshape;
    use common::BreakdownItem;

    fn items() -> Vec<BreakdownItem> {
        vec![BreakdownItem {
            name: "Hostels".to_string(),
            value: 42.0,
        }]
    }

    #[test]
    fn test_repeated_renders_keep_one_instance() {
        let mut registry = ChartRegistry::new(RecordingSurface::default());

        for _ in 0..10 {
            registry
                .render("forecast", Some(time_series_chart(&reshape(&[], "STP"))))
                .unwrap();
        }

        assert_eq!(registry.surface().instances(), 1);
        assert_eq!(registry.surface().releases, 9);
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.handle("forecast").map(|h| h.serial), Some(10));
    }

    #[test]
    fn test_canvases_are_independent() {
        let mut registry = ChartRegistry::new(RecordingSurface::default());

        registry.render("pie", doughnut_chart(&items())).unwrap();
        registry
            .render("line", Some(time_series_chart(&reshape(&[], "STP"))))
            .unwrap();
        registry.render("pie", doughnut_chart(&items())).unwrap();

        assert_eq!(registry.live_count(), 2);
        assert_eq!(registry.surface().instances(), 2);
    }

    #[test]
    fn test_absent_data_is_a_silent_no_op() {
        let mut registry = ChartRegistry::new(RecordingSurface::default());
        registry.render("pie", doughnut_chart(&items())).unwrap();

        let result = registry.render("pie", doughnut_chart(&[]));

        assert_eq!(result, Ok(None));
        assert!(registry.handle("pie").is_some());
        assert_eq!(registry.surface().releases, 0);
    }

    #[test]
    fn test_failed_draw_leaves_canvas_empty() {
        let mut registry = ChartRegistry::new(RecordingSurface::default());
        registry.render("pie", doughnut_chart(&items())).unwrap();

        let mut failing = RecordingSurface::default();
        failing.fail_next = true;
        registry.surface = failing;
        let result = registry.render("pie", doughnut_chart(&items()));

        assert!(result.is_err());
        assert!(registry.handle("pie").is_none());
    }
}
