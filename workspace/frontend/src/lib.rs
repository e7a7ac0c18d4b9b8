//! Browser client of the energy dashboard.
//!
//! The server renders every page; this crate binds to the rendered markup,
//! talks to the forecasting API and draws the charts. Everything except the
//! `browser` module is plain Rust and is tested natively.

pub mod api_client;
pub mod charts;
pub mod error;
pub mod forecasting;
pub mod overview;
pub mod progress;
pub mod report_flow;
pub mod requests;
pub mod reshape;
pub mod settings;
pub mod shell;
pub mod storage;

#[cfg(target_arch = "wasm32")]
mod browser;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    browser::start();
}
