//! Server-rendered pages. Every page shares the shell in [`layout`]; the
//! element ids the frontend binds to come from `common::ids`.

pub mod comparison;
pub mod forecasting;
pub mod layout;
pub mod overview;
pub mod report;

pub use layout::{not_found_page, PageContext};
