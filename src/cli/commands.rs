pub mod check_config;
pub mod serve;

pub use check_config::check_config;
pub use serve::{ServeOverrides, serve};
