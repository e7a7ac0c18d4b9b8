pub mod forecasting;
pub mod overview;
pub mod report;
pub mod shell;
