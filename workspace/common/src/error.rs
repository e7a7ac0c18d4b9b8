use thiserror::Error;

/// Failure to parse one of the shared string-keyed enums.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}
