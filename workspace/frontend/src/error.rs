use thiserror::Error;

/// Every failure the dashboard can surface to the user.
///
/// An absent or empty chart dataset is not an error: renderers simply skip
/// drawing, so there is no variant for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Network failure or non-success response from the forecasting API.
    #[error("{0}")]
    Remote(String),

    /// The user's input cannot be submitted as is.
    #[error("{0}")]
    Validation(String),

    /// A required element is missing from the server-rendered page.
    #[error("Missing page element: #{0}")]
    MissingElement(String),

    /// A browser API call threw.
    #[error("Browser error: {0}")]
    Browser(String),
}

impl DashboardError {
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text shown to the user for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
