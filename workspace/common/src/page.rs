//! The four pages the server renders.
//!
//! The page key is written to `<body data-page="...">` and read back by the
//! frontend to decide which controller to bind.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    Forecasting,
    Comparison,
    Report,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Overview, Page::Forecasting, Page::Comparison, Page::Report];

    /// Value of the `data-page` attribute and the active-tab key.
    pub fn key(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Forecasting => "forecasting",
            Page::Comparison => "comparison",
            Page::Report => "report",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Overview",
            Page::Forecasting => "Forecasting",
            Page::Comparison => "Comparison",
            Page::Report => "Report",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Overview => "/",
            Page::Forecasting => "/forecasting",
            Page::Comparison => "/comparison",
            Page::Report => "/report",
        }
    }

    /// Font Awesome icon used in the sidebar.
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Overview => "fa-gauge-high",
            Page::Forecasting => "fa-chart-line",
            Page::Comparison => "fa-scale-balanced",
            Page::Report => "fa-file-export",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Page {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == s)
            .ok_or_else(|| ParseError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trips_through_from_str() {
        for page in Page::ALL {
            assert_eq!(page.key().parse::<Page>(), Ok(page));
        }
        assert!("settings".parse::<Page>().is_err());
    }
}
