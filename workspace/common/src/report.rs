use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// File prefix of a downloaded report.
pub const REPORT_FILE_PREFIX: &str = "energy_report";

/// Output formats the report endpoint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Csv,
    Xlsx,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Pdf, ReportFormat::Csv, ReportFormat::Xlsx];

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Csv => "csv",
            ReportFormat::Xlsx => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "application/pdf",
            ReportFormat::Csv => "text/csv",
            ReportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Label shown in the format picker.
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Csv => "CSV",
            ReportFormat::Xlsx => "Excel (XLSX)",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ReportFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ReportFormat::Pdf),
            "csv" => Ok(ReportFormat::Csv),
            "xlsx" => Ok(ReportFormat::Xlsx),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Body of `POST /reports/generate/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub metrics: Vec<String>,
    pub format: ReportFormat,
}

impl ReportRequest {
    /// Builds a request, dropping repeated metric names but keeping the
    /// order in which they were first selected.
    pub fn new<I, S>(start_date: NaiveDate, end_date: NaiveDate, metrics: I, format: ReportFormat) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for metric in metrics {
            let metric = metric.into();
            if !unique.contains(&metric) {
                unique.push(metric);
            }
        }

        Self {
            start_date,
            end_date,
            metrics: unique,
            format,
        }
    }

    /// Name the downloaded file is saved under.
    pub fn filename(&self) -> String {
        format!(
            "{}_{}_to_{}.{}",
            REPORT_FILE_PREFIX,
            self.start_date,
            self.end_date,
            self.format.extension()
        )
    }
}
