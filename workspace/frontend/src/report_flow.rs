//! Report generation flow: form submission, progress, download, reset.

use std::time::Duration;

use common::ReportRequest;

use crate::error::{DashboardError, Result};
use crate::progress::{Milestone, ProgressAnimation};

pub const EMPTY_METRICS_MESSAGE: &str = "select at least one metric";
pub const INVERTED_RANGE_MESSAGE: &str = "start date must not be after end date";
pub const READY_MESSAGE: &str = "Your report is ready for download!";

/// Creates and revokes in-memory URLs for downloaded report bytes.
pub trait ObjectUrls {
    fn create(&mut self, bytes: &[u8], mime_type: &str) -> Result<String>;
    fn revoke(&mut self, url: &str);
}

/// A finished report bound to an object URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadHandle {
    pub url: String,
    pub filename: String,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportFlowState {
    Idle,
    Loading { percent: u8, message: &'static str },
    Success(DownloadHandle),
    Error(String),
}

/// Identifies one submission. Events carrying any other ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A request accepted by [`ReportFlow::submit`], to be sent by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: ReportRequest,
}

/// Everything the report page renders, derived from the flow state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub status_visible: bool,
    pub message: String,
    pub percent: u8,
    pub progress_visible: bool,
    pub download: Option<DownloadHandle>,
    pub submit_enabled: bool,
    pub reset_label: Option<&'static str>,
}

#[derive(Debug)]
struct InFlight {
    ticket: Ticket,
    request: ReportRequest,
    progress: ProgressAnimation,
    /// Body bound to its object URL, held back until the animation ends.
    finished: Option<DownloadHandle>,
}

/// State machine driving the report page.
///
/// The caller owns the clock and the network: it sends the request returned
/// by [`submit`](Self::submit), reports the milestones back, and calls
/// [`tick`](Self::tick) on every animation frame.
#[derive(Debug)]
pub struct ReportFlow<U> {
    urls: U,
    state: ReportFlowState,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl<U: ObjectUrls> ReportFlow<U> {
    pub fn new(urls: U) -> Self {
        Self {
            urls,
            state: ReportFlowState::Idle,
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn state(&self) -> &ReportFlowState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self.state, ReportFlowState::Loading { .. })
    }

    /// Accept a form submission.
    ///
    /// Returns the request to send, or an error when nothing should be sent:
    /// a submission is already loading, or the input is invalid (the flow
    /// then shows the validation message).
    pub fn submit(&mut self, request: ReportRequest, now: Duration) -> Result<Submission> {
        if !self.can_submit() {
            log::warn!("Report submission ignored, one is already in progress");
            return Err(DashboardError::validation("a report is already being generated"));
        }

        self.revoke_download();

        if let Err(error) = validate(&request) {
            log::debug!("Report request rejected: {}", error);
            self.state = ReportFlowState::Error(error.message());
            return Err(error);
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;

        let mut progress = ProgressAnimation::new();
        progress.reach(Milestone::Submitted, now);
        self.state = ReportFlowState::Loading {
            percent: progress.percent(),
            message: progress.message(),
        };
        self.in_flight = Some(InFlight {
            ticket,
            request: request.clone(),
            progress,
            finished: None,
        });

        log::info!(
            "Generating {} report for {} to {} ({} metrics)",
            request.format,
            request.start_date,
            request.end_date,
            request.metrics.len()
        );
        Ok(Submission { ticket, request })
    }

    /// Show an error for a submission that could not even be built, such as
    /// a form with an unreadable date. Ignored while loading.
    pub fn reject(&mut self, error: &DashboardError) {
        if !self.can_submit() {
            return;
        }
        self.revoke_download();
        log::debug!("Report form rejected: {}", error);
        self.state = ReportFlowState::Error(error.message());
    }

    /// The response head for `ticket` arrived.
    pub fn headers_received(&mut self, ticket: Ticket, now: Duration) {
        if let Some(flight) = self.current_flight(ticket) {
            flight.progress.reach(Milestone::HeadersReceived, now);
            self.tick(now);
        }
    }

    /// The request for `ticket` finished with the report bytes or an error.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<Vec<u8>>, now: Duration) {
        let Some(flight) = self.in_flight.as_mut().filter(|f| f.ticket == ticket) else {
            log::debug!("Ignoring response for stale report ticket {:?}", ticket);
            return;
        };

        let bound = outcome.and_then(|bytes| {
            let mime = flight.request.format.mime_type();
            let url = self.urls.create(&bytes, mime)?;
            Ok(DownloadHandle {
                url,
                filename: flight.request.filename(),
                size: bytes.len(),
            })
        });

        match bound {
            Ok(handle) => {
                log::debug!("Report body received ({} bytes)", handle.size);
                flight.progress.reach(Milestone::BodyReceived, now);
                flight.finished = Some(handle);
                self.tick(now);
            }
            Err(error) => {
                log::error!("Report generation failed: {}", error);
                self.in_flight = None;
                self.state = ReportFlowState::Error(error.message());
            }
        }
    }

    /// Advance the progress animation. Success is entered only once the bar
    /// has reached 100.
    pub fn tick(&mut self, now: Duration) {
        let Some(flight) = self.in_flight.as_mut() else {
            return;
        };

        let percent = flight.progress.advance(now);
        if flight.progress.is_complete() {
            if let Some(handle) = flight.finished.take() {
                log::info!("Report ready: {}", handle.filename);
                self.in_flight = None;
                self.state = ReportFlowState::Success(handle);
                return;
            }
        }

        self.state = ReportFlowState::Loading {
            percent,
            message: flight.progress.message(),
        };
    }

    /// Back to Idle from Success or Error ("generate another" / "try again").
    /// Does nothing while loading.
    pub fn reset(&mut self) {
        if !self.can_submit() {
            return;
        }
        self.revoke_download();
        self.state = ReportFlowState::Idle;
    }

    pub fn view(&self) -> ReportView {
        match &self.state {
            ReportFlowState::Idle => ReportView {
                status_visible: false,
                message: String::new(),
                percent: 0,
                progress_visible: false,
                download: None,
                submit_enabled: true,
                reset_label: None,
            },
            ReportFlowState::Loading { percent, message } => ReportView {
                status_visible: true,
                message: message.to_string(),
                percent: *percent,
                progress_visible: true,
                download: None,
                submit_enabled: false,
                reset_label: None,
            },
            ReportFlowState::Success(handle) => ReportView {
                status_visible: true,
                message: READY_MESSAGE.to_string(),
                percent: 100,
                progress_visible: true,
                download: Some(handle.clone()),
                submit_enabled: true,
                reset_label: Some("Generate another report"),
            },
            ReportFlowState::Error(message) => ReportView {
                status_visible: true,
                message: message.clone(),
                percent: 0,
                progress_visible: false,
                download: None,
                submit_enabled: true,
                reset_label: Some("Try again"),
            },
        }
    }

    pub fn urls(&self) -> &U {
        &self.urls
    }

    fn current_flight(&mut self, ticket: Ticket) -> Option<&mut InFlight> {
        let flight = self.in_flight.as_mut().filter(|f| f.ticket == ticket);
        if flight.is_none() {
            log::debug!("Ignoring event for stale report ticket {:?}", ticket);
        }
        flight
    }

    fn revoke_download(&mut self) {
        if let ReportFlowState::Success(handle) = &self.state {
            log::debug!("Revoking object URL for {}", handle.filename);
            self.urls.revoke(&handle.url);
        }
    }
}

fn validate(request: &ReportRequest) -> Result<()> {
    if request.metrics.is_empty() {
        return Err(DashboardError::validation(EMPTY_METRICS_MESSAGE));
    }
    if request.start_date > request.end_date {
        return Err(DashboardError::validation(INVERTED_RANGE_MESSAGE));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Object URL store that remembers which URLs are still alive.
    #[derive(Debug, Default)]
    pub struct MemoryObjectUrls {
        pub live: Vec<String>,
        pub created: usize,
        pub revoked: usize,
    }

    impl ObjectUrls for MemoryObjectUrls {
        fn create(&mut self, bytes: &[u8], mime_type: &str) -> Result<String> {
            self.created += 1;
            let url = format!("blob:test/{}?{}&{}", self.created, mime_type, bytes.len());
            self.live.push(url.clone());
            Ok(url)
        }

        fn revoke(&mut self, url: &str) {
            self.revoked += 1;
            self.live.retain(|live| live != url);
        }
    }
}
