use common::ReportRequest;

use super::{ApiClient, Transport};
use crate::error::Result;

pub const GENERATE_REPORT_ENDPOINT: &str = "/reports/generate/";

/// Ask the API to build a report; the response body is the file itself.
pub async fn generate_report<T: Transport>(
    client: &ApiClient<T>,
    request: &ReportRequest,
    on_headers: &mut dyn FnMut(u16),
) -> Result<Vec<u8>> {
    log::debug!(
        "Generating {} report for {} metric(s), {} to {}",
        request.format,
        request.metrics.len(),
        request.start_date,
        request.end_date
    );

    client
        .post_for_bytes(GENERATE_REPORT_ENDPOINT, request, on_headers)
        .await
}
