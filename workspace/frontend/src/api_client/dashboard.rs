use common::DashboardOverview;

use super::{ApiClient, Transport};
use crate::error::Result;

pub const OVERVIEW_ENDPOINT: &str = "/dashboard/overview/";

pub async fn get_dashboard_overview<T: Transport>(client: &ApiClient<T>) -> Result<DashboardOverview> {
    log::trace!("Fetching dashboard overview");

    let result = client.get::<DashboardOverview>(OVERVIEW_ENDPOINT, &[]).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch dashboard overview: {}", e);
    } else {
        log::info!("Successfully fetched dashboard overview");
    }

    result
}
