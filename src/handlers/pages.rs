use axum::{extract::State, http::{StatusCode, Uri}};
use common::Page;
use maud::Markup;
use tracing::{debug, instrument};

use crate::schemas::AppState;
use crate::views::{self, PageContext, layout::shell};

fn render(state: &AppState, page: Page, content: Markup) -> Markup {
    let ctx = PageContext::for_page(page, state.config.api_base_url());
    shell(&ctx, content)
}

/// Campus overview: KPI cards and the three summary charts
#[instrument(skip(state))]
pub async fn overview(State(state): State<AppState>) -> Markup {
    render(&state, Page::Overview, views::overview::content())
}

/// Forecast chart with horizon selector and campus map
#[instrument(skip(state))]
pub async fn forecasting(State(state): State<AppState>) -> Markup {
    render(&state, Page::Forecasting, views::forecasting::content())
}

#[instrument(skip(state))]
pub async fn comparison(State(state): State<AppState>) -> Markup {
    render(&state, Page::Comparison, views::comparison::content())
}

/// Report generation form
#[instrument(skip(state))]
pub async fn report(State(state): State<AppState>) -> Markup {
    render(&state, Page::Report, views::report::content())
}

#[instrument(skip(state))]
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> (StatusCode, Markup) {
    debug!("No page at {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        views::not_found_page(uri.path(), state.config.api_base_url()),
    )
}
