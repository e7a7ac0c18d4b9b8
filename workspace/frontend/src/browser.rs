mod blob;
mod dom;
mod pages;
mod plotly;
mod storage;
mod transport;

use std::rc::Rc;
use std::str::FromStr;

use common::Page;

use crate::api_client::ApiClient;
use crate::settings::AppSettings;
use storage::LocalStore;
use transport::FetchTransport;

pub(crate) type Client = Rc<ApiClient<FetchTransport>>;

/// Resolve settings, start logging and bind the controller of the page the
/// server rendered.
pub fn start() {
    let store = Rc::new(LocalStore::open());
    let hostname = dom::window().ok().and_then(|w| w.location().hostname().ok());
    let body = dom::body().ok();
    let api_base = body.as_ref().and_then(|b| b.get_attribute("data-api-base"));

    let app_settings = AppSettings::resolve(hostname.as_deref(), api_base.as_deref(), &*store);
    wasm_logger::init(wasm_logger::Config::new(app_settings.log_level));

    log::info!("=== Energy Dashboard Frontend Starting ===");
    log::info!("Application settings: {:?}", app_settings);

    if let Err(e) = pages::shell::install(store, app_settings.preload_grace_ms) {
        log::error!("Failed to bind page shell: {}", e);
    }

    let Some(page) = body
        .and_then(|b| b.get_attribute("data-page"))
        .and_then(|key| Page::from_str(&key).ok())
    else {
        log::warn!("Page does not declare a known data-page, nothing to bind");
        return;
    };

    let client: Client = Rc::new(ApiClient::new(app_settings.api_base_url.clone(), FetchTransport));
    log::debug!("Binding {} page", page);

    let result = match page {
        Page::Overview => pages::overview::start(client),
        Page::Forecasting => pages::forecasting::start(client),
        Page::Report => pages::report::start(client, app_settings.progress_tick_ms),
        Page::Comparison => Ok(()),
    };

    match result {
        Ok(()) => log::info!("{} page initialized", page),
        Err(e) => log::error!("Failed to initialize {} page: {}", page, e),
    }
}
