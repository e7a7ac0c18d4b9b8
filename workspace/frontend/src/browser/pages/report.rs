use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;

use chrono::NaiveDate;
use common::{ids, ReportFormat, ReportRequest};
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, FormData, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement,
};

use crate::api_client::report::generate_report;
use crate::browser::blob::BrowserObjectUrls;
use crate::browser::dom;
use crate::browser::Client;
use crate::error::{DashboardError, Result};
use crate::report_flow::{ReportFlow, ReportFlowState, ReportView};

struct ReportElements {
    form: HtmlFormElement,
    start_date: HtmlInputElement,
    end_date: HtmlInputElement,
    format: HtmlSelectElement,
    submit: HtmlButtonElement,
    status_area: HtmlElement,
    status_message: Element,
    progress_bar: HtmlElement,
    progress_value: Element,
    download: HtmlAnchorElement,
    reset: HtmlButtonElement,
}

impl ReportElements {
    fn bind() -> Result<Self> {
        dom::element::<Element>(ids::METRICS_GRID)?;
        Ok(Self {
            form: dom::element(ids::REPORT_FORM)?,
            start_date: dom::element(ids::START_DATE_INPUT)?,
            end_date: dom::element(ids::END_DATE_INPUT)?,
            format: dom::element(ids::FORMAT_SELECT)?,
            submit: dom::element(ids::SUBMIT_BUTTON)?,
            status_area: dom::element(ids::STATUS_AREA)?,
            status_message: dom::element(ids::STATUS_MESSAGE)?,
            progress_bar: dom::element(ids::PROGRESS_BAR)?,
            progress_value: dom::element(ids::PROGRESS_VALUE)?,
            download: dom::element(ids::DOWNLOAD_LINK)?,
            reset: dom::element(ids::RESET_BUTTON)?,
        })
    }

    /// Read the form into a request.
    fn read_request(&self) -> Result<ReportRequest> {
        let form_data = FormData::new_with_form(&self.form).map_err(dom::js_error)?;
        let metrics: Vec<String> = form_data
            .get_all(ids::METRICS_FIELD)
            .iter()
            .filter_map(|value| value.as_string())
            .collect();

        let start_date = parse_date(&self.start_date.value())?;
        let end_date = parse_date(&self.end_date.value())?;
        let format = ReportFormat::from_str(&self.format.value())
            .map_err(|e| DashboardError::validation(e.to_string()))?;

        Ok(ReportRequest::new(start_date, end_date, metrics, format))
    }

    fn render(&self, view: &ReportView) {
        self.status_area.set_hidden(!view.status_visible);
        dom::set_text(&self.status_message, &view.message);

        self.progress_bar.set_hidden(!view.progress_visible);
        if let Err(e) = self
            .progress_bar
            .set_attribute("style", &format!("width: {}%", view.percent))
        {
            log::warn!("Could not size progress bar: {:?}", e);
        }
        dom::set_text(&self.progress_value, &format!("{}%", view.percent));

        match &view.download {
            Some(handle) => {
                self.download.set_href(&handle.url);
                self.download.set_download(&handle.filename);
                dom::set_class(&self.download, ids::CLASS_DISABLED, false);
            }
            None => {
                for attribute in ["href", "download"] {
                    if let Err(e) = self.download.remove_attribute(attribute) {
                        log::warn!("Could not clear download {}: {:?}", attribute, e);
                    }
                }
                dom::set_class(&self.download, ids::CLASS_DISABLED, true);
            }
        }

        self.submit.set_disabled(!view.submit_enabled);

        match view.reset_label {
            Some(label) => {
                self.reset.set_hidden(false);
                dom::set_text(&self.reset, label);
            }
            None => self.reset.set_hidden(true),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DashboardError::validation("choose a start and end date"))
}

struct ReportPage {
    flow: ReportFlow<BrowserObjectUrls>,
    elements: ReportElements,
}

impl ReportPage {
    fn render(&self) {
        self.elements.render(&self.flow.view());
    }
}

type Shared = Rc<RefCell<ReportPage>>;

/// Drive the progress animation until the flow leaves Loading.
fn schedule_tick(page: Shared, tick_ms: u32) {
    Timeout::new(tick_ms, move || {
        let loading = {
            let mut current = page.borrow_mut();
            current.flow.tick(dom::now());
            current.render();
            matches!(current.flow.state(), ReportFlowState::Loading { .. })
        };
        if loading {
            schedule_tick(page, tick_ms);
        }
    })
    .forget();
}

fn submit(page: &Shared, client: &Client, tick_ms: u32) {
    let submission = {
        let mut current = page.borrow_mut();
        let accepted = match current.elements.read_request() {
            Ok(request) => current.flow.submit(request, dom::now()),
            Err(e) => {
                current.flow.reject(&e);
                Err(e)
            }
        };
        current.render();
        match accepted {
            Ok(submission) => submission,
            Err(e) => {
                log::debug!("Report not submitted: {}", e);
                return;
            }
        }
    };

    schedule_tick(page.clone(), tick_ms);

    let page = page.clone();
    let client = client.clone();
    spawn_local(async move {
        let ticket = submission.ticket;
        let mut on_headers = {
            let page = page.clone();
            move |status: u16| {
                log::trace!("Report response head received ({})", status);
                let mut current = page.borrow_mut();
                current.flow.headers_received(ticket, dom::now());
                current.render();
            }
        };

        let outcome = generate_report(&*client, &submission.request, &mut on_headers).await;

        let mut current = page.borrow_mut();
        current.flow.complete(ticket, outcome, dom::now());
        current.render();
    });
}

pub fn start(client: Client, tick_ms: u32) -> Result<()> {
    let elements = ReportElements::bind()?;
    let form = elements.form.clone();
    let reset = elements.reset.clone();

    let page: Shared = Rc::new(RefCell::new(ReportPage {
        flow: ReportFlow::new(BrowserObjectUrls),
        elements,
    }));
    page.borrow().render();

    {
        let page = page.clone();
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            submit(&page, &client, tick_ms);
        })?;
    }

    {
        let page = page.clone();
        let form = form.clone();
        dom::listen(&reset, "click", move |_| {
            let mut current = page.borrow_mut();
            let clear_form = matches!(current.flow.state(), ReportFlowState::Success(_));
            current.flow.reset();
            if clear_form {
                form.reset();
            }
            current.render();
        })?;
    }

    Ok(())
}
