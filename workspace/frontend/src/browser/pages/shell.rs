use std::cell::RefCell;
use std::rc::Rc;

use common::ids;
use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::browser::dom;
use crate::browser::storage::LocalStore;
use crate::error::Result;
use crate::shell::SidebarState;

struct ShellView {
    sidebar: Element,
    toggle: Element,
    main_content: Element,
}

impl ShellView {
    fn bind() -> Result<Self> {
        Ok(Self {
            sidebar: dom::element(ids::SIDEBAR)?,
            toggle: dom::element(ids::SIDEBAR_TOGGLE)?,
            main_content: dom::element(ids::MAIN_CONTENT)?,
        })
    }

    fn apply(&self, state: SidebarState) {
        let classes = state.classes();
        dom::set_class(&self.sidebar, ids::CLASS_SIDEBAR_CLOSED, classes.sidebar_closed);
        dom::set_class(&self.main_content, ids::CLASS_CONTENT_SIDEBAR_CLOSED, classes.content_sidebar_closed);
        dom::set_class(&self.toggle, ids::CLASS_TOGGLED, classes.toggle_toggled);
    }
}

/// Restore the sidebar while transitions are suppressed, then wire the toggle.
pub fn install(store: Rc<LocalStore>, preload_grace_ms: u32) -> Result<()> {
    let body = dom::body()?;
    dom::set_class(&body, ids::CLASS_PRELOAD, true);

    let view = ShellView::bind()?;
    let state = Rc::new(RefCell::new(SidebarState::load(&*store)));
    view.apply(*state.borrow());

    Timeout::new(preload_grace_ms, move || {
        dom::set_class(&body, ids::CLASS_PRELOAD, false);
        log::trace!("Removed preload class");
    })
    .forget();

    let toggle = view.toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let mut state = state.borrow_mut();
        state.toggle(&*store);
        view.apply(*state);
        log::debug!("Sidebar toggled, open: {}", state.open);
    })
}
