//! Mobile navigation auto-collapse.

use pagedom::{Document, EventKind, Page, QueryError, Selector};

const NAV_TOGGLER: &str = ".navbar-toggler";
const NAV_COLLAPSE: &str = ".navbar-collapse";
const NAV_LINK: &str = ".navbar-collapse .nav-link";

/// Viewport widths below this are treated as mobile.
pub const MOBILE_BREAKPOINT: u16 = 992;

const EXPANDED_CLASS: &str = "show";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    let toggler = Selector::parse(NAV_TOGGLER)?;
    let collapse = Selector::parse(NAV_COLLAPSE)?;

    // Only pages with a collapsible navbar get the behavior.
    if page.document.query(&toggler).is_none() || page.document.query(&collapse).is_none() {
        return Ok(());
    }

    page.on(EventKind::Click, NAV_LINK, move |page, _event, _flow| {
        collapse_if_mobile(&mut page.document, &collapse);
    })
}

/// Following a nav link on a small screen closes the expanded menu.
pub fn collapse_if_mobile(document: &mut Document, collapse: &Selector) {
    if document.viewport.width >= MOBILE_BREAKPOINT {
        return;
    }
    for id in document.query_all(collapse) {
        if let Some(container) = document.find_mut(&id) {
            container.remove_class(EXPANDED_CLASS);
        }
    }
}
