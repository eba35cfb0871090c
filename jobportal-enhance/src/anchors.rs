//! Smooth scrolling for same-page anchor links.

use pagedom::{Document, EventFlow, EventKind, Page, QueryError, ScrollMotion};

const ANCHOR_LINK: &str = r##"a[href^="#"]"##;

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    page.on(EventKind::Click, ANCHOR_LINK, |page, event, flow| {
        if let Some(target) = event.target() {
            on_click(&mut page.document, target, flow);
        }
    })
}

/// If the fragment names an element on this page, suppress navigation
/// and scroll it into view with eased motion. Otherwise let the click
/// navigate normally.
pub fn on_click(document: &mut Document, anchor_id: &str, flow: &mut EventFlow) {
    let Some(fragment) = document
        .find(anchor_id)
        .and_then(|el| el.get_attr("href"))
        .and_then(|href| href.strip_prefix('#'))
        .map(str::to_string)
    else {
        return;
    };

    if document.find(&fragment).is_some() {
        flow.prevent_default();
        document.scroll_to_element(&fragment, ScrollMotion::Smooth);
    }
}
