//! "Back to top" control, created at startup and toggled by scroll
//! position.

use pagedom::{
    Display, Document, Element, Event, EventKind, Page, QueryError, ScrollMotion, Style,
};

/// Scroll offsets past this show the control.
pub const SCROLL_THRESHOLD: u16 = 300;

pub const BUTTON_ID: &str = "back-to-top";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    let button = Element::button("\u{2191}")
        .id(BUTTON_ID)
        .class("btn")
        .class("btn-primary")
        .class("position-fixed")
        .style(Style::new().display(Display::None));
    page.document.append_to_body(button);

    page.on_window(EventKind::WindowScroll, |page, event, _flow| {
        if let Event::WindowScroll { y } = event {
            on_scroll(&mut page.document, *y);
        }
    });

    page.on(EventKind::Click, "#back-to-top", |page, _event, _flow| {
        page.document.scroll_to(0, ScrollMotion::Smooth);
    })
}

/// Toggle the control's visibility against the fixed threshold.
pub fn on_scroll(document: &mut Document, scroll_y: u16) {
    let display = if scroll_y > SCROLL_THRESHOLD {
        Display::Block
    } else {
        Display::None
    };
    if let Some(button) = document.find_mut(BUTTON_ID) {
        button.style.display = display;
    }
}
