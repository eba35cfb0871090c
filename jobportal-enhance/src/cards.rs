//! Hover lift on job cards.

use pagedom::{Document, EventKind, Page, QueryError};

const JOB_CARD: &str = ".job-card";

/// Vertical offset while hovered, in pixels (negative lifts the card).
pub const HOVER_LIFT: i16 = -5;

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    page.on(EventKind::PointerEnter, JOB_CARD, |page, event, _flow| {
        if let Some(target) = event.target() {
            set_lift(&mut page.document, target, HOVER_LIFT);
        }
    })?;
    page.on(EventKind::PointerLeave, JOB_CARD, |page, event, _flow| {
        if let Some(target) = event.target() {
            set_lift(&mut page.document, target, 0);
        }
    })
}

pub fn set_lift(document: &mut Document, card_id: &str, offset: i16) {
    if let Some(card) = document.find_mut(card_id) {
        card.style.translate_y = offset;
    }
}
