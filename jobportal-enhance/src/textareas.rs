//! Auto-growing text areas.

use pagedom::{measure, Document, EventKind, Page, QueryError};

const TEXTAREA: &str = "textarea";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    page.on(EventKind::Input, TEXTAREA, |page, event, _flow| {
        if let Some(target) = event.target() {
            autosize(&mut page.document, target);
        }
    })
}

/// Grow the textarea to fit its content: wrap the current value at the
/// element's rendered width and set the inline height to the row count.
/// Without a rendered slot there is no width to wrap at, so no-op.
pub fn autosize(document: &mut Document, textarea_id: &str) {
    let Some(slot) = document.layout.get(textarea_id) else {
        return;
    };
    let Some(value) = document
        .find(textarea_id)
        .and_then(|el| el.current_value())
        .map(str::to_string)
    else {
        return;
    };

    let rows = measure::line_count(&value, usize::from(slot.width));
    if let Some(textarea) = document.find_mut(textarea_id) {
        textarea.style.height = Some(rows);
    }
}
