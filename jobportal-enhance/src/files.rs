//! File-input preview: mirrors the selected file name into the
//! adjacent label.

use pagedom::{Document, EventKind, Page, QueryError};

const FILE_INPUT: &str = r#"input[type="file"]"#;

/// Label text when no file is selected.
pub const NO_FILE_CHOSEN: &str = "No file chosen";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    page.on(EventKind::Change, FILE_INPUT, |page, event, _flow| {
        if let Some(target) = event.target() {
            on_change(&mut page.document, target);
        }
    })
}

/// Write the first selected file's name (or the fallback) into the next
/// sibling, but only when that sibling is in fact a label.
pub fn on_change(document: &mut Document, input_id: &str) {
    let name = document
        .find(input_id)
        .and_then(|el| el.files().first().cloned())
        .unwrap_or_else(|| NO_FILE_CHOSEN.to_string());

    let label_id = match document.next_sibling(input_id) {
        Some(sibling) if sibling.tag == "label" => sibling.id.clone(),
        _ => return,
    };

    if let Some(label) = document.find_mut(&label_id) {
        label.set_text(name);
    }
}
