//! Confirmation gate on destructive links.

use pagedom::{EventKind, Page, QueryError};

const DELETE_LINK: &str = r#"a[href*="delete"]"#;

pub const PROMPT: &str = "Are you sure you want to delete this item?";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    page.on(EventKind::Click, DELETE_LINK, |page, _event, flow| {
        if !page.confirm(PROMPT) {
            flow.prevent_default();
        }
    })
}
