//! Loading affordance on the job search form's submit button.

use pagedom::{Document, EventKind, Page, QueryError, Selector};

const SEARCH_FORM: &str = r#"form[action*="job_list"]"#;
const QUERY_INPUT: &str = r#"input[name="query"]"#;
const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;

pub const LOADING_LABEL: &str = "Searching...";
pub const LOADING_CLASS: &str = "loading";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    let form = Selector::parse(SEARCH_FORM)?;
    let query_input = Selector::parse(QUERY_INPUT)?;
    let submit_button = Selector::parse(SUBMIT_BUTTON)?;

    // One specific form, located by its action URL; only enhanced when
    // its named field and submit button are both present.
    let Some(form_id) = page.document.query(&form) else {
        return Ok(());
    };
    if page.document.query_within(&form_id, &query_input).is_none() {
        return Ok(());
    }
    let Some(button_id) = page.document.query_within(&form_id, &submit_button) else {
        return Ok(());
    };

    page.on(EventKind::Submit, SEARCH_FORM, move |page, _event, _flow| {
        on_submit(&mut page.document, &button_id);
    })
}

/// Swap the submit button for a loading state and disable it. There is
/// no re-enable path; submission navigates away.
pub fn on_submit(document: &mut Document, button_id: &str) {
    if let Some(button) = document.find_mut(button_id) {
        button.set_text(LOADING_LABEL);
        button.add_class(LOADING_CLASS);
        button.disabled = true;
    }
}
