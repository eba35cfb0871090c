//! Validation gate for forms that opt in with the `needs-validation`
//! class. Unmarked forms submit unconditionally.

use pagedom::{element, Document, EventFlow, EventKind, Page, QueryError};

const VALIDATED_FORM: &str = "form.needs-validation";
const VALIDATED_CLASS: &str = "was-validated";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    page.on(EventKind::Submit, VALIDATED_FORM, |page, event, flow| {
        if let Some(target) = event.target() {
            on_submit(&mut page.document, target, flow);
        }
    })
}

/// Gate submission on the form's validity and flag it as validated so
/// the stylesheet can surface per-field feedback.
pub fn on_submit(document: &mut Document, form_id: &str, flow: &mut EventFlow) {
    if !check_validity(document, form_id) {
        flow.prevent_default();
        flow.stop_propagation();
    }
    if let Some(form) = document.find_mut(form_id) {
        form.add_class(VALIDATED_CLASS);
    }
}

/// Built-in validity: every required control holds a non-blank value,
/// and non-empty email controls contain an `@`.
pub fn check_validity(document: &Document, form_id: &str) -> bool {
    let Some(form) = document.find(form_id) else {
        return true;
    };

    let mut valid = true;
    element::visit(form, &mut |el| {
        let Some(value) = el.current_value() else {
            return;
        };
        if el.is_required() && value.trim().is_empty() {
            valid = false;
        }
        if el.input_type() == Some("email") && !value.is_empty() && !value.contains('@') {
            valid = false;
        }
    });
    valid
}
