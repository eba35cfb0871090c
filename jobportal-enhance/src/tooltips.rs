//! Toolkit widget activation for tooltip and popover trigger elements.

use pagedom::{Document, Page, QueryError, Selector, WidgetKind, WidgetSet};

const TOOLTIP_TRIGGER: &str = r#"[data-toggle="tooltip"]"#;
const POPOVER_TRIGGER: &str = r#"[data-toggle="popover"]"#;

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    activate(&page.document, &mut page.widgets)
}

/// Instantiate a toolkit widget on every flagged trigger element.
/// Re-invocation double-initializes; the toolkit does not guard.
pub fn activate(document: &Document, widgets: &mut WidgetSet) -> Result<(), QueryError> {
    let tooltips = Selector::parse(TOOLTIP_TRIGGER)?;
    for id in document.query_all(&tooltips) {
        widgets.attach(WidgetKind::Tooltip, &id);
    }

    let popovers = Selector::parse(POPOVER_TRIGGER)?;
    for id in document.query_all(&popovers) {
        widgets.attach(WidgetKind::Popover, &id);
    }

    Ok(())
}
