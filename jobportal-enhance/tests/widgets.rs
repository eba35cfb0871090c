use jobportal_enhance::{alerts, badges, tooltips};
use pagedom::{Document, Element, Page, Selector, WidgetKind};

// ============================================================================
// Tooltip / popover activation
// ============================================================================

fn dashboard_page() -> Page {
    let body = Element::new("body")
        .id("body")
        .child(Element::span().id("help-icon").data("toggle", "tooltip"))
        .child(Element::span().id("info-icon").data("toggle", "tooltip"))
        .child(Element::button("Details").id("details-btn").data("toggle", "popover"))
        .child(Element::div().id("save-notice").class("alert"))
        .child(Element::div().id("error-notice").class("alert"));
    Page::new(Document::new(body))
}

#[test]
fn test_flagged_triggers_get_widgets() {
    let mut page = dashboard_page();
    tooltips::install(&mut page).unwrap();

    assert!(page.widgets.attached(WidgetKind::Tooltip, "help-icon"));
    assert!(page.widgets.attached(WidgetKind::Tooltip, "info-icon"));
    assert!(page.widgets.attached(WidgetKind::Popover, "details-btn"));
    assert_eq!(page.widgets.count(WidgetKind::Tooltip), 2);
    assert_eq!(page.widgets.count(WidgetKind::Popover), 1);
}

#[test]
fn test_reactivation_double_initializes() {
    let mut page = dashboard_page();
    tooltips::install(&mut page).unwrap();
    tooltips::install(&mut page).unwrap();

    // The toolkit does not guard against double initialization
    assert_eq!(page.widgets.count(WidgetKind::Tooltip), 4);
}

#[test]
fn test_unflagged_elements_get_no_widget() {
    let mut page = dashboard_page();
    tooltips::install(&mut page).unwrap();

    assert!(!page.widgets.attached(WidgetKind::Tooltip, "save-notice"));
    assert!(!page.widgets.attached(WidgetKind::Popover, "help-icon"));
}

// ============================================================================
// Alert auto-dismiss
// ============================================================================

#[test]
fn test_alerts_close_after_five_seconds() {
    let mut page = dashboard_page();
    alerts::install(&mut page).unwrap();

    // 5000 ms at 30 ms per tick: still present one tick early
    page.run_ticks(166);
    assert!(page.document.find("save-notice").is_some());

    page.tick();
    assert!(page.document.find("save-notice").is_none());
    assert!(page.document.find("error-notice").is_none());
}

#[test]
fn test_alerts_dismissed_regardless_of_interaction() {
    let mut page = dashboard_page();
    alerts::install(&mut page).unwrap();

    // A user "reading" an alert does not keep it open
    page.document.find_mut("error-notice").unwrap().add_class("hovered");
    page.run_ticks(167);
    assert!(page.document.find("error-notice").is_none());
}

#[test]
fn test_pages_without_alerts_are_untouched() {
    let body = Element::new("body").id("body").child(Element::div().id("content"));
    let mut page = Page::new(Document::new(body));
    alerts::install(&mut page).unwrap();

    page.run_ticks(170);
    assert!(page.document.find("content").is_some());
}

// ============================================================================
// Status badge colorization
// ============================================================================

fn badge(id: &str, text: &str) -> Element {
    Element::span().id(id).class("badge").text(text)
}

#[test]
fn test_status_text_maps_to_color_classes() {
    let body = Element::new("body")
        .id("body")
        .child(badge("b-pending", "Pending Review"))
        .child(badge("b-shortlisted", "Shortlisted"))
        .child(badge("b-accepted", "Accepted"))
        .child(badge("b-rejected", "Rejected"))
        .child(badge("b-reviewed", "Reviewed"));
    let mut doc = Document::new(body);
    badges::apply(&mut doc).unwrap();

    assert!(doc.find("b-pending").unwrap().has_class("bg-warning"));
    assert!(doc.find("b-shortlisted").unwrap().has_class("bg-success"));
    assert!(doc.find("b-accepted").unwrap().has_class("bg-success"));
    assert!(doc.find("b-rejected").unwrap().has_class("bg-danger"));
    assert!(doc.find("b-reviewed").unwrap().has_class("bg-info"));
}

#[test]
fn test_data_status_wins_over_rendered_text() {
    // Localized text no longer carries the status; the attribute does
    let body = Element::new("body").id("body").child(
        Element::span()
            .id("b-localized")
            .class("badge")
            .data("status", "rejected")
            .text("Abgelehnt"),
    );
    let mut doc = Document::new(body);
    badges::apply(&mut doc).unwrap();

    assert!(doc.find("b-localized").unwrap().has_class("bg-danger"));
}

#[test]
fn test_unknown_status_gets_no_color() {
    let body = Element::new("body")
        .id("body")
        .child(badge("b-other", "On Hold"))
        .child(badge("b-lowercase", "pending review"));
    let mut doc = Document::new(body);
    badges::apply(&mut doc).unwrap();

    for id in ["b-other", "b-lowercase"] {
        let classes = &doc.find(id).unwrap().classes;
        assert!(
            classes.iter().all(|c| !c.starts_with("bg-")),
            "{id} unexpectedly colorized: {classes:?}"
        );
    }
}

#[test]
fn test_first_matching_keyword_wins() {
    let body = Element::new("body")
        .id("body")
        .child(badge("b-both", "Pending (was Rejected)"));
    let mut doc = Document::new(body);
    badges::apply(&mut doc).unwrap();

    let badge = doc.find("b-both").unwrap();
    assert!(badge.has_class("bg-warning"));
    assert!(!badge.has_class("bg-danger"));
}

#[test]
fn test_status_parsing_tables() {
    use badges::Status;

    assert_eq!(Status::from_data("pending"), Some(Status::Pending));
    assert_eq!(Status::from_data("Pending"), None);
    assert_eq!(Status::from_text("Shortlisted for interview"), Some(Status::Shortlisted));
    assert_eq!(Status::from_text("nothing relevant"), None);
    assert_eq!(Status::Reviewed.color_class(), "bg-info");
}
