use pagedom::{Document, Element, QueryError, Selector};

fn sample_page() -> Document {
    let body = Element::new("body")
        .id("body")
        .child(
            Element::form("/jobs/job_list/")
                .id("search-form")
                .child(Element::input("text").id("query-input").attr("name", "query"))
                .child(Element::button("Search").id("search-btn").attr("type", "submit")),
        )
        .child(
            Element::div()
                .id("stats")
                .class("stats-card")
                .child(Element::new("h3").id("stat-jobs").text("120")),
        )
        .child(Element::anchor("#jobs").id("jobs-link").class("nav-link"))
        .child(Element::anchor("/jobs/5/delete/").id("delete-link"));
    Document::new(body)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_rejects_unsupported() {
    assert!(matches!(
        Selector::parse(""),
        Err(QueryError::UnsupportedSelector(_))
    ));
    assert!(matches!(
        Selector::parse("div > span"),
        Err(QueryError::UnsupportedSelector(_))
    ));
    assert!(matches!(
        Selector::parse("a:hover"),
        Err(QueryError::UnsupportedSelector(_))
    ));
    assert!(matches!(
        Selector::parse("[unterminated"),
        Err(QueryError::UnsupportedSelector(_))
    ));
}

#[test]
fn test_parse_accepts_markup_contract() {
    for selector in [
        "div",
        ".badge",
        "#back-to-top",
        "form.needs-validation",
        r#"[data-toggle="tooltip"]"#,
        r#"input[type="file"]"#,
        r##"a[href^="#"]"##,
        r#"a[href*="delete"]"#,
        ".stats-card h3",
        ".navbar-collapse .nav-link",
        r#"input[name="query"]"#,
    ] {
        assert!(Selector::parse(selector).is_ok(), "rejected: {selector}");
    }
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_tag_class_and_id_matching() {
    let doc = sample_page();

    let forms = Selector::parse("form").unwrap();
    assert_eq!(doc.query_all(&forms), vec!["search-form"]);

    let stats = Selector::parse(".stats-card").unwrap();
    assert_eq!(doc.query_all(&stats), vec!["stats"]);

    let by_id = Selector::parse("#delete-link").unwrap();
    assert_eq!(doc.query_all(&by_id), vec!["delete-link"]);

    let missing = Selector::parse(".no-such-class").unwrap();
    assert!(doc.query_all(&missing).is_empty());
}

#[test]
fn test_attribute_conditions() {
    let doc = sample_page();

    let exists = Selector::parse("[name]").unwrap();
    assert_eq!(doc.query_all(&exists), vec!["query-input"]);

    let eq = Selector::parse(r#"input[name="query"]"#).unwrap();
    assert_eq!(doc.query_all(&eq), vec!["query-input"]);

    let prefix = Selector::parse(r##"a[href^="#"]"##).unwrap();
    assert_eq!(doc.query_all(&prefix), vec!["jobs-link"]);

    let contains = Selector::parse(r#"a[href*="delete"]"#).unwrap();
    assert_eq!(doc.query_all(&contains), vec!["delete-link"]);

    let contains_action = Selector::parse(r#"form[action*="job_list"]"#).unwrap();
    assert_eq!(doc.query_all(&contains_action), vec!["search-form"]);
}

#[test]
fn test_descendant_combinator() {
    let doc = sample_page();

    let stat_numbers = Selector::parse(".stats-card h3").unwrap();
    assert_eq!(doc.query_all(&stat_numbers), vec!["stat-jobs"]);

    // The h3 exists but not under a form
    let misplaced = Selector::parse("form h3").unwrap();
    assert!(doc.query_all(&misplaced).is_empty());
}

#[test]
fn test_document_order_and_first_match() {
    let body = Element::new("body")
        .id("body")
        .child(Element::span().id("badge-1").class("badge"))
        .child(
            Element::div()
                .id("wrap")
                .child(Element::span().id("badge-2").class("badge")),
        )
        .child(Element::span().id("badge-3").class("badge"));
    let doc = Document::new(body);

    let badges = Selector::parse(".badge").unwrap();
    assert_eq!(doc.query_all(&badges), vec!["badge-1", "badge-2", "badge-3"]);
    assert_eq!(doc.query(&badges), Some("badge-1".to_string()));
}

#[test]
fn test_scoped_queries() {
    let doc = sample_page();

    let buttons = Selector::parse(r#"button[type="submit"]"#).unwrap();
    assert_eq!(
        doc.query_within("search-form", &buttons),
        Some("search-btn".to_string())
    );
    assert_eq!(doc.query_within("stats", &buttons), None);
    assert_eq!(doc.query_within("no-such-scope", &buttons), None);
}

#[test]
fn test_matches_in_context() {
    let doc = sample_page();

    let scoped = Selector::parse(".stats-card h3").unwrap();
    assert!(doc.matches("stat-jobs", &scoped));
    assert!(!doc.matches("search-btn", &scoped));
    assert!(!doc.matches("missing-id", &scoped));
}
