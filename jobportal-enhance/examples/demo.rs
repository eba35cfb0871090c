//! Walks a sample job portal page through the full enhancement pass:
//! init-time behaviors, a few user interactions and enough scheduler
//! ticks to finish the counter animations and dismiss the alerts.
//!
//! Run with: cargo run --example demo

use jobportal_enhance::enhance;
use pagedom::{Document, Element, Event, Page, Slot, COUNTER_STEPS};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn sample_page() -> Page {
    let body = Element::new("body")
        .id("body")
        .child(
            Element::div()
                .id("flash")
                .class("alert")
                .text("Application submitted!"),
        )
        .child(
            Element::form("/jobs/job_list/")
                .id("search-form")
                .child(Element::input("text").id("query").attr("name", "query"))
                .child(Element::button("Search").id("search-btn").attr("type", "submit")),
        )
        .child(
            Element::div()
                .id("stats")
                .class("stats-card")
                .child(Element::new("h3").id("stat-jobs").text("120")),
        )
        .child(
            Element::span()
                .id("status")
                .class("badge")
                .data("status", "pending")
                .text("Pending Review"),
        )
        .child(Element::anchor("#stats").id("stats-link"))
        .child(Element::input("password").id("password"));

    let mut doc = Document::new(body);
    doc.layout.insert("stats", Slot::new(900, 1280, 200));
    Page::new(doc)
}

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let mut page = sample_page();
    enhance(&mut page).expect("static selectors must parse");

    // The badge was colorized at init
    let badge = page.document.find("status").unwrap();
    println!("badge classes: {:?}", badge.classes);

    // Smooth-scroll to the stats section
    page.dispatch(Event::Click {
        target: "stats-link".into(),
    });
    println!("scrolled to y={}", page.document.viewport.scroll_y);

    // Type a password and read the meter
    page.document
        .find_mut("password")
        .unwrap()
        .set_value("Abc123!@");
    page.dispatch(Event::Input {
        target: "password".into(),
    });
    if let Some(indicator) = page.document.next_sibling("password") {
        println!("strength indicator: {:?}", indicator.content);
    }

    // Let the counters finish and the alert dismiss (5 s = 167 ticks)
    page.run_ticks(COUNTER_STEPS + 2);
    println!(
        "stat after animation: {:?}",
        page.document.find("stat-jobs").unwrap().text_content()
    );
    page.run_ticks(200);
    println!("alert present: {}", page.document.find("flash").is_some());
}
