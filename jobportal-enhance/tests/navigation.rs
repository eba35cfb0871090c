use std::cell::RefCell;
use std::rc::Rc;

use jobportal_enhance::{anchors, back_to_top, confirm, enhance, nav};
use pagedom::{ConfirmPrompt, Document, Element, Event, Page, ScrollMotion, Slot};

fn portal_page() -> Page {
    let body = Element::new("body")
        .id("body")
        .child(
            Element::new("nav")
                .id("navbar")
                .child(Element::button("☰").id("toggler").class("navbar-toggler"))
                .child(
                    Element::div()
                        .id("nav-menu")
                        .class("navbar-collapse")
                        .class("show")
                        .child(Element::anchor("/jobs/").id("nav-jobs").class("nav-link"))
                        .child(Element::anchor("#openings").id("nav-openings").class("nav-link")),
                ),
        )
        .child(Element::div().id("openings").class("section"))
        .child(Element::anchor("#missing-section").id("dead-anchor"))
        .child(Element::anchor("/jobs/5/delete/").id("delete-job"));

    let mut doc = Document::new(body);
    doc.layout.insert("openings", Slot::new(640, 1280, 400));
    Page::new(doc)
}

// ============================================================================
// Smooth anchor scrolling
// ============================================================================

#[test]
fn test_anchor_click_scrolls_target_into_view() {
    let mut page = portal_page();
    enhance(&mut page).unwrap();

    let outcome = page.dispatch(Event::Click {
        target: "nav-openings".into(),
    });
    assert!(outcome.default_prevented);
    assert_eq!(page.document.viewport.scroll_y, 640);
    assert_eq!(page.document.viewport.last_motion, Some(ScrollMotion::Smooth));
}

#[test]
fn test_anchor_without_target_navigates_normally() {
    let mut page = portal_page();
    anchors::install(&mut page).unwrap();

    let outcome = page.dispatch(Event::Click {
        target: "dead-anchor".into(),
    });
    assert!(!outcome.default_prevented);
    assert_eq!(page.document.viewport.scroll_y, 0);
    assert_eq!(page.document.viewport.last_motion, None);
}

#[test]
fn test_plain_links_are_not_intercepted() {
    let mut page = portal_page();
    anchors::install(&mut page).unwrap();

    let outcome = page.dispatch(Event::Click {
        target: "delete-job".into(),
    });
    assert!(!outcome.default_prevented);
}

// ============================================================================
// Back to top
// ============================================================================

#[test]
fn test_control_is_created_hidden() {
    let mut page = portal_page();
    back_to_top::install(&mut page).unwrap();

    let button = page.document.find(back_to_top::BUTTON_ID).unwrap();
    assert_eq!(button.tag, "button");
    assert!(button.style.is_hidden());
}

#[test]
fn test_visibility_follows_scroll_threshold() {
    let mut page = portal_page();
    back_to_top::install(&mut page).unwrap();

    page.dispatch(Event::WindowScroll { y: 301 });
    assert!(!page.document.find(back_to_top::BUTTON_ID).unwrap().style.is_hidden());

    // Exactly at the threshold stays hidden
    page.dispatch(Event::WindowScroll { y: 300 });
    assert!(page.document.find(back_to_top::BUTTON_ID).unwrap().style.is_hidden());
}

#[test]
fn test_click_scrolls_back_to_top_smoothly() {
    let mut page = portal_page();
    back_to_top::install(&mut page).unwrap();

    page.dispatch(Event::WindowScroll { y: 900 });
    page.dispatch(Event::Click {
        target: back_to_top::BUTTON_ID.into(),
    });
    assert_eq!(page.document.viewport.scroll_y, 0);
    assert_eq!(page.document.viewport.last_motion, Some(ScrollMotion::Smooth));
}

// ============================================================================
// Mobile nav auto-collapse
// ============================================================================

#[test]
fn test_nav_link_collapses_menu_on_mobile() {
    let mut page = portal_page();
    nav::install(&mut page).unwrap();

    page.dispatch(Event::Resize {
        width: nav::MOBILE_BREAKPOINT - 1,
    });
    page.dispatch(Event::Click {
        target: "nav-jobs".into(),
    });
    assert!(!page.document.find("nav-menu").unwrap().has_class("show"));
}

#[test]
fn test_nav_stays_expanded_on_desktop() {
    let mut page = portal_page();
    nav::install(&mut page).unwrap();

    page.dispatch(Event::Resize {
        width: nav::MOBILE_BREAKPOINT,
    });
    page.dispatch(Event::Click {
        target: "nav-jobs".into(),
    });
    assert!(page.document.find("nav-menu").unwrap().has_class("show"));
}

#[test]
fn test_pages_without_navbar_skip_the_behavior() {
    let body = Element::new("body")
        .id("body")
        .child(Element::anchor("/jobs/").id("link").class("nav-link"));
    let mut page = Page::new(Document::new(body));
    nav::install(&mut page).unwrap();

    assert_eq!(page.listener_count(), 0);
}

// ============================================================================
// Destructive-action confirmation
// ============================================================================

#[derive(Default)]
struct ScriptedPrompt {
    answer: bool,
    messages: Rc<RefCell<Vec<String>>>,
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.messages.borrow_mut().push(message.to_string());
        self.answer
    }
}

#[test]
fn test_declining_cancels_the_navigation() {
    let mut page = portal_page();
    confirm::install(&mut page).unwrap();
    let messages = Rc::new(RefCell::new(Vec::new()));
    page.set_confirm(ScriptedPrompt {
        answer: false,
        messages: Rc::clone(&messages),
    });

    let outcome = page.dispatch(Event::Click {
        target: "delete-job".into(),
    });
    assert!(outcome.default_prevented);
    assert_eq!(messages.borrow().as_slice(), [confirm::PROMPT]);
}

#[test]
fn test_accepting_lets_the_navigation_proceed() {
    let mut page = portal_page();
    confirm::install(&mut page).unwrap();
    page.set_confirm(ScriptedPrompt {
        answer: true,
        messages: Rc::default(),
    });

    let outcome = page.dispatch(Event::Click {
        target: "delete-job".into(),
    });
    assert!(!outcome.default_prevented);
}

#[test]
fn test_non_delete_links_are_not_gated() {
    let mut page = portal_page();
    confirm::install(&mut page).unwrap();
    page.set_confirm(ScriptedPrompt {
        answer: false,
        messages: Rc::default(),
    });

    let outcome = page.dispatch(Event::Click {
        target: "nav-jobs".into(),
    });
    assert!(!outcome.default_prevented);
}
