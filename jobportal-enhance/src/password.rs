//! Live password strength meter.

use pagedom::{Document, Element, EventKind, Page, QueryError, Selector};

const PASSWORD_INPUT: &str = r#"input[type="password"]"#;

/// Class carried by the rendered indicator, also used to find and
/// remove the previous one.
pub const INDICATOR_CLASS: &str = "password-strength";

/// 0-5 count of satisfied complexity criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Strength(pub u8);

impl Strength {
    /// Score one point per independent criterion: length of at least 8,
    /// a lowercase letter, an uppercase letter, a digit, a symbol.
    pub fn of(password: &str) -> Self {
        let mut score = 0;
        if password.chars().count() >= 8 {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        }
        if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            score += 1;
        }
        Self(score)
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 | 1 => "Very Weak",
            2 => "Weak",
            3 => "Medium",
            4 => "Strong",
            _ => "Very Strong",
        }
    }

    pub fn color_class(self) -> &'static str {
        match self.0 {
            0 | 1 => "text-danger",
            2 => "text-warning",
            3 => "text-info",
            _ => "text-success",
        }
    }
}

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    let indicator = Selector::parse(&format!(".{INDICATOR_CLASS}"))?;
    page.on(EventKind::Input, PASSWORD_INPUT, move |page, event, _flow| {
        if let Some(target) = event.target() {
            on_input(&mut page.document, target, &indicator);
        }
    })
}

/// Recompute the score for the field's current value, drop any previous
/// indicator next to it and insert a fresh one right after the field.
pub fn on_input(document: &mut Document, input_id: &str, indicator: &Selector) {
    let Some(password) = document
        .find(input_id)
        .and_then(|el| el.current_value())
        .map(str::to_string)
    else {
        return;
    };
    let strength = Strength::of(&password);

    let Some(parent_id) = document.parent_of(input_id).map(|el| el.id.clone()) else {
        return;
    };
    for stale in document.query_all_within(&parent_id, indicator) {
        document.remove(&stale);
    }

    document.insert_after(input_id, render(strength));
}

/// Render the indicator element shown below the field.
pub fn render(strength: Strength) -> Element {
    Element::div()
        .class(INDICATOR_CLASS)
        .class("mt-2")
        .child(
            Element::new("small")
                .class(strength.color_class())
                .text(format!("Password strength: {}", strength.label())),
        )
}
