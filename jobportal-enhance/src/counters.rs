//! Animated dashboard statistics.

use pagedom::{Page, QueryError, Selector};

const STAT_NUMBER: &str = ".stats-card h3";

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    let stats = Selector::parse(STAT_NUMBER)?;
    for id in page.document.query_all(&stats) {
        let Some(final_value) = page
            .document
            .find(&id)
            .and_then(|el| el.text_content())
            .and_then(parse_leading_int)
        else {
            continue;
        };
        page.scheduler.animate_counter(&id, final_value);
    }
    Ok(())
}

/// Leading-integer parse: optional sign, then digits, ignoring any
/// trailing text ("120+" parses as 120).
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse().ok()
}
