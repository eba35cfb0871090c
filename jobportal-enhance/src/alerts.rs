//! Auto-dismissal of alert banners.

use std::time::Duration;

use pagedom::{Page, QueryError, Selector};

const ALERT: &str = ".alert";

/// How long alerts stay up before the toolkit closes them.
pub const DISMISS_DELAY: Duration = Duration::from_secs(5);

pub fn install(page: &mut Page) -> Result<(), QueryError> {
    let alerts = Selector::parse(ALERT)?;
    page.scheduler.after(DISMISS_DELAY, move |page| {
        // Every alert present at fire time is closed, interacted-with or not.
        for id in page.document.query_all(&alerts) {
            page.widgets.close_alert(&mut page.document, &id);
        }
    });
    Ok(())
}
