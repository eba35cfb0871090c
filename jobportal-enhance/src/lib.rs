//! Progressive enhancements for the job portal's server-rendered pages.
//!
//! Each module is one self-contained behavior: pure functions over the
//! document, registered as event listeners by [`enhance`]. Every
//! behavior checks that its target elements exist and silently no-ops
//! otherwise; nothing here reports errors to the user.

pub mod alerts;
pub mod anchors;
pub mod back_to_top;
pub mod badges;
pub mod cards;
pub mod confirm;
pub mod counters;
pub mod files;
pub mod forms;
pub mod nav;
pub mod password;
pub mod search;
pub mod textareas;
pub mod tooltips;

use pagedom::{Page, QueryError};

/// Wire up every page enhancement. Call once after the document is
/// ready; the initializer owns no state of its own.
pub fn enhance(page: &mut Page) -> Result<(), QueryError> {
    tooltips::install(page)?;
    anchors::install(page)?;
    alerts::install(page)?;
    forms::install(page)?;
    files::install(page)?;
    search::install(page)?;
    cards::install(page)?;
    badges::apply(&mut page.document)?;
    counters::install(page)?;
    nav::install(page)?;
    back_to_top::install(page)?;
    confirm::install(page)?;
    password::install(page)?;
    textareas::install(page)?;

    log::info!("job portal page enhancements installed");
    Ok(())
}
