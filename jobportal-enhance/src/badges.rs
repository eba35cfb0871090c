//! Colorization of application status badges.
//!
//! The status is communicated structurally via `data-status` where the
//! templates render it; badges without the attribute fall back to
//! matching the rendered text, which keeps older templates working.

use pagedom::{Document, QueryError, Selector};

const BADGE: &str = ".badge";

/// The closed set of application statuses the portal renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Shortlisted,
    Accepted,
    Rejected,
    Reviewed,
}

impl Status {
    /// Parse the structural `data-status` value.
    pub fn from_data(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Status::Pending),
            "shortlisted" => Some(Status::Shortlisted),
            "accepted" => Some(Status::Accepted),
            "rejected" => Some(Status::Rejected),
            "reviewed" => Some(Status::Reviewed),
            _ => None,
        }
    }

    /// Legacy fallback: case-sensitive substring match on the rendered
    /// text, first branch wins.
    pub fn from_text(text: &str) -> Option<Self> {
        if text.contains("Pending") {
            Some(Status::Pending)
        } else if text.contains("Shortlisted") {
            Some(Status::Shortlisted)
        } else if text.contains("Accepted") {
            Some(Status::Accepted)
        } else if text.contains("Rejected") {
            Some(Status::Rejected)
        } else if text.contains("Reviewed") {
            Some(Status::Reviewed)
        } else {
            None
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            Status::Pending => "bg-warning",
            Status::Shortlisted | Status::Accepted => "bg-success",
            Status::Rejected => "bg-danger",
            Status::Reviewed => "bg-info",
        }
    }
}

/// Append the status color class to every badge whose status can be
/// determined. Badges with no recognizable status are left alone.
pub fn apply(document: &mut Document) -> Result<(), QueryError> {
    let badges = Selector::parse(BADGE)?;
    for id in document.query_all(&badges) {
        let status = document.find(&id).and_then(|badge| {
            badge
                .get_attr("data-status")
                .and_then(Status::from_data)
                .or_else(|| badge.text_content().and_then(Status::from_text))
        });
        if let Some(status) = status {
            if let Some(badge) = document.find_mut(&id) {
                badge.add_class(status.color_class());
            }
        }
    }
    Ok(())
}
