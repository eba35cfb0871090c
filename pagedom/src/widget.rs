use crate::document::Document;

/// Widget kinds owned by the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Tooltip,
    Popover,
    Alert,
}

/// A toolkit widget instance bound to an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub kind: WidgetKind,
    pub target: String,
}

/// The UI toolkit's view of the page: which widgets exist and what they
/// are bound to. Instances live for the page lifetime unless dismissed.
#[derive(Debug, Default)]
pub struct WidgetSet {
    widgets: Vec<Widget>,
}

impl WidgetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate a widget on an element. Attaching twice creates two
    /// instances; the toolkit does not deduplicate.
    pub fn attach(&mut self, kind: WidgetKind, target: &str) {
        log::debug!("[widget] attaching {kind:?} to {target}");
        self.widgets.push(Widget {
            kind,
            target: target.to_string(),
        });
    }

    pub fn attached(&self, kind: WidgetKind, target: &str) -> bool {
        self.widgets
            .iter()
            .any(|w| w.kind == kind && w.target == target)
    }

    pub fn count(&self, kind: WidgetKind) -> usize {
        self.widgets.iter().filter(|w| w.kind == kind).count()
    }

    /// Dismiss an alert: drops any widget bound to the element and
    /// detaches the element itself, as the toolkit's close does.
    pub fn close_alert(&mut self, document: &mut Document, target: &str) -> bool {
        self.widgets
            .retain(|w| !(w.kind == WidgetKind::Alert && w.target == target));
        document.remove(target)
    }
}

/// Blocking yes/no prompt shown before destructive navigation.
/// The real page delegates this to the browser; tests script it.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Prompt that accepts everything (a headless page has no user to ask).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}
