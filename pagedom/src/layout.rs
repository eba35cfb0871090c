use std::collections::HashMap;

/// Rendered geometry of one element: vertical offset from the top of
/// the page plus its box size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Slot {
    pub top: u16,
    pub width: u16,
    pub height: u16,
}

impl Slot {
    pub fn new(top: u16, width: u16, height: u16) -> Self {
        Self { top, width, height }
    }
}

/// Element geometry as produced by whatever rendered the page.
/// The enhancements only read it; tests and fixtures fill it in.
#[derive(Debug, Default)]
pub struct Layout {
    slots: HashMap<String, Slot>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, slot: Slot) {
        self.slots.insert(id.into(), slot);
    }

    pub fn get(&self, id: &str) -> Option<Slot> {
        self.slots.get(id).copied()
    }
}
