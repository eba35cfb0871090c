/// CSS `display` subset: the enhancements only ever toggle visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

/// Inline style subset touched by the enhancements.
///
/// `height` is `None` for "auto"; `translate_y` is a vertical offset in
/// pixels, negative values lift the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub display: Display,
    pub translate_y: i16,
    pub height: Option<u16>,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            display: Display::Block,
            translate_y: 0,
            height: None,
        }
    }

    pub const fn display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }

    pub const fn translate_y(mut self, offset: i16) -> Self {
        self.translate_y = offset;
        self
    }

    pub const fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Display::None
    }
}
