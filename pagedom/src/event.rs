/// High-level page events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on an element (or a link activation).
    Click { target: String },
    /// A keystroke changed a form control's value.
    Input { target: String },
    /// A form control's value was committed (file picked, select chosen).
    Change { target: String },
    /// A form was submitted.
    Submit { target: String },
    /// Pointer moved onto an element.
    PointerEnter { target: String },
    /// Pointer left an element.
    PointerLeave { target: String },
    /// The window scrolled to the given vertical offset.
    WindowScroll { y: u16 },
    /// The window was resized to the given width.
    Resize { width: u16 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::Input { .. } => EventKind::Input,
            Event::Change { .. } => EventKind::Change,
            Event::Submit { .. } => EventKind::Submit,
            Event::PointerEnter { .. } => EventKind::PointerEnter,
            Event::PointerLeave { .. } => EventKind::PointerLeave,
            Event::WindowScroll { .. } => EventKind::WindowScroll,
            Event::Resize { .. } => EventKind::Resize,
        }
    }

    /// The targeted element, for element-scoped events.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Click { target }
            | Event::Input { target }
            | Event::Change { target }
            | Event::Submit { target }
            | Event::PointerEnter { target }
            | Event::PointerLeave { target } => Some(target),
            Event::WindowScroll { .. } | Event::Resize { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Change,
    Submit,
    PointerEnter,
    PointerLeave,
    WindowScroll,
    Resize,
}

/// Per-dispatch control surface handed to each listener.
#[derive(Debug, Default)]
pub struct EventFlow {
    default_prevented: bool,
    propagation_stopped: bool,
}

impl EventFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the event's default action (navigation, submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop later listeners from seeing this event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// What a dispatch did: whether any listener suppressed the default
/// action, and how many listeners ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    pub handlers_run: usize,
}
