pub mod document;
pub mod element;
pub mod event;
pub mod layout;
pub mod measure;
pub mod page;
pub mod query;
pub mod schedule;
pub mod style;
pub mod widget;

pub use document::{Document, ScrollMotion, Viewport};
pub use element::{find_element, find_element_mut, parent_of, Content, Element, InputValue};
pub use event::{DispatchOutcome, Event, EventFlow, EventKind};
pub use layout::{Layout, Slot};
pub use page::Page;
pub use query::{QueryError, Selector};
pub use schedule::{Scheduler, COUNTER_STEPS, TICK};
pub use style::{Display, Style};
pub use widget::{AlwaysConfirm, ConfirmPrompt, WidgetKind, WidgetSet};
