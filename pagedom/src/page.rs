use crate::document::Document;
use crate::event::{DispatchOutcome, Event, EventFlow, EventKind};
use crate::query::{QueryError, Selector};
use crate::schedule::Scheduler;
use crate::widget::{AlwaysConfirm, ConfirmPrompt, WidgetSet};

pub type Handler = Box<dyn FnMut(&mut Page, &Event, &mut EventFlow)>;

struct Listener {
    kind: EventKind,
    /// None for window-level listeners (scroll, resize).
    selector: Option<Selector>,
    handler: Handler,
}

/// A live page: the document plus everything wired to it at load time.
/// The listener table is the only routing state; behaviors themselves
/// keep no state between events.
pub struct Page {
    pub document: Document,
    pub widgets: WidgetSet,
    pub scheduler: Scheduler,
    listeners: Vec<Listener>,
    confirm: Box<dyn ConfirmPrompt>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            widgets: WidgetSet::new(),
            scheduler: Scheduler::new(),
            listeners: Vec::new(),
            confirm: Box::new(AlwaysConfirm),
        }
    }

    /// Replace the confirmation prompt (tests script it).
    pub fn set_confirm(&mut self, prompt: impl ConfirmPrompt + 'static) {
        self.confirm = Box::new(prompt);
    }

    /// Show a blocking yes/no prompt.
    pub fn confirm(&mut self, message: &str) -> bool {
        self.confirm.confirm(message)
    }

    /// Register a listener for events whose target matches the selector.
    pub fn on(
        &mut self,
        kind: EventKind,
        selector: &str,
        handler: impl FnMut(&mut Page, &Event, &mut EventFlow) + 'static,
    ) -> Result<(), QueryError> {
        let selector = Selector::parse(selector)?;
        self.listeners.push(Listener {
            kind,
            selector: Some(selector),
            handler: Box::new(handler),
        });
        Ok(())
    }

    /// Register a window-level listener (scroll, resize).
    pub fn on_window(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&mut Page, &Event, &mut EventFlow) + 'static,
    ) {
        self.listeners.push(Listener {
            kind,
            selector: None,
            handler: Box::new(handler),
        });
    }

    /// Run every registered listener matching the event, in registration
    /// order. Listeners whose target is no longer in the tree are
    /// skipped silently.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        // Window-level events enrich the viewport before listeners run.
        match &event {
            Event::WindowScroll { y } => self.document.viewport.scroll_y = *y,
            Event::Resize { width } => self.document.viewport.width = *width,
            _ => {}
        }

        let mut flow = EventFlow::new();
        let mut handlers_run = 0;
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            if listener.kind != event.kind() {
                continue;
            }
            let applies = match (&listener.selector, event.target()) {
                (Some(selector), Some(target)) => self.document.matches(target, selector),
                (None, _) => true,
                (Some(_), None) => false,
            };
            if !applies {
                continue;
            }
            (listener.handler)(self, &event, &mut flow);
            handlers_run += 1;
            if flow.propagation_stopped() {
                break;
            }
        }
        // Keep listeners registered while dispatching.
        let added = std::mem::take(&mut self.listeners);
        self.listeners = listeners;
        self.listeners.extend(added);

        let outcome = DispatchOutcome {
            default_prevented: flow.default_prevented(),
            handlers_run,
        };
        log::debug!(
            "[dispatch] {:?}: {} listener(s) ran, default_prevented={}",
            event.kind(),
            handlers_run,
            outcome.default_prevented
        );
        outcome
    }

    /// Advance all scheduled work by one [`crate::schedule::TICK`].
    pub fn tick(&mut self) {
        let mut scheduler = std::mem::take(&mut self.scheduler);
        scheduler.tick(self);
        // Timer actions may have scheduled fresh work on the page.
        scheduler.absorb(std::mem::take(&mut self.scheduler));
        self.scheduler = scheduler;
    }

    pub fn run_ticks(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
