use crate::element::{self, Content, Element};
use crate::layout::Layout;
use crate::query::{self, Selector};

/// How a programmatic scroll moves: instantly or with eased motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMotion {
    #[default]
    Auto,
    Smooth,
}

/// The browser window as the page sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
    pub scroll_y: u16,
    /// Motion of the most recent programmatic scroll, if any.
    pub last_motion: Option<ScrollMotion>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            scroll_y: 0,
            last_motion: None,
        }
    }
}

/// A server-rendered page: the body tree plus viewport and layout state.
#[derive(Debug)]
pub struct Document {
    pub body: Element,
    pub viewport: Viewport,
    pub layout: Layout,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::new("body").id("body"))
    }
}

impl Document {
    pub fn new(body: Element) -> Self {
        Self {
            body,
            viewport: Viewport::default(),
            layout: Layout::default(),
        }
    }

    // Lookup

    pub fn find(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.body, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.body, id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        element::parent_of(&self.body, id)
    }

    /// The element immediately following the given one under the same parent.
    pub fn next_sibling(&self, id: &str) -> Option<&Element> {
        let parent = self.parent_of(id)?;
        if let Content::Children(children) = &parent.content {
            let pos = children.iter().position(|c| c.id == id)?;
            return children.get(pos + 1);
        }
        None
    }

    // Queries

    pub fn query(&self, selector: &Selector) -> Option<String> {
        self.query_all(selector).into_iter().next()
    }

    pub fn query_all(&self, selector: &Selector) -> Vec<String> {
        query::select_all(&self.body, selector)
    }

    /// Query restricted to the subtree rooted at `scope_id`.
    pub fn query_within(&self, scope_id: &str, selector: &Selector) -> Option<String> {
        self.query_all_within(scope_id, selector).into_iter().next()
    }

    pub fn query_all_within(&self, scope_id: &str, selector: &Selector) -> Vec<String> {
        match self.find(scope_id) {
            Some(scope) => query::select_all(scope, selector),
            None => Vec::new(),
        }
    }

    /// Does the element match the selector in the context of this page?
    pub fn matches(&self, id: &str, selector: &Selector) -> bool {
        query::matches_at(&self.body, id, selector)
    }

    // Mutation

    pub fn append_to_body(&mut self, child: Element) {
        append_child_to(&mut self.body, child);
    }

    /// Append a child under the element with the given ID.
    /// Returns false (and drops the child) when the parent is missing.
    pub fn append_child(&mut self, parent_id: &str, child: Element) -> bool {
        match self.find_mut(parent_id) {
            Some(parent) => {
                append_child_to(parent, child);
                true
            }
            None => false,
        }
    }

    /// Insert an element as the next sibling of the given one.
    pub fn insert_after(&mut self, id: &str, sibling: Element) -> bool {
        let Some(parent) = element::parent_of_mut(&mut self.body, id) else {
            return false;
        };
        if let Content::Children(children) = &mut parent.content {
            if let Some(pos) = children.iter().position(|c| c.id == id) {
                children.insert(pos + 1, sibling);
                return true;
            }
        }
        false
    }

    /// Detach the element with the given ID from the tree.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(parent) = element::parent_of_mut(&mut self.body, id) else {
            return false;
        };
        if let Content::Children(children) = &mut parent.content {
            let before = children.len();
            children.retain(|c| c.id != id);
            return children.len() < before;
        }
        false
    }

    // Scrolling

    pub fn scroll_to(&mut self, y: u16, motion: ScrollMotion) {
        self.viewport.scroll_y = y;
        self.viewport.last_motion = Some(motion);
    }

    /// Scroll the element's top edge into view. Returns false when the
    /// element has no rendered slot.
    pub fn scroll_to_element(&mut self, id: &str, motion: ScrollMotion) -> bool {
        let Some(slot) = self.layout.get(id) else {
            return false;
        };
        self.scroll_to(slot.top, motion);
        true
    }
}

fn append_child_to(parent: &mut Element, child: Element) {
    match &mut parent.content {
        Content::Children(children) => children.push(child),
        Content::None => parent.content = Content::Children(vec![child]),
        _ => parent.content = Content::Children(vec![child]),
    }
}
