use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Content, InputValue};
use crate::style::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the server-rendered page tree.
///
/// Mirrors the markup contract the enhancements consume: a tag name,
/// class list, attribute map, inline style and content. Ids are
/// auto-generated so every node is addressable even when the markup
/// never named it.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup surface
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    // Content
    pub content: Content,

    // Presentation
    pub style: Style,

    // State
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".into(),
            classes: Vec::new(),
            attrs: HashMap::new(),
            content: Content::None,
            style: Style::default(),
            disabled: false,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            ..Self::new("button")
        }
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn form(action: impl Into<String>) -> Self {
        Self::new("form").attr("action", action)
    }

    /// Create an input of the given type (`text`, `password`, `file`, ...).
    pub fn input(kind: impl Into<String>) -> Self {
        Self {
            content: Content::Input(InputValue::default()),
            ..Self::new("input")
        }
        .attr("type", kind)
    }

    pub fn textarea() -> Self {
        Self {
            content: Content::Input(InputValue::default()),
            ..Self::new("textarea")
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new("label")
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Set a `data-*` attribute (the key is given without the prefix).
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Boolean `required` attribute, as rendered on form controls.
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn is_required(&self) -> bool {
        self.attrs.contains_key("required")
    }

    pub fn input_type(&self) -> Option<&str> {
        self.get_attr("type")
    }

    // Content
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        self.content = Content::Text(content.into());
    }

    // Form-control value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        match &mut self.content {
            Content::Input(input) => input.value = value.into(),
            _ => self.content = Content::Input(InputValue::text(value)),
        }
        self
    }

    pub fn current_value(&self) -> Option<&str> {
        match &self.content {
            Content::Input(input) => Some(&input.value),
            _ => None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        if let Content::Input(input) = &mut self.content {
            input.value = value.into();
        }
    }

    /// Selected file names, for file inputs. Empty for everything else.
    pub fn files(&self) -> &[String] {
        match &self.content {
            Content::Input(input) => &input.files,
            _ => &[],
        }
    }

    pub fn set_files(&mut self, files: Vec<String>) {
        if let Content::Input(input) = &mut self.content {
            input.files = files;
        }
    }

    // Presentation
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }
}
