use thiserror::Error;

use crate::element::{Content, Element};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
}

/// Attribute condition inside a compound step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
    StartsWith { key: String, value: String },
    Contains { key: String, value: String },
}

impl AttrCondition {
    fn matches(&self, element: &Element) -> bool {
        match self {
            AttrCondition::Exists { key } => element.attrs.contains_key(key),
            AttrCondition::Eq { key, value } => element.get_attr(key) == Some(value),
            AttrCondition::StartsWith { key, value } => element
                .get_attr(key)
                .is_some_and(|attr| attr.starts_with(value)),
            AttrCondition::Contains { key, value } => element
                .get_attr(key)
                .is_some_and(|attr| attr.contains(value.as_str())),
        }
    }
}

/// One compound step: `input.form-control[type="file"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrCondition>,
}

impl Step {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if element.tag != *tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id != *id {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|cond| cond.matches(element))
    }
}

/// A parsed selector: descendant-combined compound steps, the last one
/// being the subject. Only the subset the markup contract needs is
/// supported; anything else is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, QueryError> {
        let selector = selector.trim();
        if selector.is_empty() {
            return Err(QueryError::UnsupportedSelector(selector.into()));
        }

        let mut steps = Vec::new();
        for token in selector.split_whitespace() {
            if matches!(token, ">" | "+" | "~") {
                // Only the descendant combinator is supported.
                return Err(QueryError::UnsupportedSelector(selector.into()));
            }
            steps.push(parse_step(token, selector)?);
        }

        Ok(Self { steps })
    }

    /// Match the subject step against an element with no ancestor context.
    /// Only valid for single-step selectors; multi-step selectors never
    /// match without ancestors.
    pub fn matches(&self, element: &Element) -> bool {
        self.matches_with_ancestors(element, &[])
    }

    /// Match against an element given its ancestor chain, ordered from
    /// the tree root down to the element's parent.
    pub fn matches_with_ancestors(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((subject, rest)) = self.steps.split_last() else {
            return false;
        };
        if !subject.matches(element) {
            return false;
        }

        // Each remaining step must match some ancestor, preserving order.
        let mut idx = ancestors.len();
        for step in rest.iter().rev() {
            let mut found = false;
            while idx > 0 {
                idx -= 1;
                if step.matches(ancestors[idx]) {
                    found = true;
                    break;
                }
            }
            if !found {
                return false;
            }
        }
        true
    }
}

fn parse_step(token: &str, selector: &str) -> Result<Step, QueryError> {
    let unsupported = || QueryError::UnsupportedSelector(selector.into());
    let mut step = Step::default();
    let mut chars = token.chars().peekable();

    // Leading tag name
    let mut tag = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' {
            tag.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if !tag.is_empty() {
        step.tag = Some(tag);
    }

    while let Some(c) = chars.next() {
        match c {
            '#' => {
                let name = read_name(&mut chars);
                if name.is_empty() || step.id.is_some() {
                    return Err(unsupported());
                }
                step.id = Some(name);
            }
            '.' => {
                let name = read_name(&mut chars);
                if name.is_empty() {
                    return Err(unsupported());
                }
                step.classes.push(name);
            }
            '[' => {
                let key = read_name(&mut chars);
                if key.is_empty() {
                    return Err(unsupported());
                }
                match chars.next() {
                    Some(']') => step.attrs.push(AttrCondition::Exists { key }),
                    Some(op @ ('=' | '^' | '*')) => {
                        if op != '=' && chars.next() != Some('=') {
                            return Err(unsupported());
                        }
                        let value = read_attr_value(&mut chars).ok_or_else(unsupported)?;
                        step.attrs.push(match op {
                            '=' => AttrCondition::Eq { key, value },
                            '^' => AttrCondition::StartsWith { key, value },
                            _ => AttrCondition::Contains { key, value },
                        });
                    }
                    _ => return Err(unsupported()),
                }
            }
            _ => return Err(unsupported()),
        }
    }

    if step == Step::default() {
        return Err(unsupported());
    }
    Ok(step)
}

fn read_name(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}

fn read_attr_value(chars: &mut std::iter::Peekable<std::str::Chars>) -> Option<String> {
    let quote = match chars.peek() {
        Some(&q @ ('"' | '\'')) => {
            chars.next();
            Some(q)
        }
        _ => None,
    };

    let mut value = String::new();
    loop {
        let c = chars.next()?;
        match quote {
            Some(q) if c == q => {
                // Closing quote must be followed by ']'
                return match chars.next() {
                    Some(']') => Some(value),
                    _ => None,
                };
            }
            None if c == ']' => return Some(value),
            _ => value.push(c),
        }
    }
}

/// Collect the IDs of all elements in the subtree matching the selector,
/// in document order. Ancestor context starts at `root`, so descendant
/// steps only see the subtree.
pub fn select_all(root: &Element, selector: &Selector) -> Vec<String> {
    let mut out = Vec::new();
    let mut ancestors = Vec::new();
    collect_matches(root, selector, &mut ancestors, &mut out);
    out
}

fn collect_matches<'a>(
    element: &'a Element,
    selector: &Selector,
    ancestors: &mut Vec<&'a Element>,
    out: &mut Vec<String>,
) {
    if selector.matches_with_ancestors(element, ancestors) {
        out.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        ancestors.push(element);
        for child in children {
            collect_matches(child, selector, ancestors, out);
        }
        ancestors.pop();
    }
}

/// Does the element with the given ID match the selector in the context
/// of the tree rooted at `root`?
pub fn matches_at(root: &Element, id: &str, selector: &Selector) -> bool {
    let mut ancestors = Vec::new();
    match locate(root, id, &mut ancestors) {
        Some(element) => selector.matches_with_ancestors(element, &ancestors),
        None => false,
    }
}

fn locate<'a>(
    element: &'a Element,
    id: &str,
    ancestors: &mut Vec<&'a Element>,
) -> Option<&'a Element> {
    if element.id == id {
        return Some(element);
    }
    if let Content::Children(children) = &element.content {
        ancestors.push(element);
        for child in children {
            if let Some(found) = locate(child, id, ancestors) {
                return Some(found);
            }
        }
        ancestors.pop();
    }
    None
}
