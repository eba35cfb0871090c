mod content;
mod node;

pub use content::{Content, InputValue};
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Mutable lookup by ID.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the parent of the element with the given ID.
pub fn parent_of<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if let Content::Children(children) = &root.content {
        for child in children {
            if child.id == id {
                return Some(root);
            }
            if let Some(found) = parent_of(child, id) {
                return Some(found);
            }
        }
    }

    None
}

pub fn parent_of_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    let is_parent = match &root.content {
        Content::Children(children) => children.iter().any(|c| c.id == id),
        _ => false,
    };
    if is_parent {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = parent_of_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Visit the element and all its descendants in document order.
pub fn visit<'a>(root: &'a Element, f: &mut impl FnMut(&'a Element)) {
    f(root);
    if let Content::Children(children) = &root.content {
        for child in children {
            visit(child, f);
        }
    }
}
