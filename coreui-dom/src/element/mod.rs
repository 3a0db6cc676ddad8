mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_slice()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID and return a mutable reference.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    match &mut root.content {
        Content::Children(children) | Content::Frames { children, .. } => children
            .iter_mut()
            .find_map(|child| find_element_mut(child, id)),
        _ => None,
    }
}

/// Children taking part in layout, paint and hit testing. Frames
/// contribute only the current frame.
pub fn visible_children(element: &Element) -> &[Element] {
    match &element.content {
        Content::Children(children) => children,
        Content::Frames { children, interval } => {
            let idx = Content::frame_index(children.len(), *interval);
            children.get(idx..=idx).unwrap_or(&[])
        }
        Content::None | Content::Text(_) | Content::Fill(_) => &[],
    }
}

/// True when any element in the tree animates (frames content).
pub fn has_animation(root: &Element) -> bool {
    match &root.content {
        Content::Frames { .. } => true,
        Content::Children(children) => children.iter().any(has_animation),
        _ => false,
    }
}

/// Collect the concatenated text of an element and its descendants in
/// document order. Handy for asserting on built widgets.
pub fn text_content(root: &Element) -> String {
    let mut out = String::new();
    collect_text(root, &mut out);
    out
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => children.iter().for_each(|c| collect_text(c, out)),
        Content::Frames { children, .. } => {
            if let Some(first) = children.first() {
                collect_text(first, out);
            }
        }
        Content::None | Content::Fill(_) => {}
    }
}
