use crate::element::{visible_children, Element};
use crate::layout::LayoutResult;
use crate::types::Position;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    search(layout, root, x, y, &|e| e.clickable && !e.disabled)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    search(layout, root, x, y, &|_| true)
}

/// Find the focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    search(layout, root, x, y, &|e| e.focusable && !e.disabled)
}

/// IDs from `root` down to `target`, inclusive. Empty when `target` is
/// not in the tree.
pub fn ancestor_path(root: &Element, target: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, target, &mut path) {
        path.reverse();
    }
    path
}

fn collect_path(element: &Element, target: &str, path: &mut Vec<String>) -> bool {
    let found = element.id == target
        || element
            .child_slice()
            .iter()
            .any(|child| collect_path(child, target, path));
    if found {
        path.push(element.id.clone());
    }
    found
}

fn is_layer(element: &Element) -> bool {
    element.position == Position::Absolute || element.z_index > 0
}

/// Layers are painted over the flow, so they are tested first, topmost
/// layer first, before the flow below them.
fn search(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let mut layers = Vec::new();
    collect_layers(root, &mut layers);
    layers.sort_by_key(|e| e.z_index);

    layers
        .iter()
        .rev()
        .find_map(|layer| hit_layer(layout, layer, x, y, accept))
        .or_else(|| hit_layer(layout, root, x, y, accept))
}

fn collect_layers<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    for child in visible_children(element) {
        if is_layer(child) {
            out.push(child);
        }
        collect_layers(child, out);
    }
}

/// Depth-first hit test of one layer. Nested layers are skipped since they
/// are tested on their own.
fn hit_layer(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = layout.get(&element.id)?;
    let inside = rect.contains(x, y);

    // Children in reverse order (last painted = on top)
    for child in visible_children(element).iter().rev() {
        if is_layer(child) {
            continue;
        }
        if let Some(id) = hit_layer(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    (inside && accept(element)).then(|| element.id.clone())
}
