/// A selectable record. Widgets never mutate the options they are given.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
    pub disabled: bool,
    pub description: Option<String>,
    pub group: Option<String>,
}

impl SelectOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Visual order of `options`: ungrouped options first, in their original
/// order, then each group in order of first appearance.
pub fn display_order(options: &[SelectOption]) -> Vec<usize> {
    let mut groups: Vec<&str> = Vec::new();
    for option in options {
        if let Some(group) = option.group.as_deref()
            && !groups.contains(&group)
        {
            groups.push(group);
        }
    }

    let mut order: Vec<usize> = (0..options.len()).collect();
    // Stable, so options keep their relative order inside a group
    order.sort_by_key(|&i| group_rank(&groups, options[i].group.as_deref()));
    order
}

pub(crate) fn group_rank(groups: &[&str], group: Option<&str>) -> usize {
    match group {
        None => 0,
        Some(g) => groups.iter().position(|x| *x == g).map_or(0, |p| p + 1),
    }
}
