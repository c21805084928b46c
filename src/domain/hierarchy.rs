// Hierarchy domain model - nests flat panel/category/link rows into a tree
use super::category::Category;
use super::link::Link;
use super::panel::Panel;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelNode {
    #[serde(flatten)]
    pub panel: Panel,
    pub categories: Vec<CategoryNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    #[serde(flatten)]
    pub category: Category,
    pub links: Vec<Link>,
}

impl PanelNode {
    pub fn link_count(&self) -> usize {
        self.categories.iter().map(|c| c.links.len()).sum()
    }
}

/// Build the panel → category → link tree.
///
/// Every level is ordered by `(position, id)`. Rows whose parent is not in
/// the input are dropped.
pub fn build_hierarchy(
    mut panels: Vec<Panel>,
    categories: Vec<Category>,
    links: Vec<Link>,
) -> Vec<PanelNode> {
    panels.sort_by_key(|p| (p.position, p.id));

    let mut by_panel: HashMap<i64, Vec<CategoryNode>> = HashMap::new();
    for node in group_categories(categories, links) {
        by_panel.entry(node.category.panel_id).or_default().push(node);
    }

    panels
        .into_iter()
        .map(|panel| {
            let categories = by_panel.remove(&panel.id).unwrap_or_default();
            PanelNode { panel, categories }
        })
        .collect()
}

/// Attach links to their categories, ordered by `(position, id)` at both levels.
pub fn group_categories(mut categories: Vec<Category>, mut links: Vec<Link>) -> Vec<CategoryNode> {
    categories.sort_by_key(|c| (c.position, c.id));
    links.sort_by_key(|l| (l.position, l.id));

    let mut by_category: HashMap<i64, Vec<Link>> = HashMap::new();
    for link in links {
        by_category.entry(link.category_id).or_default().push(link);
    }

    categories
        .into_iter()
        .map(|category| {
            let links = by_category.remove(&category.id).unwrap_or_default();
            CategoryNode { category, links }
        })
        .collect()
}
