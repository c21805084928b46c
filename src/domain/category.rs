// Category domain model - a module of links inside a panel
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub panel_id: i64,
    pub position: i64,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub panel_id: i64,
    pub position: i64,
}

/// One entry of a category reorder batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CategoryPosition {
    pub id: i64,
    pub position: i64,
}
