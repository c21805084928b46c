// Panel domain model - top level of the dashboard hierarchy
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub created_at: String,
}

/// Values needed to insert a panel; the position is decided by the caller
#[derive(Debug, Clone)]
pub struct NewPanel {
    pub name: String,
    pub position: i64,
}

impl NewPanel {
    pub fn new(name: impl Into<String>, position: i64) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}
