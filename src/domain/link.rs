// Link domain model - a bookmarked URL inside a category
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub favicon: Option<String>,
    pub category_id: i64,
    pub position: i64,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct NewLink {
    pub name: String,
    pub url: String,
    pub favicon: Option<String>,
    pub category_id: i64,
    pub position: i64,
}

/// Partial edit of a link. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkChanges {
    pub name: Option<String>,
    pub url: Option<String>,
    pub favicon: Option<String>,
    pub category_id: Option<i64>,
    pub position: Option<i64>,
}

impl LinkChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One entry of a link reorder batch. Carries the parent so links can move
/// between categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPlacement {
    pub id: i64,
    pub category_id: i64,
    pub position: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_changes_is_empty() {
        assert!(LinkChanges::default().is_empty());

        let changes = LinkChanges {
            name: Some("Docs".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_link_placement_reads_camel_case() {
        let placement: LinkPlacement =
            serde_json::from_str(r#"{"id":4,"categoryId":2,"position":0}"#).unwrap();
        assert_eq!(
            placement,
            LinkPlacement {
                id: 4,
                category_id: 2,
                position: 0
            }
        );
    }
}
