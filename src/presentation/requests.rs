// Request bodies accepted by the JSON API
use crate::application::link_service::LinkEdit;
use crate::domain::category::CategoryPosition;
use crate::domain::link::LinkPlacement;
use serde::Deserialize;

// Required fields are optional here so that a missing field reaches the
// service and comes back as a 400 with an `error` body.

#[derive(Debug, Deserialize)]
pub struct CreatePanelRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
    pub panel_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    pub name: Option<String>,
    pub url: Option<String>,
    pub category_id: Option<i64>,
}

impl From<UpdateLinkRequest> for LinkEdit {
    fn from(req: UpdateLinkRequest) -> Self {
        LinkEdit {
            name: req.name,
            url: req.url,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReorderCategoriesRequest {
    pub items: Vec<CategoryPosition>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderLinksRequest {
    pub items: Vec<LinkPlacement>,
}
