// Hierarchy service - Read side of the dashboard
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::errors::Result;
use crate::domain::hierarchy::{build_hierarchy, group_categories, CategoryNode, PanelNode};
use std::sync::Arc;

#[derive(Clone)]
pub struct HierarchyService {
    repository: Arc<dyn DashboardRepository>,
}

impl HierarchyService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Panels with nested categories and links
    pub async fn get_hierarchy(&self) -> Result<Vec<PanelNode>> {
        let panels = self.repository.list_panels().await?;
        let categories = self.repository.list_categories().await?;
        let links = self.repository.list_links().await?;
        Ok(build_hierarchy(panels, categories, links))
    }

    /// Every category with its links, regardless of panel
    pub async fn list_categories(&self) -> Result<Vec<CategoryNode>> {
        let categories = self.repository.list_categories().await?;
        let links = self.repository.list_links().await?;
        Ok(group_categories(categories, links))
    }
}
