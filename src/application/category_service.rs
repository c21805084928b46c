// Category service - Create and delete categories inside a panel
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::errors::{
    next_position, required_text, DashboardError, RepositoryError, Result,
};
use crate::domain::category::{Category, NewCategory};
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryService {
    repository: Arc<dyn DashboardRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Append a category at the end of its panel
    pub async fn create_category(
        &self,
        name: Option<&str>,
        panel_id: Option<i64>,
    ) -> Result<Category> {
        let (Some(name), Some(panel_id)) = (required_text(name), panel_id) else {
            return Err(DashboardError::validation("name and panelId are required"));
        };

        let position = next_position(self.repository.max_category_position(panel_id).await?)?;
        let category = self
            .repository
            .insert_category(NewCategory {
                name: name.to_string(),
                panel_id,
                position,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKey => {
                    DashboardError::Validation(format!("panel {} does not exist", panel_id))
                }
                other => other.into(),
            })?;

        tracing::info!(
            "Created category {} '{}' in panel {} at position {}",
            category.id,
            category.name,
            category.panel_id,
            category.position
        );
        Ok(category)
    }

    /// Delete a category with its links. Unknown ids are a no-op.
    pub async fn delete_category(&self, id: i64) -> Result<()> {
        let removed = self.repository.delete_category(id).await?;
        tracing::info!("Deleted category {} ({} row(s))", id, removed);
        Ok(())
    }
}
