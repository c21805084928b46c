// Panel service - Create and delete top-level panels
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::errors::{
    next_position, required_text, DashboardError, RepositoryError, Result,
};
use crate::domain::panel::{NewPanel, Panel};
use std::sync::Arc;

#[derive(Clone)]
pub struct PanelService {
    repository: Arc<dyn DashboardRepository>,
}

impl PanelService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Append a new panel after every existing one
    pub async fn create_panel(&self, name: Option<&str>) -> Result<Panel> {
        let name =
            required_text(name).ok_or_else(|| DashboardError::validation("Name is required"))?;

        let position = next_position(self.repository.max_panel_position().await?)?;
        let panel = self
            .repository
            .insert_panel(NewPanel::new(name, position))
            .await
            .map_err(|e| match e {
                RepositoryError::Unique => {
                    DashboardError::Conflict(format!("A panel named '{}' already exists", name))
                }
                other => other.into(),
            })?;

        tracing::info!(
            "Created panel {} '{}' at position {}",
            panel.id,
            panel.name,
            panel.position
        );
        Ok(panel)
    }

    /// Delete a panel with its categories and links. Unknown ids are a no-op.
    pub async fn delete_panel(&self, id: i64) -> Result<()> {
        let removed = self.repository.delete_panel(id).await?;
        tracing::info!("Deleted panel {} ({} row(s))", id, removed);
        Ok(())
    }
}
