// Reorder service - Bulk position updates driven by drag and drop
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::errors::{DashboardError, RepositoryError, Result};
use crate::domain::category::CategoryPosition;
use crate::domain::link::LinkPlacement;
use std::sync::Arc;

/// Applies client-computed orderings. Each batch is atomic, last write wins
/// between batches, and sibling completeness is the caller's responsibility.
#[derive(Clone)]
pub struct ReorderService {
    repository: Arc<dyn DashboardRepository>,
}

impl ReorderService {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    pub async fn reorder_categories(&self, items: &[CategoryPosition]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.repository.reorder_categories(items).await?;
        tracing::debug!("Reordered {} categories", items.len());
        Ok(())
    }

    /// Reassign position and parent category of each link
    pub async fn reorder_links(&self, items: &[LinkPlacement]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.repository
            .reorder_links(items)
            .await
            .map_err(|e| match e {
                RepositoryError::ForeignKey => DashboardError::validation(
                    "reorder references a category that does not exist",
                ),
                other => other.into(),
            })?;
        tracing::debug!("Reordered {} links", items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::memory_repository;
    use crate::domain::category::NewCategory;
    use crate::domain::link::NewLink;
    use crate::domain::panel::NewPanel;

    async fn category(
        repository: &Arc<dyn DashboardRepository>,
        panel_id: i64,
        name: &str,
        position: i64,
    ) -> i64 {
        repository
            .insert_category(NewCategory {
                name: name.to_string(),
                panel_id,
                position,
            })
            .await
            .unwrap()
            .id
    }

    async fn link(
        repository: &Arc<dyn DashboardRepository>,
        category_id: i64,
        name: &str,
        position: i64,
    ) -> i64 {
        repository
            .insert_link(NewLink {
                name: name.to_string(),
                url: format!("https://{name}.example.com"),
                favicon: None,
                category_id,
                position,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_reorder_categories_swaps_display_order() {
        let repository = memory_repository();
        let panel = repository.insert_panel(NewPanel::new("Work", 0)).await.unwrap();
        let a = category(&repository, panel.id, "A", 0).await;
        let b = category(&repository, panel.id, "B", 1).await;
        let service = ReorderService::new(repository.clone());

        service
            .reorder_categories(&[
                CategoryPosition { id: a, position: 1 },
                CategoryPosition { id: b, position: 0 },
            ])
            .await
            .unwrap();

        let order: Vec<i64> = repository
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(order, vec![b, a]);
    }

    #[tokio::test]
    async fn test_reorder_links_moves_across_categories() {
        let repository = memory_repository();
        let panel = repository.insert_panel(NewPanel::new("Work", 0)).await.unwrap();
        let source = category(&repository, panel.id, "Source", 0).await;
        let target = category(&repository, panel.id, "Target", 1).await;
        let moving = link(&repository, source, "moving", 0).await;
        let staying = link(&repository, source, "staying", 1).await;
        let resident = link(&repository, target, "resident", 0).await;
        let service = ReorderService::new(repository.clone());

        service
            .reorder_links(&[
                LinkPlacement { id: staying, category_id: source, position: 0 },
                LinkPlacement { id: resident, category_id: target, position: 0 },
                LinkPlacement { id: moving, category_id: target, position: 1 },
            ])
            .await
            .unwrap();

        let moved = repository.find_link(moving).await.unwrap().unwrap();
        assert_eq!((moved.category_id, moved.position), (target, 1));
        let stayed = repository.find_link(staying).await.unwrap().unwrap();
        assert_eq!((stayed.category_id, stayed.position), (source, 0));
    }

    #[tokio::test]
    async fn test_reorder_links_with_unknown_category_applies_nothing() {
        let repository = memory_repository();
        let panel = repository.insert_panel(NewPanel::new("Work", 0)).await.unwrap();
        let source = category(&repository, panel.id, "Source", 0).await;
        let first = link(&repository, source, "first", 0).await;
        let second = link(&repository, source, "second", 1).await;
        let service = ReorderService::new(repository.clone());

        let err = service
            .reorder_links(&[
                LinkPlacement { id: first, category_id: source, position: 5 },
                LinkPlacement { id: second, category_id: 404, position: 0 },
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));

        let stored = repository.find_link(first).await.unwrap().unwrap();
        assert_eq!(stored.position, 0);
    }

    #[tokio::test]
    async fn test_unknown_ids_are_skipped() {
        let service = ReorderService::new(memory_repository());
        service
            .reorder_categories(&[CategoryPosition { id: 12345, position: 3 }])
            .await
            .unwrap();
    }
}
