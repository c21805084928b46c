// Link service - Create, edit and delete links
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::errors::{
    next_position, required_text, DashboardError, RepositoryError, Result,
};
use crate::domain::link::{Link, LinkChanges, NewLink};
use crate::infrastructure::favicon::FaviconResolver;
use std::sync::Arc;

/// Partial edit requested by a client. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LinkEdit {
    pub name: Option<String>,
    pub url: Option<String>,
    pub category_id: Option<i64>,
}

#[derive(Clone)]
pub struct LinkService {
    repository: Arc<dyn DashboardRepository>,
    favicons: FaviconResolver,
}

fn missing_category(category_id: i64) -> impl FnOnce(RepositoryError) -> DashboardError {
    move |e| match e {
        RepositoryError::ForeignKey => {
            DashboardError::Validation(format!("category {} does not exist", category_id))
        }
        other => other.into(),
    }
}

impl LinkService {
    pub fn new(repository: Arc<dyn DashboardRepository>, favicons: FaviconResolver) -> Self {
        Self {
            repository,
            favicons,
        }
    }

    /// Append a link at the end of its category
    pub async fn create_link(
        &self,
        name: Option<&str>,
        url: Option<&str>,
        category_id: Option<i64>,
    ) -> Result<Link> {
        let (Some(name), Some(url), Some(category_id)) =
            (required_text(name), required_text(url), category_id)
        else {
            return Err(DashboardError::validation(
                "name, url, and categoryId are required",
            ));
        };

        let favicon = self.favicons.resolve(url);
        if favicon.is_none() {
            tracing::debug!("No favicon for unparsable url '{}'", url);
        }

        let position = next_position(self.repository.max_link_position(category_id).await?)?;
        let link = self
            .repository
            .insert_link(NewLink {
                name: name.to_string(),
                url: url.to_string(),
                favicon,
                category_id,
                position,
            })
            .await
            .map_err(missing_category(category_id))?;

        tracing::info!(
            "Created link {} '{}' in category {} at position {}",
            link.id,
            link.name,
            link.category_id,
            link.position
        );
        Ok(link)
    }

    /// Apply a partial edit.
    ///
    /// A new url refreshes the favicon only when the url yields one; otherwise
    /// the stored favicon is kept. Moving to another category appends the link
    /// at the end of that category.
    pub async fn update_link(&self, id: i64, edit: LinkEdit) -> Result<Link> {
        let current = self
            .repository
            .find_link(id)
            .await?
            .ok_or(DashboardError::NotFound { entity: "link", id })?;

        let mut changes = LinkChanges::default();

        if let Some(name) = edit.name.as_deref() {
            let name = required_text(Some(name))
                .ok_or_else(|| DashboardError::validation("name cannot be blank"))?;
            changes.name = Some(name.to_string());
        }

        if let Some(url) = edit.url.as_deref() {
            let url = required_text(Some(url))
                .ok_or_else(|| DashboardError::validation("url cannot be blank"))?;
            changes.favicon = self.favicons.resolve(url);
            changes.url = Some(url.to_string());
        }

        if let Some(category_id) = edit.category_id {
            if category_id != current.category_id {
                let max = self.repository.max_link_position(category_id).await?;
                changes.position = Some(next_position(max)?);
                changes.category_id = Some(category_id);
            }
        }

        if changes.is_empty() {
            return Ok(current);
        }

        let target_category = changes.category_id.unwrap_or(current.category_id);
        let updated = self
            .repository
            .update_link(id, changes)
            .await
            .map_err(missing_category(target_category))?
            .ok_or(DashboardError::NotFound { entity: "link", id })?;

        tracing::info!("Updated link {}", id);
        Ok(updated)
    }

    /// Delete a link. Unknown ids are a no-op.
    pub async fn delete_link(&self, id: i64) -> Result<()> {
        let removed = self.repository.delete_link(id).await?;
        tracing::info!("Deleted link {} ({} row(s))", id, removed);
        Ok(())
    }
}
