// Repository trait for dashboard persistence
use crate::application::errors::RepositoryError;
use crate::domain::category::{Category, CategoryPosition, NewCategory};
use crate::domain::link::{Link, LinkChanges, LinkPlacement, NewLink};
use crate::domain::panel::{NewPanel, Panel};
use async_trait::async_trait;

pub type RepoResult<T> = std::result::Result<T, RepositoryError>;

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// All panels, ordered by position
    async fn list_panels(&self) -> RepoResult<Vec<Panel>>;

    /// All categories across every panel, ordered by position
    async fn list_categories(&self) -> RepoResult<Vec<Category>>;

    /// All links across every category, ordered by position
    async fn list_links(&self) -> RepoResult<Vec<Link>>;

    /// Highest panel position, `None` when there are no panels
    async fn max_panel_position(&self) -> RepoResult<Option<i64>>;

    /// Highest position among the categories of one panel
    async fn max_category_position(&self, panel_id: i64) -> RepoResult<Option<i64>>;

    /// Highest position among the links of one category
    async fn max_link_position(&self, category_id: i64) -> RepoResult<Option<i64>>;

    async fn insert_panel(&self, panel: NewPanel) -> RepoResult<Panel>;

    async fn insert_category(&self, category: NewCategory) -> RepoResult<Category>;

    async fn insert_link(&self, link: NewLink) -> RepoResult<Link>;

    async fn find_link(&self, id: i64) -> RepoResult<Option<Link>>;

    /// Apply a partial edit. Returns `None` when no link has this id.
    async fn update_link(&self, id: i64, changes: LinkChanges) -> RepoResult<Option<Link>>;

    /// Delete a panel together with its categories and their links.
    /// Returns the number of panel rows removed.
    async fn delete_panel(&self, id: i64) -> RepoResult<usize>;

    /// Delete a category together with its links
    async fn delete_category(&self, id: i64) -> RepoResult<usize>;

    async fn delete_link(&self, id: i64) -> RepoResult<usize>;

    /// Apply every position in one atomic batch. Unknown ids are skipped.
    async fn reorder_categories(&self, items: &[CategoryPosition]) -> RepoResult<()>;

    /// Apply every placement in one atomic batch. Unknown ids are skipped.
    async fn reorder_links(&self, items: &[LinkPlacement]) -> RepoResult<()>;
}
