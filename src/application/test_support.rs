// Shared fixtures for service tests
use crate::application::dashboard_repository::DashboardRepository;
use crate::infrastructure::sqlite_repository::SqliteRepository;
use std::sync::Arc;

pub(crate) fn memory_repository() -> Arc<dyn DashboardRepository> {
    Arc::new(SqliteRepository::open_in_memory().expect("open in-memory repository"))
}
