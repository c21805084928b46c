// Application state for HTTP handlers
use crate::application::category_service::CategoryService;
use crate::application::dashboard_repository::DashboardRepository;
use crate::application::hierarchy_service::HierarchyService;
use crate::application::link_service::LinkService;
use crate::application::panel_service::PanelService;
use crate::application::reorder_service::ReorderService;
use crate::infrastructure::favicon::FaviconResolver;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub hierarchy_service: HierarchyService,
    pub panel_service: PanelService,
    pub category_service: CategoryService,
    pub link_service: LinkService,
    pub reorder_service: ReorderService,
}

impl AppState {
    /// Wire every service to one shared repository
    pub fn new(repository: Arc<dyn DashboardRepository>, favicons: FaviconResolver) -> Self {
        Self {
            hierarchy_service: HierarchyService::new(repository.clone()),
            panel_service: PanelService::new(repository.clone()),
            category_service: CategoryService::new(repository.clone()),
            link_service: LinkService::new(repository.clone(), favicons),
            reorder_service: ReorderService::new(repository),
        }
    }
}
