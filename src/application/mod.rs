// Application layer - Use cases over the dashboard repository
pub mod bootstrap;
pub mod category_service;
pub mod dashboard_repository;
pub mod errors;
pub mod hierarchy_service;
pub mod link_service;
pub mod panel_service;
pub mod reorder_service;

#[cfg(test)]
pub(crate) mod test_support;
