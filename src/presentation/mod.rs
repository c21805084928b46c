// Presentation layer - HTTP routes, handlers and the dashboard page
pub mod app_state;
pub mod dashboard_page;
pub mod extract;
pub mod handlers;
pub mod requests;
