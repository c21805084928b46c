// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod favicon;
pub mod http_response;
pub mod sqlite_repository;
