// Domain layer - Core business logic and models
pub mod category;
pub mod hierarchy;
pub mod link;
pub mod panel;
