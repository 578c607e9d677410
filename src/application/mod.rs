// Application layer - Views and page registration
pub mod monitoring;
pub mod page_registry;
pub mod page_view;
