// Presentation layer - HTTP handlers and shared state
pub mod app_state;
pub mod handlers;
