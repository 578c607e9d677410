// Application state for HTTP handlers
use crate::application::page_registry::PageRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: PageRegistry,
}
