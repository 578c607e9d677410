// Page registry - maps routes to the views that render them

use crate::application::page_view::PageView;
use crate::domain::page::Asset;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("route '{0}' is already registered")]
    DuplicateRoute(String),
}

/// Registered page: the view plus its descriptor captured at registration
/// time, so routing metadata stays fixed for the page's lifetime.
#[derive(Clone)]
pub struct RegisteredPage {
    pub route: String,
    pub view: Arc<dyn PageView>,
}

/// Explicit stand-in for annotation-driven route discovery: every navigable
/// page is registered here at startup and the router is built from the result.
#[derive(Clone, Default)]
pub struct PageRegistry {
    pages: HashMap<String, RegisteredPage>,
    order: Vec<String>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, view: Arc<dyn PageView>) -> Result<(), PageError> {
        let route = view.descriptor().route;
        if self.pages.contains_key(&route) {
            return Err(PageError::DuplicateRoute(route));
        }
        self.order.push(route.clone());
        self.pages.insert(
            route.clone(),
            RegisteredPage { route, view },
        );
        Ok(())
    }

    pub fn get(&self, route: &str) -> Option<&RegisteredPage> {
        self.pages.get(route)
    }

    /// Pages in registration order.
    pub fn pages(&self) -> impl Iterator<Item = &RegisteredPage> {
        self.order.iter().filter_map(|route| self.pages.get(route))
    }

    /// All npm package pins declared across registered pages in declaration
    /// order, deduplicated. The build pipeline that would consume these does
    /// not exist here; they are surfaced in the startup log instead.
    pub fn npm_dependencies(&self) -> Vec<(String, String)> {
        let mut pins = Vec::new();
        for page in self.pages() {
            for asset in page.view.descriptor().assets {
                if let Asset::NpmPackage { name, version } = asset {
                    if !pins.contains(&(name.clone(), version.clone())) {
                        pins.push((name, version));
                    }
                }
            }
        }
        pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::monitoring::MonitoringView;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PageRegistry::new();
        registry.register(Arc::new(MonitoringView::new())).unwrap();

        let page = registry.get("monitoring").expect("page registered");
        assert_eq!(page.route, "monitoring");
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let mut registry = PageRegistry::new();
        registry.register(Arc::new(MonitoringView::new())).unwrap();

        let err = registry
            .register(Arc::new(MonitoringView::new()))
            .unwrap_err();
        assert!(matches!(err, PageError::DuplicateRoute(route) if route == "monitoring"));
    }

    #[test]
    fn test_npm_dependencies_are_aggregated() {
        let mut registry = PageRegistry::new();
        registry.register(Arc::new(MonitoringView::new())).unwrap();

        assert_eq!(
            registry.npm_dependencies(),
            vec![("@fontsource/roboto".to_string(), "4.5.0".to_string())]
        );
    }
}
