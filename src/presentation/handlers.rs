// HTTP request handlers
use crate::infrastructure::html::{html_response, render_document};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the page registered for the requested path. Mounted once per
/// registered route; the URI picks the page back out of the registry.
pub async fn render_page(uri: Uri, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let route = uri.path().trim_start_matches('/');

    match state.registry.get(route) {
        Some(page) => {
            let markup = render_document(&page.view.descriptor(), &page.view.body());
            match html_response(markup) {
                Ok(response) => response,
                Err(status) => status.into_response(),
            }
        }
        None => {
            tracing::warn!("no page registered for route '{}'", route);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::monitoring::MonitoringView;
    use crate::application::page_registry::PageRegistry;
    use axum::body::to_bytes;
    use axum::http::header;
    use axum::response::Response;

    fn state() -> Arc<AppState> {
        let mut registry = PageRegistry::new();
        registry
            .register(Arc::new(MonitoringView::new()))
            .expect("fresh registry");
        Arc::new(AppState { registry })
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }

    #[tokio::test]
    async fn test_render_monitoring_page() {
        let response = render_page(Uri::from_static("/monitoring"), State(state()))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );

        let body = body_text(response).await;
        assert!(body.contains("<title>Monitoring</title>"));
        assert!(body.contains("<span class=\"label\">Monitoring View</span>"));
        assert_eq!(body.matches("<span class=\"label\">").count(), 1);
    }

    #[tokio::test]
    async fn test_unregistered_route_is_not_found() {
        let response = render_page(Uri::from_static("/missing"), State(state()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
