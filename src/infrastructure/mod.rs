// Infrastructure layer - Configuration and HTML rendering
pub mod config;
pub mod html;
