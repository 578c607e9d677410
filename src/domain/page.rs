// Page metadata - route, title and static asset declarations
use crate::domain::element::escape;

/// A static asset a page declares. Stylesheets and script modules contribute
/// `<head>` markup; npm package pins are build-time declarations and render
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asset {
    /// Local stylesheet path, served relative to the page.
    Stylesheet(String),
    /// Front-end script module specifier.
    JsModule(String),
    /// Pinned npm package dependency.
    NpmPackage { name: String, version: String },
    /// Absolute stylesheet URL loaded from an external host.
    ExternalStylesheet(String),
}

impl Asset {
    /// The `<head>` tag this asset contributes, if any.
    pub fn head_markup(&self) -> Option<String> {
        match self {
            Asset::Stylesheet(path) | Asset::ExternalStylesheet(path) => Some(format!(
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape(path)
            )),
            Asset::JsModule(specifier) => Some(format!(
                "<script type=\"module\" src=\"{}\"></script>",
                escape(specifier)
            )),
            Asset::NpmPackage { .. } => None,
        }
    }
}

/// Everything the router and renderer need to know about a page, declared up
/// front instead of discovered through annotations.
#[derive(Debug, Clone)]
pub struct PageDescriptor {
    /// Route key without a leading slash, e.g. `monitoring`.
    pub route: String,
    /// Browser tab title while the page is active.
    pub title: String,
    /// Assets in declaration order.
    pub assets: Vec<Asset>,
}

impl PageDescriptor {
    pub fn new(route: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            title: title.into(),
            assets: Vec::new(),
        }
    }

    pub fn with_asset(mut self, asset: Asset) -> Self {
        self.assets.push(asset);
        self
    }

    /// URL path the router maps this page to.
    pub fn path(&self) -> String {
        format!("/{}", self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_head_markup() {
        let asset = Asset::Stylesheet("./styles/shared-styles.css".to_string());
        assert_eq!(
            asset.head_markup().unwrap(),
            "<link rel=\"stylesheet\" href=\"./styles/shared-styles.css\">"
        );
    }

    #[test]
    fn test_js_module_head_markup() {
        let asset = Asset::JsModule("@vaadin/vaadin-lumo-styles/presets/compact.js".to_string());
        assert_eq!(
            asset.head_markup().unwrap(),
            "<script type=\"module\" src=\"@vaadin/vaadin-lumo-styles/presets/compact.js\"></script>"
        );
    }

    #[test]
    fn test_npm_package_renders_nothing() {
        let asset = Asset::NpmPackage {
            name: "@fontsource/roboto".to_string(),
            version: "4.5.0".to_string(),
        };
        assert_eq!(asset.head_markup(), None);
    }

    #[test]
    fn test_descriptor_path() {
        let descriptor = PageDescriptor::new("monitoring", "Monitoring");
        assert_eq!(descriptor.path(), "/monitoring");
    }
}
