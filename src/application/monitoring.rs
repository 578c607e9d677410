// Monitoring page - static single-label view

use crate::application::page_view::PageView;
use crate::domain::element::{Label, VerticalLayout};
use crate::domain::page::{Asset, PageDescriptor};

pub const MONITORING_ROUTE: &str = "monitoring";
pub const MONITORING_TITLE: &str = "Monitoring";

const LABEL_TEXT: &str = "Monitoring View";
const SHARED_STYLES: &str = "./styles/shared-styles.css";
const LUMO_COMPACT_MODULE: &str = "@vaadin/vaadin-lumo-styles/presets/compact.js";
const ROBOTO_PACKAGE: &str = "@fontsource/roboto";
const ROBOTO_VERSION: &str = "4.5.0";
const ROBOTO_FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500&display=swap";

/// The monitoring page. Stateless; every render produces the same
/// single-label layout.
#[derive(Debug, Clone, Default)]
pub struct MonitoringView;

impl MonitoringView {
    pub fn new() -> Self {
        Self
    }
}

impl PageView for MonitoringView {
    fn descriptor(&self) -> PageDescriptor {
        PageDescriptor::new(MONITORING_ROUTE, MONITORING_TITLE)
            .with_asset(Asset::Stylesheet(SHARED_STYLES.to_string()))
            .with_asset(Asset::JsModule(LUMO_COMPACT_MODULE.to_string()))
            .with_asset(Asset::NpmPackage {
                name: ROBOTO_PACKAGE.to_string(),
                version: ROBOTO_VERSION.to_string(),
            })
            .with_asset(Asset::ExternalStylesheet(ROBOTO_FONT_URL.to_string()))
    }

    fn body(&self) -> VerticalLayout {
        let mut layout = VerticalLayout::new();
        layout.add(Label::new(LABEL_TEXT));
        layout
    }
}
