//! HTML widget and logo assets surfaced as MCP resources.

use std::path::PathBuf;

use serde_json::{Map, Value, json};
use tracing::{error, warn};

pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
pub const WIDGET_FILE: &str = "aha-widget.html";
const FALLBACK_HTML: &str = "<html><body><p>Error loading widget HTML</p></body></html>";

/// Checked in order; the first file present becomes the emblem.
const LOGO_FILES: &[&str] = &["AHA Logo.png", "aha-logo.svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetResource {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: Option<&'static str>,
    /// Listed as an app under the prompt bar.
    pub app: bool,
}

pub const WIDGET_RESOURCES: &[WidgetResource] = &[
    WidgetResource {
        uri: "ui://widget/aha.html",
        name: "aha-widget",
        description: None,
        app: false,
    },
    WidgetResource {
        uri: "ui://app/aha.html",
        name: "AHA Guidelines",
        description: Some(
            "American Heart Association Guidelines - Search evidence-based cardiovascular guidelines and recommendations",
        ),
        app: true,
    },
];

pub fn find_resource(uri: &str) -> Option<&'static WidgetResource> {
    WIDGET_RESOURCES.iter().find(|r| r.uri == uri)
}

#[derive(Debug, Clone)]
pub struct WidgetAssets {
    public_dir: PathBuf,
    base_url: String,
}

impl WidgetAssets {
    pub fn new(public_dir: PathBuf, base_url: impl Into<String>) -> Self {
        Self {
            public_dir,
            base_url: base_url.into(),
        }
    }

    /// Read on every call so edits show up without a restart.
    pub async fn load_html(&self) -> String {
        let path = self.public_dir.join(WIDGET_FILE);
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => html,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to load widget HTML");
                FALLBACK_HTML.to_string()
            }
        }
    }

    pub fn logo_url(&self) -> Option<String> {
        let found = LOGO_FILES
            .iter()
            .find(|name| self.public_dir.join(name).is_file());
        match found {
            Some(name) => Some(format!("{}/public/{}", self.base_url, name.replace(' ', "%20"))),
            None => {
                warn!(public_dir = %self.public_dir.display(), "no AHA logo found");
                None
            }
        }
    }

    pub fn resource_meta(&self, resource: &WidgetResource) -> Map<String, Value> {
        let mut meta = Map::new();
        meta.insert("openai/widgetPrefersBorder".to_string(), json!(true));
        if resource.app {
            meta.insert("openai/app".to_string(), json!(true));
            meta.insert("openai/appName".to_string(), json!("AHA Guidelines"));
            meta.insert(
                "openai/appDescription".to_string(),
                json!("Search evidence-based cardiovascular guidelines and recommendations"),
            );
        }
        if let Some(logo) = self.logo_url() {
            meta.insert("openai/emblem".to_string(), json!(logo));
        }
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn widget_html_is_read_fresh_with_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let assets = WidgetAssets::new(dir.path().to_path_buf(), "http://localhost:8787");
        assert_eq!(assets.load_html().await, FALLBACK_HTML);

        std::fs::write(dir.path().join(WIDGET_FILE), "<div>v1</div>").unwrap();
        assert_eq!(assets.load_html().await, "<div>v1</div>");
        std::fs::write(dir.path().join(WIDGET_FILE), "<div>v2</div>").unwrap();
        assert_eq!(assets.load_html().await, "<div>v2</div>");
    }

    #[test]
    fn png_logo_is_preferred_and_url_encoded() {
        let dir = tempfile::tempdir().unwrap();
        let assets = WidgetAssets::new(dir.path().to_path_buf(), "https://aha.example");
        assert_eq!(assets.logo_url(), None);

        std::fs::write(dir.path().join("aha-logo.svg"), "<svg/>").unwrap();
        assert_eq!(assets.logo_url().as_deref(), Some("https://aha.example/public/aha-logo.svg"));

        std::fs::write(dir.path().join("AHA Logo.png"), [0u8; 4]).unwrap();
        assert_eq!(
            assets.logo_url().as_deref(),
            Some("https://aha.example/public/AHA%20Logo.png")
        );
    }

    #[test]
    fn app_resource_meta_carries_app_flags() {
        let dir = tempfile::tempdir().unwrap();
        let assets = WidgetAssets::new(dir.path().to_path_buf(), "http://localhost:8787");

        let widget = assets.resource_meta(find_resource("ui://widget/aha.html").unwrap());
        assert_eq!(widget.get("openai/widgetPrefersBorder"), Some(&json!(true)));
        assert!(!widget.contains_key("openai/app"));
        assert!(!widget.contains_key("openai/emblem"));

        let app = assets.resource_meta(find_resource("ui://app/aha.html").unwrap());
        assert_eq!(app.get("openai/appName"), Some(&json!("AHA Guidelines")));
    }
}
