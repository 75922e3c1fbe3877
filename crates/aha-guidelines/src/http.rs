use std::path::PathBuf;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, Response, header};
use axum::routing::get;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::services::fs::ServeFileSystemResponseBody;
use tower_http::set_header::SetResponseHeader;

use crate::server::AhaGuidelinesServer;

pub const MCP_PATH: &str = "/mcp";
pub const BANNER: &str = "AHA Guidelines MCP server";

const MCP_SESSION_ID: HeaderName = HeaderName::from_static("mcp-session-id");
const PUBLIC_CACHE_CONTROL: &str = "public, max-age=3600";

/// `/` banner, `/public/*` static assets and the streamable MCP endpoint.
pub fn router(server: AhaGuidelinesServer, public_dir: PathBuf) -> Router {
    let mcp = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            stateful_mode: false,
            ..Default::default()
        },
    );

    let public = SetResponseHeader::overriding(
        ServeDir::new(public_dir),
        header::CACHE_CONTROL,
        cache_control_for,
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, MCP_SESSION_ID])
        .expose_headers([MCP_SESSION_ID]);

    Router::new()
        .route("/", get(|| async { BANNER }))
        .nest_service(MCP_PATH, mcp)
        .nest_service("/public", public)
        .layer(cors)
}

/// Only found assets are cacheable; a missing logo must show up once added.
fn cache_control_for(response: &Response<ServeFileSystemResponseBody>) -> Option<HeaderValue> {
    response
        .status()
        .is_success()
        .then(|| HeaderValue::from_static(PUBLIC_CACHE_CONTROL))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use guideline_store::{DocumentStore, QueryService, ScoringWeights};
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    use super::*;
    use crate::widget::WidgetAssets;

    fn app(public_dir: PathBuf) -> Router {
        let store = Arc::new(RwLock::new(DocumentStore::seeded(ScoringWeights::default())));
        let widget = WidgetAssets::new(public_dir.clone(), "http://localhost:8787");
        let server = AhaGuidelinesServer::new(store, QueryService::default(), widget);
        router(server, public_dir)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn root_serves_the_banner() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(dir.path().to_path_buf()).oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], BANNER.as_bytes());
    }

    #[tokio::test]
    async fn public_files_are_served_with_cache_headers() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AHA Logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

        let response = app(dir.path().to_path_buf())
            .oneshot(get_request("/public/AHA%20Logo.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(response.headers()[header::CACHE_CONTROL], PUBLIC_CACHE_CONTROL);
    }

    #[tokio::test]
    async fn missing_public_file_and_unknown_route_are_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(dir.path().to_path_buf());

        let response = app.clone().oneshot(get_request("/public/missing.svg")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());

        let response = app.oneshot(get_request("/nowhere")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mcp_preflight_allows_any_origin() {
        let dir = tempfile::tempdir().unwrap();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(MCP_PATH)
            .header(header::ORIGIN, "https://chatgpt.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,mcp-session-id")
            .body(Body::empty())
            .unwrap();

        let response = app(dir.path().to_path_buf()).oneshot(request).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}
