//! Page shell and static bundle routes
//!
//! The alarm console renders entirely in the browser. This module serves
//! the HTML shell that boots the wasm bundle, hands the configured API
//! base URL to it through a `<meta>` tag, and serves the bundle itself.

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Name of the meta tag the frontend reads its API base from
pub const API_BASE_META: &str = "alarm-api-base";

/// Path the wasm-bindgen output is mounted under
pub const PKG_PATH: &str = "/pkg";

/// Module name of the compiled frontend inside `pkg/`; matches the
/// `output-name` of the workspace leptos metadata
pub const BUNDLE_NAME: &str = "alarm_console_app";

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem; color: #212529; }
    .page-header { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 0.75rem; }
    .totals { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; }
    .totals-label, .muted { color: #6c757d; }
    .filters { display: flex; flex-wrap: wrap; gap: 0.75rem; margin: 1rem 0; }
    .control { display: flex; flex-direction: column; font-size: 0.85em; gap: 0.2rem; }
    .table-wrap { overflow-x: auto; }
    .alarm-table { width: 100%; border-collapse: collapse; }
    .alarm-table th, .alarm-table td { padding: 0.5rem; text-align: left; border-bottom: 1px solid #dee2e6; }
    .alarm-table .center, .alarm-table .message { text-align: center; }
    .message.error { color: #721c24; background-color: #f8d7da; }
    .pagination { display: flex; align-items: center; gap: 0.75rem; margin-top: 1rem; }
    .badge { display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; font-size: 0.85em; font-weight: 600; }
    .badge-info { color: #0c5460; background-color: #d1ecf1; }
    .badge-warn { color: #856404; background-color: #fff3cd; }
    .badge-major { color: #8a3c00; background-color: #ffe5d0; }
    .badge-critical { color: #721c24; background-color: #f8d7da; }
    .badge-unknown, .badge-total { color: #383d41; background-color: #e2e3e5; }
"#;

/// Router state: the shell is rendered once at startup
#[derive(Clone)]
pub struct ShellState {
    page: Arc<str>,
}

/// Build the console axum router
pub fn build_router(api_base: &str, site_root: &Path) -> Router {
    let state = ShellState {
        page: render_shell(api_base).into(),
    };
    let pkg_dir = site_root.join("pkg");
    tracing::debug!("Serving {} from {:?}", PKG_PATH, pkg_dir);

    Router::new()
        .route("/", get(shell_handler))
        .route("/alarms", get(shell_handler))
        .route("/health", get(health_handler))
        .nest_service(PKG_PATH, ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shell_handler(State(shell): State<ShellState>) -> impl IntoResponse {
    Html(shell.page.to_string())
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Render the HTML shell for the given API base URL
pub fn render_shell(api_base: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="{meta}" content="{api_base}">
    <title>Alarm Console</title>
    <style>{style}</style>
    <script type="module">
        import init, {{ mount }} from '{pkg}/{bundle}.js';
        await init();
        mount();
    </script>
</head>
<body></body>
</html>"#,
        meta = API_BASE_META,
        api_base = escape_attr(api_base),
        style = STYLE,
        pkg = PKG_PATH,
        bundle = BUNDLE_NAME,
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
