//! Runtime settings read from the page shell

/// Local development API
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Name of the `<meta>` tag the serving process uses to hand over the API base
pub const API_BASE_META: &str = "alarm-api-base";

/// Name of the `<meta>` tag selecting the browser console log level
pub const LOG_LEVEL_META: &str = "alarm-log-level";

/// Resolve the API base URL.
///
/// Order: the `alarm-api-base` meta tag of the page, then `ALARM_API_BASE`
/// at build time, then [`DEFAULT_API_BASE`].
pub fn api_base() -> String {
    resolve_api_base(meta_content(API_BASE_META), option_env!("ALARM_API_BASE"))
}

/// Browser log level: the `alarm-log-level` meta tag, else DEBUG in debug
/// builds and INFO otherwise
pub fn log_level() -> tracing::Level {
    resolve_log_level(meta_content(LOG_LEVEL_META), cfg!(debug_assertions))
}

fn resolve_log_level(meta: Option<String>, debug_build: bool) -> tracing::Level {
    meta.and_then(|v| v.trim().parse().ok())
        .unwrap_or(if debug_build {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
}

fn resolve_api_base(meta: Option<String>, build_time: Option<&str>) -> String {
    meta.filter(|v| !v.trim().is_empty())
        .or_else(|| {
            build_time
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(feature = "csr")]
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}

#[cfg(not(feature = "csr"))]
fn meta_content(_name: &str) -> Option<String> {
    None
}
