//! Alarm Console - Leptos frontend
//!
//! Lists, filters, sorts and paginates site alarms from the alarm API. The
//! location query string holds all filter state; the page derives its
//! request parameters from it and renders through a deduplicating,
//! stale-while-revalidate query cache.

pub mod api;
pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod params;
pub mod query;
pub mod view;

pub use app::App;
pub use client::AlarmApiClient;
pub use error::{ApiError, Result};

use std::sync::Arc;

use crate::io::ReqwestHttpClient;

/// API client for the configured base URL
pub fn default_client() -> Result<AlarmApiClient> {
    AlarmApiClient::new(&config::api_base(), Arc::new(ReqwestHttpClient::new()))
}

/// Entry point for the WASM client
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();

    // tracing events reach the browser console through its `log` bridge
    let level = config::log_level();
    let log_level = level.as_str().parse().unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(log_level));
    tracing::info!("Alarm console starting, log level {}", level);

    leptos::mount::mount_to_body(App);
}
