//! BDD test world for the alarm console service

use std::net::SocketAddr;

use alarm_console::Config;
use cucumber::World;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default, World)]
pub struct ConsoleWorld {
    pub config: Config,
    pub site_dir: Option<tempfile::TempDir>,

    // Running server
    pub cancel: Option<CancellationToken>,
    pub addr: Option<SocketAddr>,
    pub server: Option<JoinHandle<alarm_console::Result<()>>>,
    pub server_result: Option<alarm_console::Result<()>>,

    // Last response
    pub status: Option<u16>,
    pub body: Option<String>,
    pub build_error: Option<String>,
}

impl ConsoleWorld {
    pub fn body(&self) -> &str {
        self.body.as_deref().expect("no response body")
    }
}
