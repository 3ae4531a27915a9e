//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

use crate::runtime::handle::RuntimeConfig;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub bind: SocketAddr,
    /// `tracing-subscriber` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Store task settings.
    pub runtime: RuntimeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            log_filter: "info".to_string(),
            runtime: RuntimeConfig::default(),
        }
    }
}
