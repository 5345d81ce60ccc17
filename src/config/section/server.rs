//! `[server]` section configuration.
//!
//! Read by host applications that serve the loaded namespaces. The loader
//! itself never binds a socket.
//!
//! # Example
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"    # Network interface
//! port = 3000         # HTTP port number
//! ```

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

/// Server settings exposed to the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Network interface to bind.
    pub host: IpAddr,

    /// HTTP port number.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}
