//! Host startup and serve errors.

use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// A configuration value could not be parsed.
    #[error("invalid {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    /// The Leptos site configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}
