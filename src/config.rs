//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `PORT`: listen port (default `3000`)
//!
//! Leptos site settings (`site-root`, `output-name`) are read separately by
//! `leptos::prelude::get_configuration` in `routes`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::HostError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed host config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match non_empty(lookup("BIND_ADDR")) {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| HostError::InvalidConfig { var: "BIND_ADDR", value: raw })?,
            None => DEFAULT_BIND_ADDR,
        };
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| HostError::InvalidConfig { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
