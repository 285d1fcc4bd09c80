//! Server configuration, read from the environment

use crate::services::TokenPolicy;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub data_dir: PathBuf,
    pub token_policy: TokenPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unparseable values
    /// fall back to their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let host = match lookup("BIND_HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid BIND_HOST {:?}, binding all interfaces", raw);
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        let token_policy = match lookup("AUTH_TOKEN_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "Unknown AUTH_TOKEN_POLICY {:?}, using {}",
                    raw,
                    TokenPolicy::default()
                );
                TokenPolicy::default()
            }),
            None => TokenPolicy::default(),
        };

        Self {
            host,
            port,
            data_dir,
            token_policy,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
