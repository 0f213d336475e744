//! Proxy data models

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Proxy protocol.
///
/// The set is open: anything that is not one of the well-known schemes is
/// kept verbatim in [`ProxyType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProxyType {
    #[default]
    Http,
    Https,
    Socks4,
    Socks5,
    Other(String),
}

impl ProxyType {
    /// Protocol name as used for grouping and file names
    pub fn name(&self) -> &str {
        match self {
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Socks4 => "socks4",
            ProxyType::Socks5 => "socks5",
            ProxyType::Other(name) => name,
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProxyType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "http" => ProxyType::Http,
            "https" => ProxyType::Https,
            "socks4" => ProxyType::Socks4,
            "socks5" => ProxyType::Socks5,
            _ => ProxyType::Other(s.to_string()),
        })
    }
}

/// Proxy authentication credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

impl ProxyAuth {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

/// A single proxy record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    pub host: String,
    pub port: u16,
    pub proxy_type: ProxyType,
    pub auth: Option<ProxyAuth>,
}

impl Proxy {
    /// Create a new proxy without authentication
    pub fn new(host: impl Into<String>, port: u16, proxy_type: ProxyType) -> Self {
        Self {
            host: host.into(),
            port,
            proxy_type,
            auth: None,
        }
    }

    /// Create a new proxy with authentication
    pub fn with_auth(
        host: impl Into<String>,
        port: u16,
        proxy_type: ProxyType,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            proxy_type,
            auth: Some(ProxyAuth::new(username.into(), password.into())),
        }
    }

    /// Protocol name this record is grouped under
    pub fn protocol(&self) -> &str {
        self.proxy_type.name()
    }

    /// `protocol://[user:pass@]host:port`, the line written to list files
    pub fn url(&self) -> String {
        let auth_part = self.auth.as_ref().map_or(String::new(), |auth| {
            format!("{}:{}@", auth.username, auth.password)
        });

        format!("{}://{}{}:{}", self.proxy_type, auth_part, self.host, self.port)
    }

    /// Identity key: hex SHA-256 of `protocol://host:port`.
    ///
    /// Credentials are not part of the identity, so two records that differ
    /// only in auth share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let identity = format!("{}://{}:{}", self.proxy_type, self.host, self.port);
        format!("{:x}", Sha256::digest(identity.as_bytes()))
    }
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url())
    }
}
