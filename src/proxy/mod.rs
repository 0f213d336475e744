//! Proxy records and list parsing
//!
//! This module provides:
//! - The proxy record and its identity fingerprint
//! - Parsing proxies from list files (IP:PORT, IP:PORT:USER:PASS, URLs, etc.)

pub mod models;
pub mod parser;

pub use models::{Proxy, ProxyAuth, ProxyType};
pub use parser::ProxyParser;
