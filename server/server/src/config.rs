use std::{fmt, net::SocketAddr};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_TECHNICIAN: &str = "Li Si";

#[derive(Debug)]
pub enum Error {
    BindAddr(String, std::net::AddrParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BindAddr(raw, e) => write!(f, "invalid MES_BIND_ADDR {:?}: {}", raw, e),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_dir: String,
    /// Recorded on every maintenance entry.
    pub technician: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let raw_addr = lookup("MES_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| Error::BindAddr(raw_addr.clone(), e))?;
        Ok(Self {
            bind_addr,
            log_dir: lookup("MES_LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
            technician: lookup("MES_TECHNICIAN").unwrap_or_else(|| DEFAULT_TECHNICIAN.to_string()),
        })
    }
}
