use std::net::SocketAddr;

use anyhow::{Context, Result};
use frnds_api::DEFAULT_BODY_LIMIT;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_demo: bool,
    pub body_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("FRNDS_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: parse_var("FRNDS_PORT", 3000)?,
            seed_demo: parse_flag("FRNDS_SEED_DEMO", true)?,
            body_limit: parse_var("FRNDS_BODY_LIMIT", DEFAULT_BODY_LIMIT)?,
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_flag(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => anyhow::bail!("{} must be a boolean, got {:?}", key, raw),
        },
        Err(_) => Ok(default),
    }
}
