use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub workers: usize,
    /// Listings per page on the explore page.
    pub page_size: usize,
    pub submit_delay: Duration,
    pub reset_delay: Duration,
    /// Idle time after which an add-listing form session is dropped.
    pub form_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            workers: 8,
            page_size: 12,
            submit_delay: Duration::from_millis(1500),
            reset_delay: Duration::from_millis(2500),
            form_ttl: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();
        Ok(Self {
            addr: var_or("CONTACT365_ADDR", defaults.addr)?,
            workers: var_or("CONTACT365_WORKERS", defaults.workers)?,
            page_size: var_or("CONTACT365_PAGE_SIZE", defaults.page_size)?.max(1),
            submit_delay: Duration::from_millis(var_or(
                "CONTACT365_SUBMIT_DELAY_MS",
                defaults.submit_delay.as_millis() as u64,
            )?),
            reset_delay: Duration::from_millis(var_or(
                "CONTACT365_RESET_DELAY_MS",
                defaults.reset_delay.as_millis() as u64,
            )?),
            form_ttl: Duration::from_secs(var_or(
                "CONTACT365_FORM_TTL_SECS",
                defaults.form_ttl.as_secs(),
            )?),
        })
    }
}

fn var_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}
