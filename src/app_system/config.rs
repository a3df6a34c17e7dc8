use anyhow::{Context, Result};
use std::str::FromStr;

pub const DEFAULT_SERVICE_FEE: f64 = 1.5;
pub const DEFAULT_GUEST_ID: &str = "guest_user";

/// Runtime settings, sourced from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Added to the cart subtotal at checkout display only.
    pub service_fee: f64,
    pub channel_buffer: usize,
    pub seed_demo_data: bool,
    /// Customer id used for anonymous QR-code sessions.
    pub guest_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_fee: DEFAULT_SERVICE_FEE,
            channel_buffer: 32,
            seed_demo_data: true,
            guest_id: DEFAULT_GUEST_ID.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let service_fee = parse_or(&lookup, "QUICKSERVE_SERVICE_FEE", defaults.service_fee)?;
        if !service_fee.is_finite() || service_fee < 0.0 {
            anyhow::bail!("QUICKSERVE_SERVICE_FEE must be a non-negative amount, got {service_fee}");
        }
        let channel_buffer = parse_or(&lookup, "QUICKSERVE_CHANNEL_BUFFER", defaults.channel_buffer)?;
        if channel_buffer == 0 {
            anyhow::bail!("QUICKSERVE_CHANNEL_BUFFER must be at least 1");
        }
        Ok(Self {
            service_fee,
            channel_buffer,
            seed_demo_data: parse_or(&lookup, "QUICKSERVE_SEED_DEMO", defaults.seed_demo_data)?,
            guest_id: lookup("QUICKSERVE_GUEST_ID").unwrap_or(defaults.guest_id),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().with_context(|| format!("parse {key}")),
        None => Ok(default),
    }
}
