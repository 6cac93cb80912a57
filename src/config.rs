// src/config.rs

//! Configuration loading utilities.
//!
//! The TOML file (if present) supplies tunables; environment variables
//! supply endpoints and secrets and win over the file. `STAMPER_URL` is
//! accepted as a full URL and split into host/port.

use url::Url;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Environment variables recognized by [`apply_env`].
pub const ENV_FEED_API_ROOT: &str = "FEED_API_ROOT";
pub const ENV_FEED_API_KEY: &str = "FEED_API_KEY";
pub const ENV_STAMPER_URL: &str = "STAMPER_URL";
pub const ENV_POLL_INTERVAL_MS: &str = "POLL_INTERVAL_MS";
pub const ENV_POLL_LOOKBACK_SECS: &str = "POLL_LOOKBACK_SECS";
pub const ENV_PORT: &str = "PORT";
pub const ENV_CHAT_WEBHOOK_URL: &str = "CHAT_WEBHOOK_URL";
pub const ENV_TASK_API_URL: &str = "TASK_API_URL";
pub const ENV_TASK_API_TOKEN: &str = "TASK_API_TOKEN";
pub const ENV_TASK_PROJECT: &str = "TASK_PROJECT";

/// Overlay process environment variables onto a loaded config.
pub fn apply_env(config: &mut Config) -> Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Overlay configuration from an arbitrary key lookup.
///
/// Split out from [`apply_env`] so tests can drive it without touching the
/// process environment.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup(ENV_FEED_API_ROOT) {
        config.feed.api_root = root.trim_end_matches('/').to_string();
    }
    if let Some(key) = lookup(ENV_FEED_API_KEY) {
        config.feed.api_key = key;
    }
    if let Some(raw) = lookup(ENV_STAMPER_URL) {
        let parsed = Url::parse(&raw)
            .map_err(|e| AppError::config(format!("{ENV_STAMPER_URL} is not a URL: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| AppError::config(format!("{ENV_STAMPER_URL} has no host")))?;
        config.stamper.host = host.to_string();
        if let Some(port) = parsed.port() {
            config.stamper.port = port;
        }
    }
    if let Some(interval) = lookup(ENV_POLL_INTERVAL_MS) {
        config.poll.interval_ms = parse_number(ENV_POLL_INTERVAL_MS, &interval)?;
    }
    if let Some(lookback) = lookup(ENV_POLL_LOOKBACK_SECS) {
        config.poll.lookback_secs = parse_number(ENV_POLL_LOOKBACK_SECS, &lookback)?;
    }
    if let Some(port) = lookup(ENV_PORT) {
        config.server.port = parse_number(ENV_PORT, &port)?;
    }
    if let Some(url) = lookup(ENV_CHAT_WEBHOOK_URL) {
        config.notify.chat_webhook_url = Some(url);
    }
    if let Some(url) = lookup(ENV_TASK_API_URL) {
        config.notify.task_api_url = Some(url);
    }
    if let Some(token) = lookup(ENV_TASK_API_TOKEN) {
        config.notify.task_api_token = Some(token);
    }
    if let Some(project) = lookup(ENV_TASK_PROJECT) {
        config.notify.task_project = Some(project);
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::config(format!("{name} must be a number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overlay(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut config = Config::default();
        apply_overrides(&mut config, |key| vars.get(key).cloned())?;
        Ok(config)
    }

    #[test]
    fn test_overlay_feed_settings() {
        let config = overlay(&[
            (ENV_FEED_API_ROOT, "https://api.example.com/"),
            (ENV_FEED_API_KEY, "secret"),
        ])
        .unwrap();
        assert_eq!(config.feed.api_root, "https://api.example.com");
        assert_eq!(config.feed.api_key, "secret");
    }

    #[test]
    fn test_overlay_stamper_url_splits_host_port() {
        let config = overlay(&[(ENV_STAMPER_URL, "http://detector.internal:9000")]).unwrap();
        assert_eq!(config.stamper.host, "detector.internal");
        assert_eq!(config.stamper.port, 9000);
    }

    #[test]
    fn test_overlay_stamper_url_without_port_keeps_default() {
        let config = overlay(&[(ENV_STAMPER_URL, "http://detector.internal")]).unwrap();
        assert_eq!(config.stamper.host, "detector.internal");
        assert_eq!(config.stamper.port, 8080);
    }

    #[test]
    fn test_overlay_rejects_bad_interval() {
        assert!(overlay(&[(ENV_POLL_INTERVAL_MS, "soon")]).is_err());
    }

    #[test]
    fn test_overlay_without_vars_is_noop() {
        let config = overlay(&[]).unwrap();
        assert_eq!(config.poll.interval_ms, 15_000);
        assert!(config.notify.chat_webhook_url.is_none());
    }
}
