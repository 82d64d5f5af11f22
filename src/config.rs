//! Runtime configuration from the environment (and an optional `.env`).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;
pub const DEFAULT_LOG_FILE: &str = "ecolearn.log";
pub const DEFAULT_LEADERBOARD_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub reply_delay: Duration,
    pub content_path: Option<PathBuf>,
    pub log_file: PathBuf,
    pub seed: Option<u64>,
    pub leaderboard_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            content_path: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            seed: None,
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    ///
    /// - `ECOLEARN_REPLY_DELAY_MS`: simulated reply latency, default 1500
    /// - `ECOLEARN_CONTENT`: JSON content file, built-in content when unset
    /// - `ECOLEARN_LOG_FILE`: default `ecolearn.log`
    /// - `ECOLEARN_SEED`: fixed seed for reply/tip picks
    /// - `ECOLEARN_LEADERBOARD_SIZE`: default 5
    pub fn from_env() -> anyhow::Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err).context("failed to load .env");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let reply_delay_ms: u64 = parse_var(&lookup, "ECOLEARN_REPLY_DELAY_MS")?.unwrap_or(DEFAULT_REPLY_DELAY_MS);

        Ok(Self {
            reply_delay: Duration::from_millis(reply_delay_ms),
            content_path: lookup("ECOLEARN_CONTENT").filter(|v| !v.trim().is_empty()).map(PathBuf::from),
            log_file: lookup("ECOLEARN_LOG_FILE").map_or(defaults.log_file, PathBuf::from),
            seed: parse_var(&lookup, "ECOLEARN_SEED")?,
            leaderboard_size: parse_var(&lookup, "ECOLEARN_LEADERBOARD_SIZE")?
                .unwrap_or(defaults.leaderboard_size),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> anyhow::Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>().with_context(|| format!("invalid {key}: '{raw}'")))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reply_delay, Duration::from_millis(1500));
        assert_eq!(config.leaderboard_size, 5);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("ECOLEARN_REPLY_DELAY_MS", "250"),
            ("ECOLEARN_CONTENT", "content.json"),
            ("ECOLEARN_LOG_FILE", "/tmp/eco.log"),
            ("ECOLEARN_SEED", "42"),
            ("ECOLEARN_LEADERBOARD_SIZE", " 7 "),
        ]))
        .unwrap();
        assert_eq!(config.reply_delay, Duration::from_millis(250));
        assert_eq!(config.content_path, Some(PathBuf::from("content.json")));
        assert_eq!(config.log_file, PathBuf::from("/tmp/eco.log"));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.leaderboard_size, 7);
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[("ECOLEARN_REPLY_DELAY_MS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("ECOLEARN_REPLY_DELAY_MS"));
    }
}
