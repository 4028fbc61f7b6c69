//! Runtime configuration.
//!
//! Values come from environment variables first, then command-line flags
//! override them:
//!
//! - `TETRIS_SEED` / `--seed <n>`: generator seed (defaults to the system clock)
//! - `TETRIS_NO_COLOR` / `--no-color`: disable ANSI colors (`1` or `true`)
//! - `TETRIS_LOG`: tracing filter directive (default `warn`)

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub color: bool,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED").and_then(|s| s.trim().parse().ok());

        let color = !lookup("TETRIS_NO_COLOR")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let log_filter = lookup("TETRIS_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            color,
            log_filter,
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    let seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                    self.seed = Some(seed);
                }
                "--no-color" => {
                    self.color = false;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    /// Configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = AppConfig::from_lookup(|_| None);
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn reads_env_values() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", " 42 "),
            ("TETRIS_NO_COLOR", "TRUE"),
            ("TETRIS_LOG", "tetris_reserve_core=debug"),
        ]));
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.color);
        assert_eq!(cfg.log_filter, "tetris_reserve_core=debug");
    }

    #[test]
    fn ignores_bad_env_seed_and_blank_filter() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("TETRIS_SEED", "not-a-number"),
            ("TETRIS_LOG", "   "),
        ]));
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn args_override_env() {
        let cfg = AppConfig::default()
            .apply_args(&args(&["--seed", "7", "--no-color"]))
            .unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert!(!cfg.color);
        assert_eq!(cfg.resolve_seed(), 7);
    }

    #[test]
    fn args_errors() {
        assert!(AppConfig::default().apply_args(&args(&["--seed"])).is_err());
        assert!(AppConfig::default()
            .apply_args(&args(&["--seed", "x"]))
            .is_err());
        assert!(AppConfig::default().apply_args(&args(&["--fast"])).is_err());
    }
}
