// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Everything a single run needs to know.
///
/// Layering: compiled defaults → environment (`LEADERBOARD_*`) → CLI flags
/// (applied by `cli::parse_args` on top of whatever this returns).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub out_dir: PathBuf,
    pub json_name: String,
    pub html_name: String,
    pub timeout: Duration,
    pub offline: bool,
    pub verbosity: Verbosity,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            json_name: s!(DEFAULT_JSON_NAME),
            html_name: s!(DEFAULT_HTML_NAME),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            offline: false,
            verbosity: Verbosity::Normal,
        }
    }
}

impl RunOptions {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `LEADERBOARD_*` keys.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut opts = Self::default();

        if let Some(dir) = get(ENV_OUT_DIR) {
            opts.out_dir = PathBuf::from(dir);
        }
        if let Some(name) = get(ENV_JSON_NAME) {
            opts.json_name = checked_file_name(ENV_JSON_NAME, name)?;
        }
        if let Some(name) = get(ENV_HTML_NAME) {
            opts.html_name = checked_file_name(ENV_HTML_NAME, name)?;
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            opts.timeout = parse_timeout(&secs)?;
        }
        if let Some(flag) = get(ENV_OFFLINE) {
            opts.offline = parse_flag(ENV_OFFLINE, &flag)?;
        }
        Ok(opts)
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(&self.json_name)
    }

    pub fn html_path(&self) -> PathBuf {
        self.out_dir.join(&self.html_name)
    }
}

pub fn parse_timeout(s: &str) -> Result<Duration> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| Error::Options(format!("timeout must be whole seconds, got {s:?}")))?;
    if secs == 0 {
        return Err(Error::Options(s!("timeout must be at least 1 second")));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_flag(key: &str, v: &str) -> Result<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Options(format!("{key}: expected a boolean, got {other:?}"))),
    }
}

// File names only; directories go through LEADERBOARD_OUT_DIR.
fn checked_file_name(key: &str, name: String) -> Result<String> {
    if name.contains('/') || name.contains('\\') {
        return Err(Error::Options(format!("{key}: {name:?} must be a file name, not a path")));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let opts = RunOptions::from_lookup(lookup(&[])).unwrap();
        assert_eq!(opts, RunOptions::default());
        assert_eq!(opts.json_path(), PathBuf::from("output").join("latest_data.json"));
    }

    #[test]
    fn environment_overrides_paths_and_flags() {
        let opts = RunOptions::from_lookup(lookup(&[
            (ENV_OUT_DIR, "site/public"),
            (ENV_HTML_NAME, "index.html"),
            (ENV_TIMEOUT_SECS, " 5 "),
            (ENV_OFFLINE, "TRUE"),
        ]))
        .unwrap();
        assert_eq!(opts.html_path(), PathBuf::from("site/public").join("index.html"));
        assert_eq!(opts.json_name, DEFAULT_JSON_NAME);
        assert_eq!(opts.timeout, Duration::from_secs(5));
        assert!(opts.offline);
    }

    #[test]
    fn blank_values_are_ignored() {
        let opts = RunOptions::from_lookup(lookup(&[(ENV_OUT_DIR, "   "), (ENV_OFFLINE, "")])).unwrap();
        assert_eq!(opts.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert!(!opts.offline);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(RunOptions::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).is_err());
        assert!(RunOptions::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).is_err());
        assert!(RunOptions::from_lookup(lookup(&[(ENV_OFFLINE, "maybe")])).is_err());
        assert!(RunOptions::from_lookup(lookup(&[(ENV_JSON_NAME, "a/b.json")])).is_err());
    }
}
