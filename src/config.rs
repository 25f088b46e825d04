//! Settings with layered sources.
//!
//! Loading flow:
//! 1. Start with compiled [`Settings::default()`]
//! 2. If the settings file exists, its values replace the defaults per key
//! 3. Apply `SP0256_*` environment variable overrides (highest priority)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Runtime settings for the command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Device node of the chip's serial line.
    pub device: PathBuf,
    /// Line speed of the serial port.
    pub baud: u32,
    /// How long one poll for an incoming byte lasts.
    pub read_timeout_ms: u64,
    /// How long to wait for each echoed byte. `0` waits forever.
    pub echo_timeout_ms: u64,
    /// Zero bytes sent during the wake handshake before giving up.
    pub wake_attempts: u32,
    /// JSON rule table replacing the built-in rules.
    pub rules: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device: PathBuf::from("/dev/ttyACM0"),
            baud: 115_200,
            read_timeout_ms: 1,
            echo_timeout_ms: 2000,
            wake_attempts: 10_000,
            rules: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms.max(1))
    }

    /// `None` when echoes are awaited without limit.
    #[must_use]
    pub fn echo_timeout(&self) -> Option<Duration> {
        (self.echo_timeout_ms > 0).then(|| Duration::from_millis(self.echo_timeout_ms))
    }
}

/// Resolve the path to the settings file (`~/.sp0256/settings.json`).
pub fn settings_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".sp0256").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<Settings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    load_settings_from_path_with_env(path, |name| std::env::var(name).ok())
}

/// [`load_settings_from_path`] with environment variables read through `var`.
pub fn load_settings_from_path_with_env<F>(path: &Path, var: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    } else {
        debug!(?path, "settings file not found, using defaults");
        Settings::default()
    };
    apply_env_overrides(&mut settings, var);
    Ok(settings)
}

/// Apply environment overrides, read through `var`.
///
/// Values that do not parse are ignored.
pub fn apply_env_overrides<F>(settings: &mut Settings, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| var(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = read("SP0256_DEVICE") {
        settings.device = PathBuf::from(v);
    }
    if let Some(v) = read("SP0256_BAUD").and_then(|v| v.trim().parse().ok()) {
        settings.baud = v;
    }
    if let Some(v) = read("SP0256_READ_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
        settings.read_timeout_ms = v;
    }
    if let Some(v) = read("SP0256_ECHO_TIMEOUT_MS").and_then(|v| v.trim().parse().ok()) {
        settings.echo_timeout_ms = v;
    }
    if let Some(v) = read("SP0256_WAKE_ATTEMPTS").and_then(|v| v.trim().parse().ok()) {
        settings.wake_attempts = v;
    }
    if let Some(v) = read("SP0256_RULES") {
        settings.rules = Some(PathBuf::from(v));
    }
}
