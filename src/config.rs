use serde::Deserialize;
use std::time::Duration;

use crate::dashboard::LayoutVariant;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dashboard: DashboardConfig,
    pub disk: DiskConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub layout: LayoutVariant,
    /// Fixed sleep after each render; the loop does not compensate for work time.
    pub refresh_interval_ms: u64,
    /// How long the startup banner stays up before live mode takes the screen.
    pub startup_pause_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: LayoutVariant::Full,
            refresh_interval_ms: 500,
            startup_pause_ms: 1000,
        }
    }
}

impl DashboardConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn startup_pause(&self) -> Duration {
        Duration::from_millis(self.startup_pause_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiskConfig {
    /// Path whose backing filesystem is shown in the disk panel.
    pub path: String,
}

impl Default for DiskConfig {
    fn default() -> Self {
        Self { path: "/".into() }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is unset.
    pub level: String,
    /// Append logs here instead of stderr, keeping the live screen clean.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Built-in defaults unless CONFIG_FILE points at a TOML file.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config file {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.dashboard.refresh_interval_ms > 0,
            "dashboard.refresh_interval_ms must be > 0, got {}",
            self.dashboard.refresh_interval_ms
        );
        anyhow::ensure!(!self.disk.path.is_empty(), "disk.path must be non-empty");
        anyhow::ensure!(
            !self.logging.level.is_empty(),
            "logging.level must be non-empty"
        );
        anyhow::ensure!(
            self.logging.file.as_deref() != Some(""),
            "logging.file must be non-empty when set"
        );
        Ok(())
    }
}
