use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Size;
use crate::screen::FixedScreen;

const APP_DIR: &str = "kukaku";
const SETTINGS_FILE: &str = "settings.json";
const APPLIED_LAYOUT_FILE: &str = "applied-layout.json";

/// Editor context: the live work area, the display it sits on and where the
/// tiling engine picks up an applied layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub work_area: Size,
    pub screen: Option<Size>,
    pub applied_layout_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_area: Size::new(1920, 1080),
            screen: None,
            applied_layout_path: default_applied_layout_path(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;

        tracing::info!("Settings loaded from {}", path.display());
        Ok(settings)
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn with_overrides(
        mut self,
        work_area: Option<Size>,
        screen: Option<Size>,
        applied_layout_path: Option<PathBuf>,
    ) -> Self {
        if let Some(work_area) = work_area {
            self.work_area = work_area;
        }
        if screen.is_some() {
            self.screen = screen;
        }
        if let Some(path) = applied_layout_path {
            self.applied_layout_path = path;
        }
        self
    }

    pub fn screen_info(&self) -> FixedScreen {
        FixedScreen(self.screen)
    }
}

fn default_applied_layout_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(std::env::temp_dir)
        .join(APPLIED_LAYOUT_FILE)
}
