use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::gallery::ResourceSlot;
use crate::scene::ScenePreset;

const DEFAULT_TITLE: &str = "pixel gallery";
const DEFAULT_WIDTH: u32 = 640;
const DEFAULT_HEIGHT: u32 = 480;
const DEFAULT_MEDIA_DIR: &str = "media";

/// Title and size of the window to open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Image file for each gallery slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaPaths {
    pub default: PathBuf,
    pub up: PathBuf,
    pub down: PathBuf,
    pub left: PathBuf,
    pub right: PathBuf,
}

impl MediaPaths {
    /// Standard file names under a media directory
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            default: dir.join("press.png"),
            up: dir.join("up.png"),
            down: dir.join("down.png"),
            left: dir.join("left.png"),
            right: dir.join("right.png"),
        }
    }

    pub fn for_slot(&self, slot: ResourceSlot) -> &Path {
        match slot {
            ResourceSlot::Default => &self.default,
            ResourceSlot::Up => &self.up,
            ResourceSlot::Down => &self.down,
            ResourceSlot::Left => &self.left,
            ResourceSlot::Right => &self.right,
        }
    }
}

impl Default for MediaPaths {
    fn default() -> Self {
        Self::from_dir(Path::new(DEFAULT_MEDIA_DIR))
    }
}

/// Window, scene and media settings for one run
///
/// Defaults < config file < command line, most specific wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub media: MediaPaths,
}

/// Scene selection wrapper so the config file reads as `"scene": "gallery"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneConfig(pub ScenePreset);

impl Default for SceneConfig {
    fn default() -> Self {
        Self(ScenePreset::Gallery)
    }
}

impl AppConfig {
    /// Parse a JSON config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Resolve the effective config from the command line
    ///
    /// Loads the `--config` file when given, then lets the remaining flags
    /// override individual fields.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(title) = &cli.title {
            self.window.title = title.clone();
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
        if let Some(scene) = cli.scene {
            self.scene = SceneConfig(scene);
        }
        if let Some(dir) = &cli.media_dir {
            self.media = MediaPaths::from_dir(dir);
        }
    }
}
