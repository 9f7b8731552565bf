//! Drawer configuration persistence
//!
//! Stores tunables in `~/.config/drawer-stack/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunable layout and animation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    /// Horizontal shift of the drawer directly behind the foreground one
    pub offset_unit: i32,
    /// Additional shift for each drawer further back
    pub secondary_step: i32,
    /// z-index of the drawer at position 0
    pub base_z: i32,
    /// Panel width in logical pixels
    pub panel_width: u32,
    /// Opacity applied to drawers that are not on top
    pub background_opacity: f32,
    /// Width of the clickable edge strip on background drawers
    pub hotspot_width: u32,
    /// How long closed content stays mounted for its exit animation (0 = unmount at once)
    pub exit_animation_ms: u64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            offset_unit: 60,
            secondary_step: 10,
            base_z: 1200,
            panel_width: 720,
            background_opacity: 0.85,
            hotspot_width: 12,
            exit_animation_ms: 0,
        }
    }
}

impl DrawerConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp values a hand-edited file may have put out of range
    fn sanitized(mut self) -> Self {
        self.background_opacity = self.background_opacity.clamp(0.0, 1.0);
        self
    }
}
