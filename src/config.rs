//! Runtime configuration
//!
//! Settings are read once at startup from a JSON file. Every field has a
//! default, so a partial file only overrides what it names and a missing
//! file means "all defaults".
//!
//! Lookup order:
//! - `$BEVYORRERY_CONFIG` if set
//! - the platform config directory:
//!   - macOS: ~/Library/Application Support/bevyorrery/config.json
//!   - Linux: ~/.config/bevyorrery/config.json
//!   - Windows: %APPDATA%\bevyorrery\config\config.json

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "BEVYORRERY_CONFIG";

/// Upper bound on configured stars; each one is an entity.
pub const MAX_STARS: u32 = 20_000;
const MIN_CAMERA_DISTANCE: f32 = 0.1;

/// Orbit camera limits and damping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub initial_distance: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Lowest allowed pitch in radians (negative looks from below the plane).
    pub min_pitch: f32,
    /// Highest allowed pitch in radians.
    pub max_pitch: f32,
    /// 0.0 is instant; values close to 1.0 are very floaty.
    pub smoothness: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            initial_distance: 110.0,
            initial_yaw: 0.0,
            initial_pitch: 0.9,
            min_distance: 8.0,
            max_distance: 260.0,
            min_pitch: -1.2,
            max_pitch: 1.5,
            smoothness: 0.6,
        }
    }
}

/// Starfield generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub count: u32,
    pub seed: u64,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 1500,
            seed: 0x0A17_A12C,
            inner_radius: 320.0,
            outer_radius: 420.0,
        }
    }
}

/// Top-level configuration resource.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Initial multiplier applied to every body's per-tick rates.
    pub time_scale: f32,
    pub start_paused: bool,
    pub show_orbits: bool,
    /// Width of generated surface textures; height is half of it.
    pub texture_size: u32,
    pub ambient_brightness: f32,
    pub sun_light_intensity: f32,
    pub camera: CameraConfig,
    pub starfield: StarfieldConfig,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            start_paused: false,
            show_orbits: true,
            texture_size: 256,
            ambient_brightness: 80.0,
            sun_light_intensity: 400_000_000.0,
            camera: CameraConfig::default(),
            starfield: StarfieldConfig::default(),
        }
    }
}

impl OrreryConfig {
    /// Read a config file.
    ///
    /// Returns Ok(None) if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn read(path: &Path) -> Result<Option<Self>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(Some(config))
    }

    /// Resolve the config path from the environment or the platform directory.
    pub fn default_path() -> Result<PathBuf, anyhow::Error> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let proj_dirs = ProjectDirs::from("", "", "bevyorrery")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Load the configuration, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(err) => {
                warn!("Config: {err}; using defaults");
                return Self::default();
            }
        };

        match Self::read(&path) {
            Ok(Some(config)) => {
                info!("Config: loaded {}", path.display());
                config.sanitized()
            }
            Ok(None) => {
                debug!("Config: {} not found; using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("Config: failed to load {}: {err}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Repair values that would break the scene instead of rejecting the file.
    pub fn sanitized(mut self) -> Self {
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            self.time_scale = 1.0;
        }
        self.texture_size = self.texture_size.clamp(16, 4096);
        self.starfield.count = self.starfield.count.min(MAX_STARS);

        let cam = &mut self.camera;
        if cam.max_distance < cam.min_distance {
            std::mem::swap(&mut cam.min_distance, &mut cam.max_distance);
        }
        cam.min_distance = cam.min_distance.max(MIN_CAMERA_DISTANCE);
        cam.max_distance = cam.max_distance.max(cam.min_distance);
        cam.initial_distance = cam.initial_distance.clamp(cam.min_distance, cam.max_distance);
        if cam.max_pitch < cam.min_pitch {
            std::mem::swap(&mut cam.min_pitch, &mut cam.max_pitch);
        }
        let limit = std::f32::consts::FRAC_PI_2;
        cam.min_pitch = cam.min_pitch.clamp(-limit, limit);
        cam.max_pitch = cam.max_pitch.clamp(-limit, limit);
        cam.initial_pitch = cam.initial_pitch.clamp(cam.min_pitch, cam.max_pitch);
        cam.smoothness = cam.smoothness.clamp(0.0, 0.99);
        self
    }
}
