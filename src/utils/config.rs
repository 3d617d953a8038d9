//! Converter configuration

use crate::selector::{Dimension, SizeLadder, DEFAULT_LADDER};
use crate::utils::error::IcoForgeError;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Converter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    /// Candidate frame sizes, largest first
    pub ladder: Vec<Dimension>,

    /// Base name of the batch destination folder
    pub output_dir_name: String,

    /// Maximum files converted at the same time during a batch
    pub max_concurrent: usize,

    /// Resampling filter used to downscale frames
    pub resize_filter: ResizeFilter,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            ladder: DEFAULT_LADDER.to_vec(),
            output_dir_name: "_ICO".to_string(),
            max_concurrent: 1,
            resize_filter: ResizeFilter::Lanczos3,
        }
    }
}

/// Resampling filter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResizeFilter {
    pub fn as_filter_type(self) -> FilterType {
        match self {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }

    /// Parse a filter name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "nearest" => Some(ResizeFilter::Nearest),
            "triangle" => Some(ResizeFilter::Triangle),
            "catmullrom" | "catmull-rom" => Some(ResizeFilter::CatmullRom),
            "gaussian" => Some(ResizeFilter::Gaussian),
            "lanczos3" | "lanczos" => Some(ResizeFilter::Lanczos3),
            _ => None,
        }
    }
}

impl ConverterSettings {
    /// Load settings from an explicit file, the per-user default file, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, IcoForgeError> {
        let settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_settings_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => {
                    debug!("No settings file found, using defaults");
                    Self::default()
                }
            },
        };
        settings.validate()
    }

    pub fn from_file(path: &Path) -> Result<Self, IcoForgeError> {
        debug!("Loading settings from {:?}", path);
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Check invariants and clamp soft limits
    pub fn validate(mut self) -> Result<Self, IcoForgeError> {
        SizeLadder::new(self.ladder.clone())?;

        let name = self.output_dir_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(IcoForgeError::InvalidConfig(format!(
                "output_dir_name {:?} is not a plain folder name",
                self.output_dir_name
            )));
        }
        self.output_dir_name = name.to_string();

        if self.max_concurrent == 0 {
            self.max_concurrent = 1;
        }

        Ok(self)
    }

    pub fn size_ladder(&self) -> Result<SizeLadder, IcoForgeError> {
        SizeLadder::new(self.ladder.clone())
    }
}

/// `<config dir>/icoforge/settings.json`, if the platform has a config dir
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("icoforge").join("settings.json"))
}
