use serde::{Deserialize, Serialize};
use silhouette::{LodThresholds, SilhouetteConfig, DEFAULT_HANDLE_PIXELS};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read config file {path}: {source}")]
	Io { path: PathBuf, source: std::io::Error },
	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error(transparent)]
	Invalid(#[from] silhouette::ConfigError),
}

/// Everything the painter can be tuned with.
///
/// Every field has a default, so a config file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
	pub silhouette: SilhouetteConfig,
	pub lod: LodThresholds,
	/// Shapes whose extent is below this fraction of the handle size are not drawn.
	pub discard_ratio: f32,
	/// Screen pixels a handle spans.
	pub handle_pixels: f32,
}

impl Default for DrawConfig {
	fn default() -> Self {
		Self {
			silhouette: SilhouetteConfig::default(),
			lod: LodThresholds::default(),
			discard_ratio: 0.01,
			handle_pixels: DEFAULT_HANDLE_PIXELS,
		}
	}
}

impl DrawConfig {
	pub fn with_silhouette(mut self, silhouette: SilhouetteConfig) -> Self {
		self.silhouette = silhouette;
		self
	}

	pub fn with_lod(mut self, lod: LodThresholds) -> Self {
		self.lod = lod;
		self
	}

	pub fn with_discard_ratio(mut self, discard_ratio: f32) -> Self {
		self.discard_ratio = discard_ratio;
		self
	}

	pub fn with_handle_pixels(mut self, handle_pixels: f32) -> Self {
		self.handle_pixels = handle_pixels;
		self
	}

	/// Parses and validates a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)
			.map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
		Self::from_toml_str(&source)
	}

	pub fn validate(&self) -> Result<(), silhouette::ConfigError> {
		self.silhouette.validate()?;
		self.lod.validate()?;
		if self.discard_ratio.is_nan() || self.discard_ratio < 0.0 {
			return Err(silhouette::ConfigError::Invalid {
				field: "discard_ratio",
				reason: format!("must be non-negative, got {}", self.discard_ratio),
			});
		}
		if self.handle_pixels.is_nan() || self.handle_pixels <= 0.0 {
			return Err(silhouette::ConfigError::Invalid {
				field: "handle_pixels",
				reason: format!("must be positive, got {}", self.handle_pixels),
			});
		}
		Ok(())
	}
}
