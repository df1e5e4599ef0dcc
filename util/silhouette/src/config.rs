use crate::lod::CircleResolution;
use serde::{Deserialize, Serialize};

/// Largest number of distinct vertices any sampled shape can put on its outline.
///
/// A rounded rectangle at the finest tier contributes a quarter circle per corner plus the
/// corner transitions, which is a full 32-gon and four extra vertices.
pub const MAX_SILHOUETTE_POINTS: usize = CircleResolution::High.segments() + 4;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid value for `{field}`: {reason}")]
	Invalid { field: &'static str, reason: String },
}

/// Tuning for the perimeter walk.
///
/// The defaults were picked for editor sized handles; other resolutions or projections
/// may want different values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SilhouetteConfig {
	/// Screen distance (pixels) under which two projected points are treated as one.
	pub closeness_epsilon: f32,
	/// Candidates turning further than this (degrees, either way) are ignored.
	pub max_turn_degrees: f32,
	/// Hard cap on walk iterations.
	pub iteration_budget: usize,
}

impl Default for SilhouetteConfig {
	fn default() -> Self {
		Self {
			closeness_epsilon: 0.1,
			max_turn_degrees: 179.5,
			iteration_budget: MAX_SILHOUETTE_POINTS,
		}
	}
}

impl SilhouetteConfig {
	pub fn with_closeness_epsilon(mut self, closeness_epsilon: f32) -> Self {
		self.closeness_epsilon = closeness_epsilon;
		self
	}

	pub fn with_max_turn_degrees(mut self, max_turn_degrees: f32) -> Self {
		self.max_turn_degrees = max_turn_degrees;
		self
	}

	pub fn with_iteration_budget(mut self, iteration_budget: usize) -> Self {
		self.iteration_budget = iteration_budget;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.closeness_epsilon.is_nan() || self.closeness_epsilon <= 0.0 {
			return Err(ConfigError::Invalid {
				field: "closeness_epsilon",
				reason: format!("must be positive, got {}", self.closeness_epsilon),
			});
		}
		if self.max_turn_degrees.is_nan()
			|| self.max_turn_degrees <= 0.0
			|| self.max_turn_degrees > 180.0
		{
			return Err(ConfigError::Invalid {
				field: "max_turn_degrees",
				reason: format!("must be in (0, 180], got {}", self.max_turn_degrees),
			});
		}
		if self.iteration_budget == 0 {
			return Err(ConfigError::Invalid {
				field: "iteration_budget",
				reason: "must be at least 1".to_string(),
			});
		}
		Ok(())
	}
}
