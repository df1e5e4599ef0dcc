use crate::config::ConfigError;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Number of points used to approximate a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CircleResolution {
	Low,
	Medium,
	High,
}

impl CircleResolution {
	pub const fn segments(self) -> usize {
		match self {
			CircleResolution::Low => 8,
			CircleResolution::Medium => 16,
			CircleResolution::High => 32,
		}
	}

	/// Unit circle vertices, counter-clockwise, starting one step past +X and ending on +X.
	pub fn unit_circle(self) -> impl Iterator<Item = Vec2> {
		let segments = self.segments();
		(1..=segments).map(move |i| {
			let angle = TAU * i as f32 / segments as f32;
			Vec2::new(angle.cos(), angle.sin())
		})
	}
}

/// Thresholds on `handle size / detail size` that pick a [`CircleResolution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodThresholds {
	/// Below this ratio the finest tier is used.
	pub high_definition: f32,
	/// Below this ratio (and above `high_definition`) the medium tier is used.
	pub mid_definition: f32,
}

impl Default for LodThresholds {
	fn default() -> Self {
		Self { high_definition: 1.0, mid_definition: 4.0 }
	}
}

impl LodThresholds {
	/// Picks a tier from the handle size at the shape and the size of its curved feature.
	///
	/// A shape that is large compared to the handle is large on screen and gets more points.
	pub fn select(&self, handle_size: f32, detail_size: f32) -> CircleResolution {
		let ratio = handle_size / detail_size;
		if ratio < self.high_definition {
			CircleResolution::High
		} else if ratio < self.mid_definition {
			CircleResolution::Medium
		} else {
			CircleResolution::Low
		}
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.high_definition.is_nan() || self.high_definition < 0.0 {
			return Err(ConfigError::Invalid {
				field: "high_definition",
				reason: format!("must be non-negative, got {}", self.high_definition),
			});
		}
		if self.mid_definition.is_nan() || self.mid_definition <= self.high_definition {
			return Err(ConfigError::Invalid {
				field: "mid_definition",
				reason: format!(
					"must be above high_definition ({}), got {}",
					self.high_definition, self.mid_definition
				),
			});
		}
		Ok(())
	}
}
