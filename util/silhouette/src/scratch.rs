use crate::{camera::ScreenPoint, config::MAX_SILHOUETTE_POINTS, lod::CircleResolution};
use bevy::prelude::*;

/// Largest point cloud any sampler emits: four rings at the finest tier.
pub const MAX_CLOUD_POINTS: usize = CircleResolution::High.segments() * 4;

/// Reusable buffers for sampling and extraction.
///
/// Holding one of these across frames avoids reallocating every draw. Nothing carries over
/// between calls, every buffer is cleared before it is written.
#[derive(Debug, Clone, Default)]
pub struct SilhouetteScratch {
	/// World points written by a sampler.
	pub cloud: Vec<Vec3>,
	/// Projection of `cloud`, index for index.
	pub(crate) screen: Vec<ScreenPoint>,
	/// Cloud indices on the outline, in walk order.
	pub(crate) hull: Vec<usize>,
	/// World points on the outline, in walk order.
	pub(crate) outline: Vec<Vec3>,
}

impl SilhouetteScratch {
	pub fn new() -> Self {
		Self {
			cloud: Vec::with_capacity(MAX_CLOUD_POINTS),
			screen: Vec::with_capacity(MAX_CLOUD_POINTS),
			hull: Vec::with_capacity(MAX_SILHOUETTE_POINTS),
			outline: Vec::with_capacity(MAX_SILHOUETTE_POINTS),
		}
	}

	/// Projections from the last extraction.
	pub fn screen_points(&self) -> &[ScreenPoint] {
		&self.screen
	}

	/// Cloud indices of the last extracted outline.
	pub fn hull_indices(&self) -> &[usize] {
		&self.hull
	}

	/// World points of the last extracted outline.
	pub fn outline(&self) -> &[Vec3] {
		&self.outline
	}
}
