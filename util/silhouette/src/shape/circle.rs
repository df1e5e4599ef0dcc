use crate::{
	camera::ScreenCamera,
	lod::CircleResolution,
	shape::{push_ring, OutlineKind, ShapeSampler},
};
use bevy::prelude::*;

/// A flat disc facing `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleOutline {
	pub center: Vec3,
	pub normal: Vec3,
	pub radius: f32,
}

impl CircleOutline {
	pub fn new(center: Vec3, normal: Vec3, radius: f32) -> Self {
		Self { center, normal, radius }
	}
}

impl ShapeSampler for CircleOutline {
	fn anchor(&self) -> Vec3 {
		self.center
	}

	fn extent(&self) -> f32 {
		self.radius * 2.0
	}

	fn detail_size(&self) -> Option<f32> {
		Some(self.radius * 2.0)
	}

	fn is_degenerate(&self) -> bool {
		self.radius < f32::EPSILON || self.normal.length_squared() < f32::EPSILON
	}

	fn outline(&self) -> OutlineKind {
		OutlineKind::Disc
	}

	fn sample_into(
		&self,
		_camera: &ScreenCamera,
		resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	) {
		points.clear();
		let Some(normal) = self.normal.try_normalize() else {
			return;
		};
		push_ring(points, self.center, normal.any_orthonormal_pair(), self.radius, resolution);
	}
}
