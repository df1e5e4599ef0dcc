use crate::{
	camera::ScreenCamera,
	lod::CircleResolution,
	shape::{sphere::sphere_disc, ShapeSampler},
};
use bevy::prelude::*;

/// A capsule between the centers of its two end spheres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleOutline {
	pub start: Vec3,
	pub end: Vec3,
	pub radius: f32,
}

impl CapsuleOutline {
	pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
		Self { start, end, radius }
	}

	/// A capsule centered on `center`, `height` long from tip to tip along `direction`.
	///
	/// A height below the diameter leaves a sphere.
	pub fn from_axis(center: Vec3, direction: Vec3, height: f32, radius: f32) -> Self {
		let direction = direction.normalize_or(Vec3::Y);
		let half_length = (height - radius * 2.0).max(0.0) * 0.5;
		Self::new(center - direction * half_length, center + direction * half_length, radius)
	}

	pub fn center(&self) -> Vec3 {
		(self.start + self.end) * 0.5
	}
}

impl ShapeSampler for CapsuleOutline {
	fn anchor(&self) -> Vec3 {
		self.center()
	}

	fn extent(&self) -> f32 {
		self.start.distance(self.end) + self.radius * 2.0
	}

	fn detail_size(&self) -> Option<f32> {
		Some(self.radius * 2.0)
	}

	fn is_degenerate(&self) -> bool {
		self.radius < f32::EPSILON
	}

	/// Writes the silhouette circles of both end spheres, start first.
	fn sample_into(
		&self,
		camera: &ScreenCamera,
		resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	) {
		points.clear();
		let (Some(start), Some(end)) = (
			sphere_disc(self.start, self.radius, camera),
			sphere_disc(self.end, self.radius, camera),
		) else {
			return;
		};
		start.push_ring(points, resolution);
		end.push_ring(points, resolution);
	}
}
