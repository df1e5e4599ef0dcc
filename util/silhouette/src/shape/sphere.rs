use crate::{
	camera::{ScreenCamera, ViewProjection},
	lod::CircleResolution,
	shape::{push_ring, OutlineKind, ShapeSampler},
};
use bevy::prelude::*;

/// The circle along which view rays graze a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereDisc {
	pub center: Vec3,
	/// Unit normal, pointing away from the camera.
	pub normal: Vec3,
	pub radius: f32,
}

impl SphereDisc {
	pub fn push_ring(&self, points: &mut Vec<Vec3>, resolution: CircleResolution) {
		push_ring(points, self.center, self.normal.any_orthonormal_pair(), self.radius, resolution);
	}
}

/// Finds the silhouette circle of a sphere.
///
/// Under an orthographic projection this is the great circle facing the camera. Under a
/// perspective projection the circle of tangency is smaller and closer to the camera. Returns
/// `None` when the camera is inside the sphere.
pub fn sphere_disc(center: Vec3, radius: f32, camera: &ScreenCamera) -> Option<SphereDisc> {
	match camera.projection {
		ViewProjection::Orthographic { .. } => {
			Some(SphereDisc { center, normal: camera.forward(), radius })
		}
		ViewProjection::Perspective { .. } => {
			let offset = center - camera.position;
			let distance = offset.length();
			if distance <= radius {
				return None;
			}
			let normal = offset / distance;
			Some(SphereDisc {
				center: center - normal * (radius * radius / distance),
				normal,
				radius: radius * (distance * distance - radius * radius).sqrt() / distance,
			})
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOutline {
	pub center: Vec3,
	pub radius: f32,
}

impl SphereOutline {
	pub fn new(center: Vec3, radius: f32) -> Self {
		Self { center, radius }
	}
}

impl ShapeSampler for SphereOutline {
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
		self.radius < f32::EPSILON
	}

	fn outline(&self) -> OutlineKind {
		OutlineKind::Disc
	}

	fn sample_into(
		&self,
		camera: &ScreenCamera,
		resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	) {
		points.clear();
		if let Some(disc) = sphere_disc(self.center, self.radius, camera) {
			disc.push_ring(points, resolution);
		}
	}
}
