use crate::{camera::ScreenCamera, lod::CircleResolution, shape::ShapeSampler};
use bevy::prelude::*;

/// Corners of the unit cube, bottom face first.
const CORNERS: [Vec3; 8] = [
	Vec3::new(-1.0, -1.0, -1.0),
	Vec3::new(-1.0, 1.0, -1.0),
	Vec3::new(1.0, 1.0, -1.0),
	Vec3::new(1.0, -1.0, -1.0),
	Vec3::new(-1.0, -1.0, 1.0),
	Vec3::new(-1.0, 1.0, 1.0),
	Vec3::new(1.0, 1.0, 1.0),
	Vec3::new(1.0, -1.0, 1.0),
];

/// An oriented box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxOutline {
	pub center: Vec3,
	pub rotation: Quat,
	pub half_extents: Vec3,
}

impl BoxOutline {
	pub fn new(center: Vec3, rotation: Quat, half_extents: Vec3) -> Self {
		Self { center, rotation, half_extents }
	}

	/// The unit cube placed by `transform`.
	pub fn from_transform(transform: &Transform) -> Self {
		Self::new(transform.translation, transform.rotation, transform.scale * 0.5)
	}

	pub fn corners(&self) -> impl Iterator<Item = Vec3> + '_ {
		CORNERS.iter().map(|corner| self.center + self.rotation * (*corner * self.half_extents))
	}
}

impl ShapeSampler for BoxOutline {
	fn anchor(&self) -> Vec3 {
		self.center
	}

	fn extent(&self) -> f32 {
		(self.half_extents * 2.0).length()
	}

	fn is_degenerate(&self) -> bool {
		self.extent() < f32::EPSILON
	}

	fn sample_into(
		&self,
		_camera: &ScreenCamera,
		_resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	) {
		points.clear();
		points.extend(self.corners());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		config::SilhouetteConfig,
		extract::extract_silhouette,
		shape::test_cameras::{orthographic_from, perspective_from},
	};

	#[test]
	fn test_corners() {
		let shape =
			BoxOutline::new(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY, Vec3::new(0.5, 1.0, 2.0));
		let mut points = Vec::new();
		shape.sample_into(&orthographic_from(Vec3::Z * 10.0), CircleResolution::Low, &mut points);

		assert_eq!(points.len(), 8);
		assert!(points[0].abs_diff_eq(Vec3::new(0.5, 1.0, 1.0), 1e-6));
		assert!(points[6].abs_diff_eq(Vec3::new(1.5, 3.0, 5.0), 1e-6));
	}

	#[test]
	fn test_from_transform() {
		let transform = Transform::from_xyz(0.0, 1.0, 0.0)
			.with_rotation(Quat::from_rotation_y(0.3))
			.with_scale(Vec3::new(2.0, 4.0, 6.0));
		let shape = BoxOutline::from_transform(&transform);

		assert_eq!(shape.half_extents, Vec3::new(1.0, 2.0, 3.0));
		assert_eq!(shape.center, Vec3::Y);
		assert!((shape.extent() - Vec3::new(2.0, 4.0, 6.0).length()).abs() < 1e-5);
	}

	#[test]
	fn test_degenerate() {
		assert!(BoxOutline::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ZERO).is_degenerate());
		// a flat box still has an outline
		let flat = BoxOutline::new(Vec3::ZERO, Quat::IDENTITY, Vec3::new(1.0, 1.0, 0.0));
		assert!(!flat.is_degenerate());
	}

	#[test]
	fn test_corner_view_is_hexagon() {
		let shape = BoxOutline::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE);
		let mut points = Vec::new();
		let camera = orthographic_from(Vec3::splat(5.0));
		shape.sample_into(&camera, CircleResolution::Low, &mut points);

		let silhouette =
			extract_silhouette(&points, &camera, &SilhouetteConfig::default()).unwrap();

		// the nearest and farthest corners project inside the outline
		assert_eq!(silhouette.len(), 6);
		assert!(!silhouette.indices.contains(&0));
		assert!(!silhouette.indices.contains(&6));
	}

	#[test]
	fn test_perspective_outline_is_subset() {
		let shape =
			BoxOutline::new(Vec3::ZERO, Quat::from_rotation_y(0.4), Vec3::new(1.0, 0.5, 1.5));
		let mut points = Vec::new();
		let camera = perspective_from(Vec3::new(3.0, 4.0, 8.0));
		shape.sample_into(&camera, CircleResolution::Low, &mut points);

		let silhouette =
			extract_silhouette(&points, &camera, &SilhouetteConfig::default()).unwrap();

		assert!((4..=6).contains(&silhouette.len()));
		for (point, index) in silhouette.points.iter().zip(&silhouette.indices) {
			assert_eq!(*point, points[*index]);
		}
	}
}
