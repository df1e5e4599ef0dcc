//! Flat shapes lying in the local XY plane of their rotation.

use crate::{
	camera::ScreenCamera,
	lod::CircleResolution,
	shape::{push_ring, OutlineKind, ShapeSampler},
};
use bevy::prelude::*;

const RECT_CORNERS: [Vec2; 4] =
	[Vec2::new(-1.0, -1.0), Vec2::new(-1.0, 1.0), Vec2::new(1.0, 1.0), Vec2::new(1.0, -1.0)];

/// A rectangle, optionally grown by a rounding radius around its corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectOutline {
	pub center: Vec3,
	pub rotation: Quat,
	pub half_extents: Vec2,
	pub corner_radius: f32,
}

impl RoundedRectOutline {
	pub fn new(center: Vec3, rotation: Quat, half_extents: Vec2) -> Self {
		Self { center, rotation, half_extents, corner_radius: 0.0 }
	}

	pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
		self.corner_radius = corner_radius;
		self
	}

	fn is_rounded(&self) -> bool {
		self.corner_radius > 0.0
	}

	pub fn corners(&self) -> impl Iterator<Item = Vec3> + '_ {
		RECT_CORNERS
			.iter()
			.map(|corner| self.center + self.rotation * (*corner * self.half_extents).extend(0.0))
	}
}

impl ShapeSampler for RoundedRectOutline {
	fn anchor(&self) -> Vec3 {
		self.center
	}

	fn extent(&self) -> f32 {
		(self.half_extents * 2.0).length() + self.corner_radius.max(0.0) * 2.0
	}

	fn detail_size(&self) -> Option<f32> {
		self.is_rounded().then_some(self.corner_radius * 2.0)
	}

	fn is_degenerate(&self) -> bool {
		self.extent() < f32::EPSILON
	}

	fn outline(&self) -> OutlineKind {
		if self.is_rounded() {
			OutlineKind::ConvexHull
		} else {
			OutlineKind::Polygon
		}
	}

	/// Writes the four corners, or a ring around each corner when rounded.
	fn sample_into(
		&self,
		_camera: &ScreenCamera,
		resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	) {
		points.clear();
		if !self.is_rounded() {
			points.extend(self.corners());
			return;
		}

		let basis = (self.rotation * Vec3::X, self.rotation * Vec3::Y);
		for corner in self.corners() {
			push_ring(points, corner, basis, self.corner_radius, resolution);
		}
	}
}

/// Which local axis a [`FlatCapsuleOutline`] is elongated along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapsuleAxis {
	#[default]
	Vertical,
	Horizontal,
}

/// A stadium: a rectangle capped by half circles on its short sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCapsuleOutline {
	pub center: Vec3,
	pub rotation: Quat,
	pub half_extents: Vec2,
	pub axis: CapsuleAxis,
}

impl FlatCapsuleOutline {
	pub fn new(center: Vec3, rotation: Quat, half_extents: Vec2, axis: CapsuleAxis) -> Self {
		Self { center, rotation, half_extents, axis }
	}

	pub fn radius(&self) -> f32 {
		match self.axis {
			CapsuleAxis::Vertical => self.half_extents.x,
			CapsuleAxis::Horizontal => self.half_extents.y,
		}
	}

	/// Local offset from the center to the center of either cap.
	fn cap_offset(&self) -> Vec2 {
		let half_length = (match self.axis {
			CapsuleAxis::Vertical => self.half_extents.y,
			CapsuleAxis::Horizontal => self.half_extents.x,
		} - self.radius())
		.max(0.0);

		match self.axis {
			CapsuleAxis::Vertical => Vec2::new(0.0, half_length),
			CapsuleAxis::Horizontal => Vec2::new(half_length, 0.0),
		}
	}
}

impl ShapeSampler for FlatCapsuleOutline {
	fn anchor(&self) -> Vec3 {
		self.center
	}

	fn extent(&self) -> f32 {
		(self.half_extents * 2.0).length()
	}

	fn detail_size(&self) -> Option<f32> {
		Some(self.radius() * 2.0)
	}

	fn is_degenerate(&self) -> bool {
		self.half_extents.min_element() < f32::EPSILON
	}

	/// Writes a ring around each cap center. A capsule no longer than it is wide is a circle and
	/// writes a single ring.
	fn sample_into(
		&self,
		_camera: &ScreenCamera,
		resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	) {
		points.clear();
		let basis = (self.rotation * Vec3::X, self.rotation * Vec3::Y);
		let offset = self.cap_offset();

		if offset == Vec2::ZERO {
			push_ring(points, self.center, basis, self.radius(), resolution);
			return;
		}
		for side in [-1.0, 1.0] {
			let cap = self.center + self.rotation * (offset * side).extend(0.0);
			push_ring(points, cap, basis, self.radius(), resolution);
		}
	}
}
