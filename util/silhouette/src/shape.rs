pub mod capsule;
pub mod circle;
pub mod cuboid;
pub mod rect;
pub mod sphere;

pub use capsule::CapsuleOutline;
pub use circle::CircleOutline;
pub use cuboid::BoxOutline;
pub use rect::{CapsuleAxis, FlatCapsuleOutline, RoundedRectOutline};
pub use sphere::{sphere_disc, SphereDisc, SphereOutline};

use crate::{camera::ScreenCamera, lod::CircleResolution};
use bevy::prelude::*;

/// How the samples of a shape become a drawable outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutlineKind {
	/// Unordered cloud, the outline is extracted from it.
	ConvexHull,
	/// Samples already form a closed convex polygon.
	Polygon,
	/// Samples already form a closed ring around a solid disc.
	Disc,
}

/// A shape that can be turned into a world-space point cloud whose screen-space convex hull is
/// the shape's silhouette.
pub trait ShapeSampler {
	/// Point the handle size is measured at.
	fn anchor(&self) -> Vec3;

	/// Overall size of the shape, compared against the handle size to discard tiny shapes.
	fn extent(&self) -> f32;

	/// Size of the curved feature that drives the level of detail.
	///
	/// Shapes without curves return `None` and are sampled the same at any distance.
	fn detail_size(&self) -> Option<f32> {
		None
	}

	/// True when the shape has no area worth drawing.
	fn is_degenerate(&self) -> bool;

	fn outline(&self) -> OutlineKind {
		OutlineKind::ConvexHull
	}

	/// Clears `points` and writes the samples of the shape as seen by `camera`.
	///
	/// Shapes the camera cannot see at all (the camera is inside a sphere) write nothing.
	fn sample_into(
		&self,
		camera: &ScreenCamera,
		resolution: CircleResolution,
		points: &mut Vec<Vec3>,
	);
}

/// Appends a ring of `radius` around `center`, in the plane spanned by `u` and `v`.
pub(crate) fn push_ring(
	points: &mut Vec<Vec3>,
	center: Vec3,
	(u, v): (Vec3, Vec3),
	radius: f32,
	resolution: CircleResolution,
) {
	points.extend(resolution.unit_circle().map(|p| center + (u * p.x + v * p.y) * radius));
}
