use bevy::{gizmos::config::GizmoConfigGroup, prelude::*};

/// Receives closed world-space polygons.
///
/// The closing edge from the last point back to the first is implicit in both calls.
pub trait SilhouetteSink {
	fn outline(&mut self, points: &[Vec3], color: Color);

	fn fill(&mut self, points: &[Vec3], color: Color);
}

impl<T: SilhouetteSink + ?Sized> SilhouetteSink for &mut T {
	fn outline(&mut self, points: &[Vec3], color: Color) {
		(**self).outline(points, color);
	}

	fn fill(&mut self, points: &[Vec3], color: Color) {
		(**self).fill(points, color);
	}
}

/// Sends every call to both sinks, outline first to `A`.
impl<A: SilhouetteSink, B: SilhouetteSink> SilhouetteSink for (A, B) {
	fn outline(&mut self, points: &[Vec3], color: Color) {
		self.0.outline(points, color);
		self.1.outline(points, color);
	}

	fn fill(&mut self, points: &[Vec3], color: Color) {
		self.0.fill(points, color);
		self.1.fill(points, color);
	}
}

/// The points of `points` followed by its first point again.
///
/// Fewer than two points close nothing and yield an empty strip.
pub fn closed_strip(points: &[Vec3]) -> impl Iterator<Item = Vec3> + '_ {
	let points: &[Vec3] = if points.len() < 2 { &[] } else { points };
	points.iter().copied().chain(points.first().copied())
}

/// Immediate mode lines. Gizmos have no solid primitive, so fills are dropped here and belong in a
/// [`crate::FillMesh`].
impl<Config, Clear> SilhouetteSink for Gizmos<'_, '_, Config, Clear>
where
	Config: GizmoConfigGroup,
	Clear: 'static + Send + Sync,
{
	fn outline(&mut self, points: &[Vec3], color: Color) {
		if points.len() < 2 {
			return;
		}
		self.linestrip(closed_strip(points), color);
	}

	fn fill(&mut self, _points: &[Vec3], _color: Color) {}
}
