//! Screen-space silhouette extraction.
//!
//! Points are projected through the camera and the outline is found by gift wrapping: start from
//! the leftmost visible point and keep stepping to the point that turns least from the current
//! direction, until the walk arrives back at the start.

use crate::{
	camera::{ScreenCamera, ScreenPoint},
	config::SilhouetteConfig,
	scratch::SilhouetteScratch,
};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SilhouetteError {
	#[error("point cloud is empty")]
	EmptyPointCloud,
	#[error("no point lies in front of the camera")]
	NoVisiblePoint,
	#[error("perimeter walk found no next point after cloud index {vertex}")]
	Stalled { vertex: usize },
	#[error("perimeter walk did not close within {budget} iterations")]
	IterationBudgetExceeded { budget: usize },
}

/// An extracted outline: cloud points in perimeter order.
///
/// The closing edge from the last point back to the first is implicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Silhouette {
	pub points: Vec<Vec3>,
	/// Index of every outline point in the source cloud.
	pub indices: Vec<usize>,
}

impl Silhouette {
	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

/// Extracts the outline of `points` as seen by `camera`.
pub fn extract_silhouette(
	points: &[Vec3],
	camera: &ScreenCamera,
	config: &SilhouetteConfig,
) -> Result<Silhouette, SilhouetteError> {
	let mut screen = Vec::with_capacity(points.len());
	let mut hull = Vec::new();
	let mut outline = Vec::new();
	extract_with(points, camera, config, &mut screen, &mut hull, &mut outline)?;
	Ok(Silhouette { points: outline, indices: hull })
}

/// Same as [`extract_silhouette`], writing into reusable buffers.
pub fn extract_silhouette_into<'s>(
	points: &[Vec3],
	camera: &ScreenCamera,
	config: &SilhouetteConfig,
	scratch: &'s mut SilhouetteScratch,
) -> Result<&'s [Vec3], SilhouetteError> {
	let SilhouetteScratch { screen, hull, outline, .. } = scratch;
	extract_with(points, camera, config, screen, hull, outline)?;
	Ok(outline.as_slice())
}

impl SilhouetteScratch {
	/// Extracts the outline of the cloud currently held in [`SilhouetteScratch::cloud`].
	pub fn extract_cloud(
		&mut self,
		camera: &ScreenCamera,
		config: &SilhouetteConfig,
	) -> Result<&[Vec3], SilhouetteError> {
		let SilhouetteScratch { cloud, screen, hull, outline } = self;
		extract_with(cloud, camera, config, screen, hull, outline)?;
		Ok(outline.as_slice())
	}
}

fn extract_with(
	points: &[Vec3],
	camera: &ScreenCamera,
	config: &SilhouetteConfig,
	screen: &mut Vec<ScreenPoint>,
	hull: &mut Vec<usize>,
	outline: &mut Vec<Vec3>,
) -> Result<(), SilhouetteError> {
	hull.clear();
	outline.clear();

	if points.is_empty() {
		return Err(SilhouetteError::EmptyPointCloud);
	}

	project(points, camera, screen);
	let start = leftmost(screen).ok_or(SilhouetteError::NoVisiblePoint)?;

	if let Err(error) = walk(screen, start, Vec2::X, config, hull) {
		log::trace!("silhouette extraction of {} points failed: {}", points.len(), error);
		hull.clear();
		return Err(error);
	}

	outline.extend(hull.iter().map(|&index| points[index]));
	Ok(())
}

/// Projects every point, replacing the previous contents of `screen`.
pub fn project(points: &[Vec3], camera: &ScreenCamera, screen: &mut Vec<ScreenPoint>) {
	screen.clear();
	screen.extend(points.iter().map(|&point| camera.world_to_screen(point)));
}

/// Index of the visible point with the smallest screen x. Earlier points win ties.
pub(crate) fn leftmost(screen: &[ScreenPoint]) -> Option<usize> {
	let mut leftmost = None;
	let mut min_x = f32::MAX;
	for (index, point) in screen.iter().enumerate() {
		if !point.in_front {
			continue;
		}
		if point.position.x < min_x {
			min_x = point.position.x;
			leftmost = Some(index);
		}
	}
	leftmost
}

/// Signed angle in degrees from `from` to `to`, counter-clockwise positive.
fn signed_angle(from: Vec2, to: Vec2) -> f32 {
	from.perp_dot(to).atan2(from.dot(to)).to_degrees()
}

/// Walks the perimeter starting at `start` heading along `direction`, writing cloud indices to
/// `hull`.
///
/// The walk succeeds once it arrives back at `start`; the start is not repeated at the end.
pub(crate) fn walk(
	screen: &[ScreenPoint],
	start: usize,
	direction: Vec2,
	config: &SilhouetteConfig,
	hull: &mut Vec<usize>,
) -> Result<(), SilhouetteError> {
	hull.clear();
	hull.push(start);

	// a convex outline cannot have more vertices than there are visible points
	let visible = screen.iter().filter(|point| point.in_front).count();
	let budget = config.iteration_budget.min(visible);

	let start_position = screen[start].position;
	let mut current = start;
	let mut current_position = start_position;
	let mut direction = direction;
	let mut iterations = 0;

	loop {
		let mut next = None;
		let mut min_angle = f32::MAX;

		for (index, candidate) in screen.iter().enumerate() {
			if index == current || !candidate.in_front {
				continue;
			}

			let offset = candidate.position - current_position;
			if offset.length() < config.closeness_epsilon {
				continue;
			}

			let angle = signed_angle(direction, offset);
			if angle.abs() > config.max_turn_degrees {
				continue;
			}

			if angle < min_angle {
				min_angle = angle;
				next = Some(index);
			}
		}

		let Some(mut next) = next else {
			return Err(SilhouetteError::Stalled { vertex: current });
		};

		if screen[next].position.distance(start_position) < config.closeness_epsilon {
			next = start;
		}

		iterations += 1;
		if iterations > budget {
			return Err(SilhouetteError::IterationBudgetExceeded { budget });
		}

		if next == start {
			return Ok(());
		}

		hull.push(next);
		let next_position = screen[next].position;
		direction = next_position - current_position;
		current = next;
		current_position = next_position;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{camera::ViewProjection, lod::CircleResolution};
	use std::f32::consts::FRAC_PI_3;

	const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

	fn orthographic_front() -> ScreenCamera {
		ScreenCamera::look_at(
			Vec3::new(0.0, 0.0, 10.0),
			Vec3::ZERO,
			Vec3::Y,
			ViewProjection::Orthographic { half_height: 5.0 },
			VIEWPORT,
		)
	}

	fn perspective_from(position: Vec3) -> ScreenCamera {
		ScreenCamera::look_at(
			position,
			Vec3::ZERO,
			Vec3::Y,
			ViewProjection::Perspective { fov_y: FRAC_PI_3 },
			VIEWPORT,
		)
	}

	fn octagon(center: Vec3, radius: f32) -> Vec<Vec3> {
		CircleResolution::Low
			.unit_circle()
			.map(|p| center + Vec3::new(p.x, p.y, 0.0) * radius)
			.collect()
	}

	/// Deterministic scatter of points inside a ball.
	fn scatter(count: usize, radius: f32) -> Vec<Vec3> {
		let mut state: u32 = 0x2545_f491;
		let mut next = move || {
			state ^= state << 13;
			state ^= state >> 17;
			state ^= state << 5;
			state as f32 / u32::MAX as f32 * 2.0 - 1.0
		};
		let mut points = Vec::with_capacity(count);
		while points.len() < count {
			let point = Vec3::new(next(), next(), next());
			if point.length() <= 1.0 {
				points.push(point * radius);
			}
		}
		points
	}

	fn screen_of(points: &[Vec3], camera: &ScreenCamera) -> Vec<ScreenPoint> {
		let mut screen = Vec::new();
		project(points, camera, &mut screen);
		screen
	}

	fn assert_convex(outline: &[Vec3], camera: &ScreenCamera) {
		let screen: Vec<Vec2> =
			outline.iter().map(|&p| camera.world_to_screen(p).position).collect();
		let count = screen.len();
		for i in 0..count {
			let a = screen[i];
			let b = screen[(i + 1) % count];
			let c = screen[(i + 2) % count];
			let turn = (b - a).perp_dot(c - b) / ((b - a).length() * (c - b).length());
			assert!(turn >= -1e-4, "clockwise turn {} at outline vertex {}", turn, (i + 1) % count);
		}
	}

	#[test]
	fn test_octagon_facing_camera() {
		let camera = orthographic_front();
		let points = octagon(Vec3::ZERO, 2.0);

		let silhouette =
			extract_silhouette(&points, &camera, &SilhouetteConfig::default()).unwrap();

		// starts at the leftmost vertex and runs counter-clockwise on screen
		assert_eq!(silhouette.indices, vec![3, 4, 5, 6, 7, 0, 1, 2]);
		for (point, &index) in silhouette.points.iter().zip(silhouette.indices.iter()) {
			assert_eq!(*point, points[index]);
		}
		assert_convex(&silhouette.points, &camera);
	}

	#[test]
	fn test_box_face_on_collapses_hidden_corners() {
		let camera = orthographic_front();
		let points = vec![
			Vec3::new(-1.0, -1.0, -1.0),
			Vec3::new(-1.0, 1.0, -1.0),
			Vec3::new(1.0, 1.0, -1.0),
			Vec3::new(1.0, -1.0, -1.0),
			Vec3::new(-1.0, -1.0, 1.0),
			Vec3::new(-1.0, 1.0, 1.0),
			Vec3::new(1.0, 1.0, 1.0),
			Vec3::new(1.0, -1.0, 1.0),
		];

		let silhouette =
			extract_silhouette(&points, &camera, &SilhouetteConfig::default()).unwrap();

		assert_eq!(silhouette.indices, vec![0, 3, 2, 1]);
	}

	#[test]
	fn test_walk_snaps_back_to_start() {
		let camera = orthographic_front();
		let points = vec![
			Vec3::new(-1.0, 0.0, 0.0),
			Vec3::new(1.0, -1.0, 0.0),
			Vec3::new(1.0, 1.0, 0.0),
			// a fraction of a pixel right of the start, turning slightly less on the way back
			Vec3::new(-0.9995, 0.001, 0.0),
		];

		let silhouette =
			extract_silhouette(&points, &camera, &SilhouetteConfig::default()).unwrap();

		assert_eq!(silhouette.indices, vec![0, 1, 2]);
	}

	#[test]
	fn test_scattered_cloud_properties() {
		let points = scatter(120, 1.5);
		let config = SilhouetteConfig::default().with_iteration_budget(points.len());

		for camera in [
			perspective_from(Vec3::new(3.0, 2.0, 8.0)),
			perspective_from(Vec3::new(-6.0, -1.0, 2.0)),
			orthographic_front(),
		] {
			let silhouette = extract_silhouette(&points, &camera, &config).unwrap();
			assert!(silhouette.len() >= 3);

			// subsequence of the input
			for (point, &index) in silhouette.points.iter().zip(silhouette.indices.iter()) {
				assert_eq!(*point, points[index]);
			}

			// no vertex is visited twice
			let mut indices = silhouette.indices.clone();
			indices.sort_unstable();
			indices.dedup();
			assert_eq!(indices.len(), silhouette.len());

			// leftmost start
			let screen = screen_of(&points, &camera);
			let start_x = screen[silhouette.indices[0]].position.x;
			assert!(screen.iter().filter(|p| p.in_front).all(|p| start_x <= p.position.x));

			assert_convex(&silhouette.points, &camera);

			// every visible point lies inside or on the outline
			let outline: Vec<Vec2> =
				silhouette.indices.iter().map(|&i| screen[i].position).collect();
			for point in screen.iter().filter(|p| p.in_front) {
				for i in 0..outline.len() {
					let a = outline[i];
					let b = outline[(i + 1) % outline.len()];
					let distance = (b - a).perp_dot(point.position - a) / (b - a).length();
					assert!(distance >= -0.05, "point {:?} outside the outline", point.position);
				}
			}
		}
	}

	#[test]
	fn test_walk_closes_from_any_vertex() {
		let points = scatter(60, 2.0);
		let camera = perspective_from(Vec3::new(4.0, 3.0, 7.0));
		let config = SilhouetteConfig::default().with_iteration_budget(points.len());

		let silhouette = extract_silhouette(&points, &camera, &config).unwrap();
		let screen = screen_of(&points, &camera);
		let count = silhouette.len();

		for k in 1..count {
			let previous = screen[silhouette.indices[k - 1]].position;
			let start = silhouette.indices[k];
			let mut hull = Vec::new();
			walk(&screen, start, screen[start].position - previous, &config, &mut hull).unwrap();

			let rotated: Vec<usize> =
				(0..count).map(|i| silhouette.indices[(k + i) % count]).collect();
			assert_eq!(hull, rotated);
		}
	}

	#[test]
	fn test_extraction_is_idempotent() {
		let points = scatter(80, 1.0);
		let camera = perspective_from(Vec3::new(1.0, 5.0, 5.0));
		let config = SilhouetteConfig::default().with_iteration_budget(points.len());

		let first = extract_silhouette(&points, &camera, &config).unwrap();
		let second = extract_silhouette(&points, &camera, &config).unwrap();
		assert_eq!(first, second);

		let mut scratch = SilhouetteScratch::new();
		let reused = extract_silhouette_into(&points, &camera, &config, &mut scratch).unwrap();
		assert_eq!(reused, first.points.as_slice());
		assert_eq!(scratch.hull_indices(), first.indices.as_slice());
	}

	#[test]
	fn test_everything_behind_camera_is_culled() {
		let camera = perspective_from(Vec3::new(0.0, 0.0, 10.0));
		let points = octagon(Vec3::new(0.0, 0.0, 20.0), 1.0);

		let result = extract_silhouette(&points, &camera, &SilhouetteConfig::default());
		assert_eq!(result, Err(SilhouetteError::NoVisiblePoint));
	}

	#[test]
	fn test_empty_cloud() {
		let camera = orthographic_front();
		let result = extract_silhouette(&[], &camera, &SilhouetteConfig::default());
		assert_eq!(result, Err(SilhouetteError::EmptyPointCloud));
	}

	#[test]
	fn test_half_behind_camera_uses_front_points_only() {
		let camera = ScreenCamera::new(
			Vec3::ZERO,
			Quat::IDENTITY,
			ViewProjection::Perspective { fov_y: FRAC_PI_3 },
			VIEWPORT,
		);

		// eight points in front of the camera, eight behind it
		let mut points = octagon(Vec3::new(0.0, 0.0, -5.0), 1.0);
		points.extend(octagon(Vec3::new(0.0, 0.0, 5.0), 1.0));

		let silhouette =
			extract_silhouette(&points, &camera, &SilhouetteConfig::default()).unwrap();

		assert_eq!(silhouette.len(), 8);
		assert!(silhouette.indices.iter().all(|&index| index < 8));
	}

	#[test]
	fn test_coincident_points_fail_within_budget() {
		let camera = orthographic_front();
		let points = vec![Vec3::new(0.5, 0.5, 0.0); 64];

		let result = extract_silhouette(&points, &camera, &SilhouetteConfig::default());
		assert_eq!(result, Err(SilhouetteError::Stalled { vertex: 0 }));
	}

	#[test]
	fn test_collinear_points_stall() {
		let camera = orthographic_front();
		let points: Vec<Vec3> = (0..5).map(|i| Vec3::new(i as f32 * 0.5, 0.0, 0.0)).collect();

		let result = extract_silhouette(&points, &camera, &SilhouetteConfig::default());
		assert!(matches!(result, Err(SilhouetteError::Stalled { .. })));
	}

	#[test]
	fn test_iteration_budget() {
		let camera = orthographic_front();
		let points = octagon(Vec3::ZERO, 2.0);
		let config = SilhouetteConfig::default().with_iteration_budget(3);

		let result = extract_silhouette(&points, &camera, &config);
		assert_eq!(result, Err(SilhouetteError::IterationBudgetExceeded { budget: 3 }));

		// a failed extraction leaves no stale outline behind
		let mut scratch = SilhouetteScratch::new();
		assert!(extract_silhouette_into(&points, &camera, &config, &mut scratch).is_err());
		assert!(scratch.outline().is_empty());
		assert!(scratch.hull_indices().is_empty());
	}

	#[test]
	fn test_extract_cloud_from_scratch() {
		let camera = orthographic_front();
		let mut scratch = SilhouetteScratch::new();
		scratch.cloud.extend(octagon(Vec3::ZERO, 2.0));

		let outline = scratch.extract_cloud(&camera, &SilhouetteConfig::default()).unwrap();
		assert_eq!(outline.len(), 8);
		assert_eq!(scratch.screen_points().len(), 8);
	}

	#[test]
	fn test_signed_angle() {
		assert!((signed_angle(Vec2::X, Vec2::Y) - 90.0).abs() < 1e-4);
		assert!((signed_angle(Vec2::X, -Vec2::Y) + 90.0).abs() < 1e-4);
		assert!((signed_angle(Vec2::Y, Vec2::X) + 90.0).abs() < 1e-4);
		assert!(signed_angle(Vec2::X, Vec2::new(-1.0, 0.0)).abs() > 179.5);
	}
}
