use crate::{config::DrawConfig, sink::SilhouetteSink};
use bevy::prelude::*;
use silhouette::{
	fill_color, BoxOutline, CapsuleAxis, CapsuleOutline, CircleOutline, CircleResolution,
	FlatCapsuleOutline, OutlineKind, RoundedRectOutline, ScreenCamera, ShapeSampler,
	SilhouetteError, SilhouetteScratch, SphereOutline,
};

/// What happened to a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
	Drawn,
	/// Degenerate, or too small on screen to be worth drawing.
	Skipped,
	/// Sampled, but no outline could be built from the samples.
	Culled(SilhouetteError),
}

impl DrawOutcome {
	pub fn drawn(&self) -> bool {
		matches!(self, DrawOutcome::Drawn)
	}
}

/// Draw call counts since the last [`SilhouettePainter::reset_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
	pub drawn: usize,
	pub culled: usize,
	pub skipped: usize,
}

/// Turns shapes into outlines and fills.
///
/// Owns the scratch buffers every draw reuses, so keep one around (it is a [`Resource`]) rather
/// than building one per call.
#[derive(Resource, Debug, Clone, Default)]
pub struct SilhouettePainter {
	config: DrawConfig,
	scratch: SilhouetteScratch,
	stats: DrawStats,
}

impl SilhouettePainter {
	pub fn new(config: DrawConfig) -> Self {
		Self { config, scratch: SilhouetteScratch::new(), stats: DrawStats::default() }
	}

	pub fn config(&self) -> &DrawConfig {
		&self.config
	}

	pub fn set_config(&mut self, config: DrawConfig) {
		self.config = config;
	}

	pub fn stats(&self) -> DrawStats {
		self.stats
	}

	pub fn reset_stats(&mut self) {
		self.stats = DrawStats::default();
	}

	/// Buffers from the last draw.
	pub fn scratch(&self) -> &SilhouetteScratch {
		&self.scratch
	}

	/// Draws the silhouette of `shape` as seen from `camera`.
	///
	/// The outline is emitted in `color` and the fill in a translucent version of it. Failures
	/// never propagate: a shape that cannot be outlined is simply not drawn.
	pub fn draw<S, T>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		shape: &T,
	) -> DrawOutcome
	where
		S: SilhouetteSink + ?Sized,
		T: ShapeSampler + ?Sized,
	{
		let outcome = self.paint(sink, camera, color, shape);
		match outcome {
			DrawOutcome::Drawn => self.stats.drawn += 1,
			DrawOutcome::Skipped => self.stats.skipped += 1,
			DrawOutcome::Culled(_) => self.stats.culled += 1,
		}
		outcome
	}

	fn paint<S, T>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		shape: &T,
	) -> DrawOutcome
	where
		S: SilhouetteSink + ?Sized,
		T: ShapeSampler + ?Sized,
	{
		if shape.is_degenerate() {
			return DrawOutcome::Skipped;
		}

		let camera = camera.with_handle_pixels(self.config.handle_pixels);
		let handle_size = camera.handle_size(shape.anchor());
		if shape.extent() < handle_size * self.config.discard_ratio {
			return DrawOutcome::Skipped;
		}

		let resolution = shape
			.detail_size()
			.map_or(CircleResolution::Low, |detail| self.config.lod.select(handle_size, detail));
		let kind = shape.outline();
		shape.sample_into(&camera, resolution, &mut self.scratch.cloud);

		let samples = self.scratch.cloud.len();
		let outline = match kind {
			OutlineKind::ConvexHull => {
				match self.scratch.extract_cloud(&camera, &self.config.silhouette) {
					Ok(outline) => outline,
					Err(err) => {
						log::debug!("culled {} point silhouette: {}", samples, err);
						return DrawOutcome::Culled(err);
					}
				}
			}
			OutlineKind::Polygon | OutlineKind::Disc => {
				if samples == 0 {
					log::debug!("culled {:?} outline with no samples", kind);
					return DrawOutcome::Culled(SilhouetteError::EmptyPointCloud);
				}
				self.scratch.cloud.as_slice()
			}
		};

		sink.outline(outline, color);
		sink.fill(outline, fill_color(color, kind));
		DrawOutcome::Drawn
	}

	/// Draws an oriented box with the given half extents.
	pub fn draw_box<S: SilhouetteSink + ?Sized>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		center: Vec3,
		rotation: Quat,
		half_extents: Vec3,
	) -> DrawOutcome {
		self.draw(sink, camera, color, &BoxOutline::new(center, rotation, half_extents))
	}

	pub fn draw_capsule<S: SilhouetteSink + ?Sized>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		start: Vec3,
		end: Vec3,
		radius: f32,
	) -> DrawOutcome {
		self.draw(sink, camera, color, &CapsuleOutline::new(start, end, radius))
	}

	pub fn draw_sphere<S: SilhouetteSink + ?Sized>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		center: Vec3,
		radius: f32,
	) -> DrawOutcome {
		self.draw(sink, camera, color, &SphereOutline::new(center, radius))
	}

	/// Draws a rectangle in the local XY plane of `transform`, sized by its X and Y scale.
	pub fn draw_rounded_rect<S: SilhouetteSink + ?Sized>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		transform: &Transform,
		corner_radius: f32,
	) -> DrawOutcome {
		let rect = RoundedRectOutline::new(
			transform.translation,
			transform.rotation,
			transform.scale.truncate() * 0.5,
		)
		.with_corner_radius(corner_radius);
		self.draw(sink, camera, color, &rect)
	}

	/// Draws a flat capsule in the local XY plane of `transform`, sized by its X and Y scale.
	pub fn draw_flat_capsule<S: SilhouetteSink + ?Sized>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		transform: &Transform,
		axis: CapsuleAxis,
	) -> DrawOutcome {
		let capsule = FlatCapsuleOutline::new(
			transform.translation,
			transform.rotation,
			transform.scale.truncate() * 0.5,
			axis,
		);
		self.draw(sink, camera, color, &capsule)
	}

	pub fn draw_circle<S: SilhouetteSink + ?Sized>(
		&mut self,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		center: Vec3,
		normal: Vec3,
		radius: f32,
	) -> DrawOutcome {
		self.draw(sink, camera, color, &CircleOutline::new(center, normal, radius))
	}
}
