pub mod config;
pub mod fill;
pub mod painter;
pub mod sink;

pub use config::{ConfigError, DrawConfig};
pub use fill::FillMesh;
pub use painter::{DrawOutcome, DrawStats, SilhouettePainter};
pub use sink::{closed_strip, SilhouetteSink};

pub use silhouette;

use bevy::prelude::*;

/// Inserts a [`SilhouettePainter`] and clears its counters at the start of every frame.
#[derive(Default)]
pub struct SilhouettePainterPlugin {
	pub config: DrawConfig,
}

impl Plugin for SilhouettePainterPlugin {
	fn build(&self, app: &mut App) {
		app.insert_resource(SilhouettePainter::new(self.config.clone()))
			.add_systems(First, reset_painter_stats);
	}
}

pub fn reset_painter_stats(mut painter: ResMut<SilhouettePainter>) {
	painter.reset_stats();
}
