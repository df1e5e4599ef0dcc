use bevy::prelude::*;
use gizmo_draw::{DrawConfig, SilhouettePainterPlugin};
use std::path::PathBuf;

mod camera;
mod shapes;
mod ui;

pub use camera::CameraController;
pub use shapes::{GizmoShape, ShapeColor, Spin};

/// Where the draw config was read from, for reloading.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigPath(pub Option<PathBuf>);

/// A config load failure from before the logger existed, reported on startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoadError(pub Option<String>);

pub struct GizmosPlugin {
	pub config: DrawConfig,
	pub config_path: Option<PathBuf>,
	pub load_error: Option<String>,
}

fn report_config_error(mut load_error: ResMut<ConfigLoadError>) {
	if let Some(err) = load_error.0.take() {
		log::warn!("{}, falling back to defaults", err);
	}
}

impl Plugin for GizmosPlugin {
	fn build(&self, app: &mut App) {
		app.add_plugins(SilhouettePainterPlugin { config: self.config.clone() });

		app.insert_resource(ClearColor(Color::hsla(201.0, 0.3, 0.18, 1.0)))
			.insert_resource(ConfigPath(self.config_path.clone()))
			.insert_resource(ConfigLoadError(self.load_error.clone()))
			.init_resource::<shapes::FillBuffer>()
			.add_systems(
				Startup,
				(
					report_config_error,
					camera::setup_camera,
					shapes::setup_shapes,
					ui::setup_debug_ui,
				),
			)
			.add_systems(
				Update,
				(
					camera::camera_controller,
					camera::toggle_projection,
					shapes::reload_config,
					shapes::rotate_shapes,
					shapes::draw_shapes
						.after(camera::camera_controller)
						.after(camera::toggle_projection)
						.after(shapes::reload_config)
						.after(shapes::rotate_shapes),
					ui::update_stats_display.after(shapes::draw_shapes),
				),
			);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_load_error_reported_once() {
		let mut app = App::new();
		app.insert_resource(ConfigLoadError(Some("loading draw config from x.toml".into())))
			.add_systems(Startup, report_config_error);
		app.update();

		assert_eq!(app.world().resource::<ConfigLoadError>().0, None);
	}
}
