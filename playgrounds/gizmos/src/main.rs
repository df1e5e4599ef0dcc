use anyhow::Context;
use bevy::prelude::*;
use gizmo_draw::DrawConfig;
use gizmos_playground::GizmosPlugin;
use std::path::{Path, PathBuf};

fn load_config(path: &Path) -> anyhow::Result<DrawConfig> {
	DrawConfig::load(path).with_context(|| format!("loading draw config from {}", path.display()))
}

fn main() {
	// Optional path to a TOML draw config
	let config_path = std::env::args().nth(1).map(PathBuf::from);

	// Logging starts with the app, so a load failure is carried in and reported there
	let (config, load_error) = match config_path.as_deref().map(load_config) {
		Some(Ok(config)) => (config, None),
		Some(Err(err)) => (DrawConfig::default(), Some(format!("{:#}", err))),
		None => (DrawConfig::default(), None),
	};

	println!("Starting gizmos playground with config: {:?}", config);

	App::new()
		.add_plugins(DefaultPlugins.set(WindowPlugin {
			primary_window: Some(Window {
				title: "Gizmos Playground".to_string(),
				resolution: (1280, 720).into(),
				..default()
			}),
			..default()
		}))
		.add_plugins(GizmosPlugin { config, config_path, load_error })
		.run();
}
