use bevy::prelude::*;
use gizmo_draw::SilhouettePainter;

const CONTROLS: &str = "P: toggle projection  R: reload config";

#[derive(Component)]
pub struct StatsDisplay;

pub fn setup_debug_ui(mut commands: Commands) {
	log::info!("Setting up debug UI");

	commands
		.spawn((
			Node {
				position_type: PositionType::Absolute,
				top: Val::Px(10.0),
				left: Val::Px(10.0),
				padding: UiRect::all(Val::Px(10.0)),
				..default()
			},
			BackgroundColor(Color::hsla(201.0, 0.3, 0.1, 0.7)),
		))
		.with_children(|parent| {
			parent.spawn((
				Text::new("Projection: Perspective\nDrawn: 0  Culled: 0  Skipped: 0"),
				TextFont { font_size: 18.0, ..default() },
				TextColor(Color::WHITE),
				StatsDisplay,
			));
		});
}

pub fn update_stats_display(
	painter: Res<SilhouettePainter>,
	camera_query: Query<&Projection, With<Camera3d>>,
	mut text_query: Query<&mut Text, With<StatsDisplay>>,
) {
	let Ok(mut text) = text_query.single_mut() else {
		return;
	};
	let mode = match camera_query.single() {
		Ok(Projection::Orthographic(_)) => "Orthographic",
		Ok(Projection::Perspective(_)) => "Perspective",
		Ok(_) => "Custom",
		Err(_) => "None",
	};

	let stats = painter.stats();
	text.0 = format!(
		"Projection: {}\nDrawn: {}  Culled: {}  Skipped: {}\n{}",
		mode, stats.drawn, stats.culled, stats.skipped, CONTROLS
	);
}
