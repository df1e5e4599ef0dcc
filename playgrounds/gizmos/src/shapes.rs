use crate::ConfigPath;
use bevy::prelude::*;
use gizmo_draw::{
	silhouette::{CapsuleAxis, CapsuleOutline, ScreenCamera},
	DrawConfig, DrawOutcome, FillMesh, SilhouettePainter, SilhouetteSink,
};

/// A shape drawn as a silhouette gizmo, sized by the scale of its [`Transform`].
#[derive(Component, Debug, Clone, Copy)]
pub enum GizmoShape {
	Box,
	/// Capsule along local Y, tip to tip as long as the Y scale.
	Capsule { radius: f32 },
	Sphere,
	RoundedRect { corner_radius: f32 },
	FlatCapsule(CapsuleAxis),
	Circle,
}

impl GizmoShape {
	pub fn draw<S: SilhouetteSink + ?Sized>(
		&self,
		painter: &mut SilhouettePainter,
		sink: &mut S,
		camera: &ScreenCamera,
		color: Color,
		transform: &Transform,
	) -> DrawOutcome {
		let center = transform.translation;
		match *self {
			GizmoShape::Box => {
				let half_extents = transform.scale * 0.5;
				painter.draw_box(sink, camera, color, center, transform.rotation, half_extents)
			}
			GizmoShape::Capsule { radius } => {
				let capsule = CapsuleOutline::from_axis(
					center,
					transform.rotation * Vec3::Y,
					transform.scale.y,
					radius,
				);
				painter.draw(sink, camera, color, &capsule)
			}
			GizmoShape::Sphere => {
				let radius = transform.scale.max_element() * 0.5;
				painter.draw_sphere(sink, camera, color, center, radius)
			}
			GizmoShape::RoundedRect { corner_radius } => {
				painter.draw_rounded_rect(sink, camera, color, transform, corner_radius)
			}
			GizmoShape::FlatCapsule(axis) => {
				painter.draw_flat_capsule(sink, camera, color, transform, axis)
			}
			GizmoShape::Circle => painter.draw_circle(
				sink,
				camera,
				color,
				center,
				transform.rotation * Vec3::Z,
				transform.scale.x * 0.5,
			),
		}
	}
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ShapeColor(pub Color);

/// Constant rotation, radians per second around `axis`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin {
	pub axis: Dir3,
	pub speed: f32,
}

/// Fill triangles collected over a frame.
#[derive(Resource, Default)]
pub struct FillBuffer(pub FillMesh);

/// The mesh the fill triangles are uploaded to.
#[derive(Resource)]
pub struct FillMeshHandle(pub Handle<Mesh>);

pub fn setup_shapes(
	mut commands: Commands,
	mut meshes: ResMut<Assets<Mesh>>,
	mut materials: ResMut<Assets<StandardMaterial>>,
) {
	let shapes = [
		(GizmoShape::Box, Vec3::new(1.5, 1.0, 2.0), Color::srgb(0.95, 0.55, 0.2)),
		(GizmoShape::Capsule { radius: 0.5 }, Vec3::new(1.0, 3.0, 1.0), Color::srgb(0.3, 0.8, 0.4)),
		(GizmoShape::Sphere, Vec3::splat(1.6), Color::srgb(0.35, 0.6, 0.95)),
		(
			GizmoShape::RoundedRect { corner_radius: 0.3 },
			Vec3::new(2.0, 1.4, 1.0),
			Color::srgb(0.9, 0.3, 0.6),
		),
		(
			GizmoShape::FlatCapsule(CapsuleAxis::Horizontal),
			Vec3::new(2.4, 1.0, 1.0),
			Color::srgb(0.85, 0.85, 0.3),
		),
		(GizmoShape::Circle, Vec3::splat(1.8), Color::srgb(0.6, 0.4, 0.95)),
	];

	let spacing = 3.5;
	let offset = (shapes.len() - 1) as f32 * spacing * 0.5;
	for (i, (shape, scale, color)) in shapes.into_iter().enumerate() {
		let x = i as f32 * spacing - offset;
		let axis = Dir3::new(Vec3::new(0.3, 1.0, 0.2 * i as f32)).unwrap_or(Dir3::Y);
		commands.spawn((
			shape,
			ShapeColor(color),
			Spin { axis, speed: 0.4 + 0.1 * i as f32 },
			Transform::from_xyz(x, 0.0, 0.0).with_scale(scale),
		));
	}
	log::info!("Spawned {} gizmo shapes", shapes.len());

	let fill_mesh = meshes.add(FillMesh::new().into_mesh());
	let fill_material = materials.add(StandardMaterial {
		base_color: Color::WHITE,
		alpha_mode: AlphaMode::Blend,
		unlit: true,
		double_sided: true,
		cull_mode: None,
		..default()
	});
	commands.spawn((
		Mesh3d(fill_mesh.clone()),
		MeshMaterial3d(fill_material),
		Transform::default(),
	));
	commands.insert_resource(FillMeshHandle(fill_mesh));
}

pub fn rotate_shapes(time: Res<Time>, mut query: Query<(&mut Transform, &Spin)>) {
	for (mut transform, spin) in &mut query {
		transform.rotate(Quat::from_axis_angle(*spin.axis, spin.speed * time.delta_secs()));
	}
}

/// Draws every shape into the line gizmos and the shared fill mesh.
pub fn draw_shapes(
	mut gizmos: Gizmos,
	mut painter: ResMut<SilhouettePainter>,
	mut fill: ResMut<FillBuffer>,
	fill_handle: Option<Res<FillMeshHandle>>,
	mut meshes: ResMut<Assets<Mesh>>,
	camera_query: Query<(&Camera, &GlobalTransform, &Projection)>,
	shapes: Query<(&GizmoShape, &Transform, &ShapeColor)>,
) {
	let Ok((camera, camera_transform, projection)) = camera_query.single() else {
		return;
	};
	let Some(viewport) = camera.logical_viewport_size() else {
		return;
	};
	let Some(screen_camera) = ScreenCamera::from_view(camera_transform, projection, viewport) else {
		return;
	};

	fill.0.clear();
	let mut sink = (&mut gizmos, &mut fill.0);
	for (shape, transform, color) in &shapes {
		shape.draw(&mut painter, &mut sink, &screen_camera, color.0, transform);
	}

	if let Some(fill_handle) = fill_handle {
		if let Some(mesh) = meshes.get_mut(&fill_handle.0) {
			*mesh = fill.0.to_mesh();
		}
	}
}

/// Rereads the draw config file on `R`.
pub fn reload_config(
	keyboard_input: Res<ButtonInput<KeyCode>>,
	config_path: Res<ConfigPath>,
	mut painter: ResMut<SilhouettePainter>,
) {
	if !keyboard_input.just_pressed(KeyCode::KeyR) {
		return;
	}
	let Some(path) = &config_path.0 else {
		log::warn!("No config file was given on the command line, nothing to reload");
		return;
	};

	match DrawConfig::load(path) {
		Ok(config) => {
			log::info!("Reloaded draw config from {}", path.display());
			painter.set_config(config);
		}
		Err(err) => log::warn!("Keeping current draw config: {}", err),
	}
}
