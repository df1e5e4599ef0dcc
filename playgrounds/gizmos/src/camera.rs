use bevy::{camera::ScalingMode, input::mouse::MouseMotion, prelude::*};
use std::f32::consts::FRAC_PI_2;

/// World units visible vertically in orthographic mode.
const ORTHOGRAPHIC_HEIGHT: f32 = 12.0;

#[derive(Component)]
pub struct CameraController {
	pub speed: f32,
	pub sensitivity: f32,
	pub yaw: f32,
	pub pitch: f32,
}

pub fn setup_camera(mut commands: Commands) {
	let camera_pos = Vec3::new(0.0, 4.0, 12.0);
	let transform = Transform::from_translation(camera_pos).looking_at(Vec3::ZERO, Vec3::Y);
	let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);

	log::info!(
		"Setting up camera at {:?}, yaw: {}°, pitch: {}°",
		camera_pos,
		yaw.to_degrees(),
		pitch.to_degrees()
	);

	commands.spawn((
		Camera3d::default(),
		transform,
		Projection::Perspective(PerspectiveProjection { near: 0.1, far: 500.0, ..default() }),
		CameraController { speed: 6.0, sensitivity: 0.005, yaw, pitch },
	));
}

/// Mouse look with the right button held, WASD to move, Space/Shift for up and down.
pub fn camera_controller(
	keyboard_input: Res<ButtonInput<KeyCode>>,
	mouse_input: Res<ButtonInput<MouseButton>>,
	mut mouse_motion: MessageReader<MouseMotion>,
	time: Res<Time>,
	mut query: Query<(&mut Transform, &mut CameraController), With<Camera3d>>,
) {
	let Ok((mut transform, mut controller)) = query.single_mut() else {
		return;
	};

	let mouse_delta: Vec2 = mouse_motion.read().map(|event| event.delta).sum();
	if mouse_input.pressed(MouseButton::Right) {
		controller.yaw -= mouse_delta.x * controller.sensitivity;
		controller.pitch = (controller.pitch - mouse_delta.y * controller.sensitivity)
			.clamp(-FRAC_PI_2 + 0.1, FRAC_PI_2 - 0.1);
		transform.rotation = Quat::from_euler(EulerRot::YXZ, controller.yaw, controller.pitch, 0.0);
	}

	let bindings = [
		(KeyCode::KeyW, *transform.forward()),
		(KeyCode::KeyS, *transform.back()),
		(KeyCode::KeyA, *transform.left()),
		(KeyCode::KeyD, *transform.right()),
		(KeyCode::Space, Vec3::Y),
		(KeyCode::ShiftLeft, Vec3::NEG_Y),
	];
	let movement: Vec3 = bindings
		.iter()
		.filter(|(key, _)| keyboard_input.pressed(*key))
		.map(|(_, direction)| *direction)
		.sum();

	if let Some(direction) = movement.try_normalize() {
		transform.translation += direction * controller.speed * time.delta_secs();
	}
}

/// Switches between perspective and orthographic on `P`.
pub fn toggle_projection(
	keyboard_input: Res<ButtonInput<KeyCode>>,
	mut query: Query<&mut Projection, With<CameraController>>,
) {
	if !keyboard_input.just_pressed(KeyCode::KeyP) {
		return;
	}
	let Ok(mut projection) = query.single_mut() else {
		return;
	};

	let next = if matches!(*projection, Projection::Perspective(_)) {
		Projection::Orthographic(OrthographicProjection {
			scaling_mode: ScalingMode::FixedVertical { viewport_height: ORTHOGRAPHIC_HEIGHT },
			..OrthographicProjection::default_3d()
		})
	} else {
		Projection::Perspective(PerspectiveProjection { near: 0.1, far: 500.0, ..default() })
	};
	log::info!("Switching camera projection to {:?}", next);
	*projection = next;
}
