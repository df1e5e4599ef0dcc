use bevy::{camera::ScalingMode, prelude::*};

/// Default number of screen pixels a handle spans, used to turn screen sizes into world sizes.
pub const DEFAULT_HANDLE_PIXELS: f32 = 80.0;

/// How view space is flattened onto the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewProjection {
	/// Vertical field of view in radians.
	Perspective { fov_y: f32 },
	/// Half of the visible height in world units.
	Orthographic { half_height: f32 },
}

/// A point after projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
	/// Pixels, origin at the bottom left of the viewport, y up.
	pub position: Vec2,
	/// Distance along the camera forward axis.
	pub depth: f32,
	/// False when the point lies behind the image plane.
	pub in_front: bool,
}

/// The camera state every projection call is made against.
///
/// Looks down its local -Z with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenCamera {
	pub position: Vec3,
	pub rotation: Quat,
	pub projection: ViewProjection,
	/// Viewport size in pixels.
	pub viewport: Vec2,
	pub handle_pixels: f32,
}

impl ScreenCamera {
	pub fn new(position: Vec3, rotation: Quat, projection: ViewProjection, viewport: Vec2) -> Self {
		Self { position, rotation, projection, viewport, handle_pixels: DEFAULT_HANDLE_PIXELS }
	}

	/// Builds a camera at `position` facing `target`.
	pub fn look_at(
		position: Vec3,
		target: Vec3,
		up: Vec3,
		projection: ViewProjection,
		viewport: Vec2,
	) -> Self {
		let transform = Transform::from_translation(position).looking_at(target, up);
		Self::new(position, transform.rotation, projection, viewport)
	}

	/// Reads the camera from Bevy components.
	///
	/// Custom projections have no closed form here and yield `None`.
	pub fn from_view(
		transform: &GlobalTransform,
		projection: &Projection,
		viewport: Vec2,
	) -> Option<Self> {
		let projection = match projection {
			Projection::Perspective(perspective) => {
				ViewProjection::Perspective { fov_y: perspective.fov }
			}
			Projection::Orthographic(orthographic) => ViewProjection::Orthographic {
				half_height: orthographic_half_height(orthographic, viewport),
			},
			_ => return None,
		};
		let (_, rotation, translation) = transform.to_scale_rotation_translation();
		Some(Self::new(translation, rotation, projection, viewport))
	}

	pub fn with_handle_pixels(mut self, handle_pixels: f32) -> Self {
		self.handle_pixels = handle_pixels;
		self
	}

	pub fn forward(&self) -> Vec3 {
		self.rotation * Vec3::NEG_Z
	}

	pub fn up(&self) -> Vec3 {
		self.rotation * Vec3::Y
	}

	pub fn right(&self) -> Vec3 {
		self.rotation * Vec3::X
	}

	pub fn is_orthographic(&self) -> bool {
		matches!(self.projection, ViewProjection::Orthographic { .. })
	}

	fn aspect(&self) -> f32 {
		if self.viewport.y > 0.0 {
			self.viewport.x / self.viewport.y
		} else {
			1.0
		}
	}

	/// Projects a world point into viewport pixels.
	pub fn world_to_screen(&self, point: Vec3) -> ScreenPoint {
		let local = self.rotation.inverse() * (point - self.position);
		let depth = -local.z;

		let (half_height, in_front) = match self.projection {
			ViewProjection::Perspective { fov_y } => {
				((fov_y * 0.5).tan() * depth, depth > f32::EPSILON)
			}
			ViewProjection::Orthographic { half_height } => (half_height, depth >= 0.0),
		};
		let half_width = half_height * self.aspect();

		let ndc = Vec2::new(local.x / half_width, local.y / half_height);
		let position = (ndc * 0.5 + Vec2::splat(0.5)) * self.viewport;

		ScreenPoint { position, depth, in_front }
	}

	/// World-space length covered by [`ScreenCamera::handle_pixels`] pixels at the depth of
	/// `point`.
	pub fn handle_size(&self, point: Vec3) -> f32 {
		if self.viewport.y <= 0.0 {
			return 0.0;
		}

		let visible_height = match self.projection {
			ViewProjection::Perspective { fov_y } => {
				let depth = (point - self.position).dot(self.forward()).abs();
				2.0 * depth * (fov_y * 0.5).tan()
			}
			ViewProjection::Orthographic { half_height } => 2.0 * half_height,
		};

		visible_height / self.viewport.y * self.handle_pixels
	}
}

/// Half the visible height of an orthographic view.
///
/// Fixed scaling modes are read directly, since `area` is only refreshed by Bevy after the
/// projection changes. The rest fall back to `area`.
fn orthographic_half_height(orthographic: &OrthographicProjection, viewport: Vec2) -> f32 {
	let height = match orthographic.scaling_mode {
		ScalingMode::FixedVertical { viewport_height } => viewport_height,
		ScalingMode::FixedHorizontal { viewport_width } if viewport.x > 0.0 => {
			viewport_width * viewport.y / viewport.x
		}
		ScalingMode::Fixed { height, .. } => height,
		_ => return orthographic.area.height() * 0.5,
	};
	height * orthographic.scale * 0.5
}
