use crate::shape::OutlineKind;
use bevy::{color::Alpha, prelude::*};

/// Fill alpha factor for outlines built from extracted hulls or flat polygons.
pub const CONVEX_FILL_ALPHA: f32 = 0.25;

/// Fill alpha factor for discs (spheres, circles).
pub const SOLID_FILL_ALPHA: f32 = 0.138;

/// Scales the alpha channel of `color` by `factor`.
pub fn multiply_alpha(color: Color, factor: f32) -> Color {
	color.with_alpha(color.alpha() * factor)
}

/// The translucent color an outline of the given kind is filled with.
pub fn fill_color(color: Color, kind: OutlineKind) -> Color {
	match kind {
		OutlineKind::ConvexHull | OutlineKind::Polygon => multiply_alpha(color, CONVEX_FILL_ALPHA),
		OutlineKind::Disc => multiply_alpha(color, SOLID_FILL_ALPHA),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_multiply_alpha() {
		let color = Color::srgba(0.2, 0.4, 0.6, 0.8);
		let faded = multiply_alpha(color, 0.5);

		assert!((faded.alpha() - 0.4).abs() < 1e-6);
		let (before, after) = (color.to_srgba(), faded.to_srgba());
		assert_eq!((before.red, before.green, before.blue), (after.red, after.green, after.blue));
	}

	#[test]
	fn test_fill_color_by_kind() {
		let color = Color::WHITE;

		let convex = fill_color(color, OutlineKind::ConvexHull);
		assert!((convex.alpha() - CONVEX_FILL_ALPHA).abs() < 1e-6);
		assert!((fill_color(color, OutlineKind::Polygon).alpha() - CONVEX_FILL_ALPHA).abs() < 1e-6);
		assert!((fill_color(color, OutlineKind::Disc).alpha() - SOLID_FILL_ALPHA).abs() < 1e-6);
	}
}
