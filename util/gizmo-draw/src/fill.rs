use crate::sink::SilhouetteSink;
use bevy::{
	asset::RenderAssetUsages,
	mesh::{Indices, PrimitiveTopology},
	prelude::*,
};

/// Collects filled polygons into one vertex-colored triangle list.
///
/// Polygons are convex, so each one is triangulated as a fan around its first point.
#[derive(Debug, Clone, Default)]
pub struct FillMesh {
	positions: Vec<[f32; 3]>,
	colors: Vec<[f32; 4]>,
	indices: Vec<u32>,
}

impl FillMesh {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn clear(&mut self) {
		self.positions.clear();
		self.colors.clear();
		self.indices.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.indices.is_empty()
	}

	pub fn vertex_count(&self) -> usize {
		self.positions.len()
	}

	pub fn triangle_count(&self) -> usize {
		self.indices.len() / 3
	}

	/// Appends a fan over `points`. Fewer than three points enclose nothing and are ignored.
	pub fn push_polygon(&mut self, points: &[Vec3], color: Color) {
		if points.len() < 3 {
			return;
		}

		let base = self.positions.len() as u32;
		let color = color.to_linear();
		let color = [color.red, color.green, color.blue, color.alpha];
		self.positions.extend(points.iter().map(|p| p.to_array()));
		self.colors.extend(std::iter::repeat_n(color, points.len()));
		for i in 1..points.len() as u32 - 1 {
			self.indices.extend([base, base + i, base + i + 1]);
		}
	}

	/// Builds a mesh for rendering with a material that reads vertex colors.
	pub fn to_mesh(&self) -> Mesh {
		let mut mesh = Mesh::new(
			PrimitiveTopology::TriangleList,
			RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
		);
		mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions.clone());
		mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.colors.clone());
		mesh.insert_indices(Indices::U32(self.indices.clone()));
		mesh
	}

	pub fn into_mesh(self) -> Mesh {
		let mut mesh = Mesh::new(
			PrimitiveTopology::TriangleList,
			RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
		);
		mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.positions);
		mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, self.colors);
		mesh.insert_indices(Indices::U32(self.indices));
		mesh
	}
}

/// Outlines are left to a line sink.
impl SilhouetteSink for FillMesh {
	fn outline(&mut self, _points: &[Vec3], _color: Color) {}

	fn fill(&mut self, points: &[Vec3], color: Color) {
		self.push_polygon(points, color);
	}
}
