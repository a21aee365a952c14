use nalgebra as na;
use quality::Dataset;

/// Extent used for flat dimensions, relative to the largest extent.
const FLAT_EXTENT: f64 = 0.1;

/// Larger data is scaled down to this extent to stay within `f32`.
const MAX_EXTENT: f64 = 1.0e6;

/// Everything uploaded to the GPU, in world space around the data center.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
	pub points: Vec<render::Point>,
	/// Edges of the bounding box, two vertices per edge.
	pub axes: Vec<na::Point3<f32>>,
	pub radius: f32,
}

impl Scene {
	pub fn new(dataset: &Dataset) -> Self {
		let (center, size) = match dataset.bounds() {
			Some(bounds) => (bounds.center(), bounds.size()),
			None => (na::Point3::origin(), na::Vector3::zeros()),
		};

		let largest = size.max();
		let scale = if largest > MAX_EXTENT { MAX_EXTENT / largest } else { 1.0 };
		let size = size * scale;
		let largest = largest * scale;
		let fallback = if largest > 0.0 { largest * FLAT_EXTENT } else { 1.0 };
		let half = size.map(|v| if v > largest * f64::from(f32::EPSILON) { v } else { fallback }) / 2.0;

		let points = dataset
			.iter()
			.map(|record| render::Point {
				position: world((na::point![record.x, record.y, record.z] - center) * scale),
				color: quality::Color::from_quality(record.quality)
					.to_array()
					.map(|c| c as f32),
			})
			.collect();

		let corners = (0..8)
			.map(|i| {
				let sign = |bit: usize| if i & (1 << bit) == 0 { -1.0 } else { 1.0 };
				world(na::vector![sign(0) * half.x, sign(1) * half.y, sign(2) * half.z])
			})
			.collect::<Vec<_>>();
		let mut axes = Vec::with_capacity(24);
		for i in 0..8 {
			for bit in 0..3 {
				let j = i | (1 << bit);
				if j != i {
					axes.push(corners[i]);
					axes.push(corners[j]);
				}
			}
		}

		Self {
			points,
			axes,
			radius: half.norm() as f32,
		}
	}
}

/// Data space is z up, world space is y up.
fn world(offset: na::Vector3<f64>) -> na::Point3<f32> {
	na::point![offset.x as f32, offset.z as f32, -offset.y as f32]
}
