use nalgebra as na;
use wgpu::vertex_attr_array;

/// Corner of the sprite quad every point is drawn with.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PointEdge {
	pub position: na::Point2<f32>,
}

unsafe impl bytemuck::Zeroable for PointEdge {}
unsafe impl bytemuck::Pod for PointEdge {}

/// Per instance data of one scatter point.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
	pub position: na::Point3<f32>,
	pub color: [f32; 3],
}

unsafe impl bytemuck::Zeroable for Point {}
unsafe impl bytemuck::Pod for Point {}

static_assertions::assert_eq_size!(Point, [f32; 6]);
static_assertions::assert_eq_size!(PointEdge, [f32; 2]);

const BASE_ATTRIBUTES: [wgpu::VertexAttribute; 1] = vertex_attr_array![0 => Float32x2];
const ATTRIBUTES: [wgpu::VertexAttribute; 2] = vertex_attr_array![1 => Float32x3, 2 => Float32x3];

impl PointEdge {
	/// Two triangles covering `[-1, 1]`.
	pub fn quad() -> [Self; 6] {
		[
			[-1.0, -1.0],
			[1.0, -1.0],
			[1.0, 1.0],
			[-1.0, -1.0],
			[1.0, 1.0],
			[-1.0, 1.0],
		]
		.map(|[x, y]| Self { position: na::point![x, y] })
	}

	pub fn description<'a>() -> wgpu::VertexBufferLayout<'a> {
		wgpu::VertexBufferLayout {
			array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
			step_mode: wgpu::VertexStepMode::Vertex,
			attributes: &BASE_ATTRIBUTES,
		}
	}
}

impl Point {
	pub fn description<'a>() -> wgpu::VertexBufferLayout<'a> {
		wgpu::VertexBufferLayout {
			array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
			step_mode: wgpu::VertexStepMode::Instance,
			attributes: &ATTRIBUTES,
		}
	}
}
