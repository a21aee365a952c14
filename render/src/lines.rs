use nalgebra as na;
use wgpu::{util::DeviceExt, vertex_attr_array};

use crate::{
	pipeline::{create_pipeline, PipelineDescription},
	Camera3DGPU, RenderPass, State,
};

pub struct LinesState {
	pipeline: wgpu::RenderPipeline,
}

impl LinesState {
	pub fn new(state: &State) -> Self {
		let pipeline = create_pipeline(
			state,
			PipelineDescription {
				label: "lines",
				shader: wgpu::include_wgsl!("lines.wgsl"),
				vertex_buffers: &[description()],
				bind_group_layouts: &[&Camera3DGPU::get_layout(state)],
				topology: wgpu::PrimitiveTopology::LineList,
			},
		);
		Self { pipeline }
	}

	pub fn render<'a>(&'a self, render_pass: &mut RenderPass<'a>, camera: &'a Camera3DGPU, lines: &'a Lines) {
		if lines.vertices == 0 {
			return;
		}
		render_pass.set_pipeline(&self.pipeline);
		render_pass.set_bind_group(0, camera.get_bind_group(), &[]);
		render_pass.set_vertex_buffer(0, lines.buffer.slice(..));
		render_pass.draw(0..lines.vertices, 0..1);
	}
}

/// Line segments, two consecutive points per segment.
#[derive(Debug)]
pub struct Lines {
	buffer: wgpu::Buffer,
	vertices: u32,
}

impl Lines {
	pub fn new(state: &State, points: &[na::Point3<f32>]) -> Self {
		let buffer = state
			.device
			.create_buffer_init(&wgpu::util::BufferInitDescriptor {
				label: Some("lines buffer"),
				contents: bytemuck::cast_slice(points),
				usage: wgpu::BufferUsages::VERTEX,
			});

		Self { buffer, vertices: points.len() as u32 }
	}
}

const ATTRIBUTES: [wgpu::VertexAttribute; 1] = vertex_attr_array![0 => Float32x3];

fn description<'a>() -> wgpu::VertexBufferLayout<'a> {
	wgpu::VertexBufferLayout {
		array_stride: std::mem::size_of::<na::Point3<f32>>() as wgpu::BufferAddress,
		step_mode: wgpu::VertexStepMode::Vertex,
		attributes: &ATTRIBUTES,
	}
}
