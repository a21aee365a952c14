use wgpu::util::DeviceExt;

use crate::{
	pipeline::{create_pipeline, PipelineDescription},
	Camera3DGPU, Point, PointEdge, RenderPass, State,
};

pub struct PointCloudState {
	pipeline: wgpu::RenderPipeline,
	quad: wgpu::Buffer,
}

impl PointCloudState {
	pub fn new(state: &State) -> Self {
		let pipeline = create_pipeline(
			state,
			PipelineDescription {
				label: "point cloud",
				shader: wgpu::include_wgsl!("point_cloud.wgsl"),
				vertex_buffers: &[PointEdge::description(), Point::description()],
				bind_group_layouts: &[
					&Camera3DGPU::get_layout(state),
					&PointCloudEnvironment::get_layout(state),
				],
				topology: wgpu::PrimitiveTopology::TriangleList,
			},
		);

		let quad = state
			.device
			.create_buffer_init(&wgpu::util::BufferInitDescriptor {
				label: Some("Quad Buffer"),
				contents: bytemuck::cast_slice(&PointEdge::quad()),
				usage: wgpu::BufferUsages::VERTEX,
			});
		Self { pipeline, quad }
	}

	pub fn render<'a, 'b>(
		&'a self,
		render_pass: &'b mut RenderPass<'a>,
		camera: &'a Camera3DGPU,
		environment: &'a PointCloudEnvironment,
	) -> PointCloudPass<'a, 'b> {
		render_pass.set_pipeline(&self.pipeline);
		render_pass.set_bind_group(0, camera.get_bind_group(), &[]);
		render_pass.set_bind_group(1, &environment.bind_group, &[]);
		render_pass.set_vertex_buffer(0, self.quad.slice(..));
		PointCloudPass(render_pass)
	}
}

/// Render pass with the point cloud pipeline bound.
pub struct PointCloudPass<'a, 'b>(&'b mut RenderPass<'a>);

/// Sprite size shared by all points of a pass.
pub struct PointCloudEnvironment {
	/// Diameter in pixels.
	pub point_size: f32,
	pub viewport: [f32; 2],
	buffer: wgpu::Buffer,
	bind_group: wgpu::BindGroup,
}

impl PointCloudEnvironment {
	pub fn new(state: &State, point_size: f32, viewport: [f32; 2]) -> Self {
		let uniform = EnvironmentUniform { viewport, point_size, _padding: 0.0 };
		let buffer = state
			.device
			.create_buffer_init(&wgpu::util::BufferInitDescriptor {
				label: Some("Environment Buffer"),
				contents: bytemuck::cast_slice(&[uniform]),
				usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
			});

		let bind_group = state.device.create_bind_group(&wgpu::BindGroupDescriptor {
			layout: &Self::get_layout(state),
			entries: &[wgpu::BindGroupEntry {
				binding: 0,
				resource: buffer.as_entire_binding(),
			}],
			label: Some("environment_bind_group"),
		});

		Self { point_size, viewport, buffer, bind_group }
	}

	pub fn update(&self, state: &State) {
		let uniform = EnvironmentUniform {
			viewport: self.viewport,
			point_size: self.point_size,
			_padding: 0.0,
		};
		state
			.queue
			.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[uniform]));
	}

	pub fn get_layout(state: &State) -> wgpu::BindGroupLayout {
		state
			.device
			.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
				entries: &[wgpu::BindGroupLayoutEntry {
					binding: 0,
					visibility: wgpu::ShaderStages::VERTEX,
					ty: wgpu::BindingType::Buffer {
						ty: wgpu::BufferBindingType::Uniform,
						has_dynamic_offset: false,
						min_binding_size: None,
					},
					count: None,
				}],
				label: Some("environment_bind_group_layout"),
			})
	}
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct EnvironmentUniform {
	viewport: [f32; 2],
	point_size: f32,
	_padding: f32,
}

unsafe impl bytemuck::Zeroable for EnvironmentUniform {}
unsafe impl bytemuck::Pod for EnvironmentUniform {}

static_assertions::assert_eq_size!(EnvironmentUniform, [f32; 4]);

#[derive(Debug)]
pub struct PointCloud {
	buffer: wgpu::Buffer,
	instances: u32,
}

impl PointCloud {
	pub fn new(state: &State, points: &[Point]) -> Self {
		let buffer = state
			.device
			.create_buffer_init(&wgpu::util::BufferInitDescriptor {
				label: Some("Point Buffer"),
				contents: bytemuck::cast_slice(points),
				usage: wgpu::BufferUsages::VERTEX,
			});

		Self { buffer, instances: points.len() as u32 }
	}

	pub fn render<'a>(&'a self, point_cloud_pass: &mut PointCloudPass<'a, '_>) {
		if self.instances == 0 {
			return;
		}
		point_cloud_pass.0.set_vertex_buffer(1, self.buffer.slice(..));
		point_cloud_pass.0.draw(0..6, 0..self.instances);
	}
}
