use nalgebra as na;
use wgpu::util::DeviceExt;

use crate::State;

/// Maps OpenGL clip depth `[-1, 1]` to the `[0, 1]` range of wgpu.
#[rustfmt::skip]
fn opengl_to_wgpu() -> na::Matrix4<f32> {
	na::Matrix4::new(
		1.0, 0.0, 0.0, 0.0,
		0.0, 1.0, 0.0, 0.0,
		0.0, 0.0, 0.5, 0.5,
		0.0, 0.0, 0.0, 1.0,
	)
}

#[derive(Clone, Copy, Debug)]
pub struct Camera3D {
	pub aspect: f32,
	pub fovy: f32,
	pub near: f32,
	pub far: f32,
}

impl Camera3D {
	pub fn projection(&self) -> na::Matrix4<f32> {
		opengl_to_wgpu() * na::Perspective3::new(self.aspect, self.fovy, self.near, self.far).to_homogeneous()
	}

	pub fn view_projection(&self, transform: &na::Affine3<f32>) -> na::Matrix4<f32> {
		self.projection() * transform.inverse().to_homogeneous()
	}
}

pub struct Camera3DGPU {
	buffer: wgpu::Buffer,
	bind_group: wgpu::BindGroup,
}

impl Camera3DGPU {
	pub fn new(state: &State, camera: &Camera3D, transform: &na::Affine3<f32>) -> Self {
		let uniform = Uniform { view_proj: camera.view_projection(transform) };
		let buffer = state
			.device
			.create_buffer_init(&wgpu::util::BufferInitDescriptor {
				label: Some("Camera Buffer"),
				contents: bytemuck::cast_slice(&[uniform]),
				usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
			});

		let bind_group = state.device.create_bind_group(&wgpu::BindGroupDescriptor {
			layout: &Self::get_layout(state),
			entries: &[wgpu::BindGroupEntry {
				binding: 0,
				resource: buffer.as_entire_binding(),
			}],
			label: Some("camera_bind_group"),
		});
		Self { buffer, bind_group }
	}

	pub fn update(&self, state: &State, camera: &Camera3D, transform: &na::Affine3<f32>) {
		let uniform = Uniform { view_proj: camera.view_projection(transform) };
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
				label: Some("camera_bind_group_layout"),
			})
	}

	pub fn get_bind_group(&self) -> &wgpu::BindGroup {
		&self.bind_group
	}
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct Uniform {
	pub view_proj: na::Matrix4<f32>,
}

unsafe impl bytemuck::Zeroable for Uniform {}
unsafe impl bytemuck::Pod for Uniform {}
