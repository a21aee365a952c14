mod camera_3d;
mod depth_texture;
mod lines;
mod pipeline;
mod point;
mod point_cloud;
mod render_pass;
mod state;
mod window;

pub use camera_3d::*;
pub use depth_texture::*;
pub use lines::*;
pub use point::*;
pub use point_cloud::*;
pub use render_pass::*;
pub use state::*;
pub use window::*;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
	#[error(transparent)]
	Os(#[from] winit::error::OsError),

	#[error(transparent)]
	CreateSurface(#[from] wgpu::CreateSurfaceError),

	#[error(transparent)]
	RequestDevice(#[from] wgpu::RequestDeviceError),

	#[error("no compatible graphics adapter found")]
	NoAdapter,

	#[error("surface supports no texture format")]
	NoSurfaceFormat,
}
