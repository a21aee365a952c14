use nalgebra as na;

use crate::DepthTexture;

pub struct RenderPass<'a>(wgpu::RenderPass<'a>);

impl<'a> std::ops::Deref for RenderPass<'a> {
	type Target = wgpu::RenderPass<'a>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<'a> std::ops::DerefMut for RenderPass<'a> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl<'a> RenderPass<'a> {
	pub fn new(render_pass: wgpu::RenderPass<'a>) -> Self {
		Self(render_pass)
	}
}

/// Target of a single frame, handed to the render callback of [`crate::Window::render`].
pub struct RenderContext<'a> {
	pub(crate) view: wgpu::TextureView,
	pub(crate) depth_texture: &'a DepthTexture,
	pub(crate) encoder: wgpu::CommandEncoder,
}

impl<'a> RenderContext<'a> {
	/// Clear color and depth, then start the main pass.
	pub fn render_pass(&mut self, background: na::Point3<f32>) -> RenderPass<'_> {
		RenderPass::new(self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
			label: Some("Render Pass"),
			color_attachments: &[Some(wgpu::RenderPassColorAttachment {
				view: &self.view,
				resolve_target: None,
				ops: wgpu::Operations {
					load: wgpu::LoadOp::Clear(wgpu::Color {
						r: background.x as f64,
						g: background.y as f64,
						b: background.z as f64,
						a: 1.0,
					}),
					store: wgpu::StoreOp::Store,
				},
			})],
			depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
				view: &self.depth_texture.view,
				depth_ops: Some(wgpu::Operations {
					load: wgpu::LoadOp::Clear(1.0),
					store: wgpu::StoreOp::Store,
				}),
				stencil_ops: None,
			}),
			timestamp_writes: None,
			occlusion_query_set: None,
		}))
	}
}
