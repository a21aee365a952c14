use std::sync::Arc;

use crate::{DepthTexture, RenderContext, State};

pub struct Window {
	window: Arc<winit::window::Window>,
	config: wgpu::SurfaceConfiguration,
	surface: wgpu::Surface<'static>,
	depth_texture: DepthTexture,
}

impl Window {
	pub(crate) fn new(
		window: Arc<winit::window::Window>,
		config: wgpu::SurfaceConfiguration,
		surface: wgpu::Surface<'static>,
		depth_texture: DepthTexture,
	) -> Self {
		Self { window, config, surface, depth_texture }
	}

	pub fn inner_size(&self) -> winit::dpi::PhysicalSize<u32> {
		self.window.inner_size()
	}

	pub fn get_aspect(&self) -> f32 {
		self.config.width as f32 / self.config.height as f32
	}

	pub fn config(&self) -> &wgpu::SurfaceConfiguration {
		&self.config
	}

	pub fn request_redraw(&self) {
		self.window.request_redraw();
	}

	pub fn resized(&mut self, state: &State) {
		let size = self.window.inner_size();
		self.config.width = size.width.max(1);
		self.config.height = size.height.max(1);
		self.surface.configure(&state.device, &self.config);
		self.depth_texture = DepthTexture::new(&state.device, &self.config);
	}

	/// Record one frame with `render` and present it.
	pub fn render(&self, state: &State, render: impl FnOnce(&mut RenderContext)) -> Result<(), wgpu::SurfaceError> {
		let output = self.surface.get_current_texture()?;
		let view = output.texture.create_view(&Default::default());
		let encoder = state
			.device
			.create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });

		let mut context = RenderContext {
			view,
			depth_texture: &self.depth_texture,
			encoder,
		};
		render(&mut context);

		state.queue.submit(Some(context.encoder.finish()));
		output.present();
		Ok(())
	}
}
