use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;

use crate::{DepthTexture, RenderError, Window};

#[derive(Debug)]
pub struct State {
	pub device: wgpu::Device,
	pub queue: wgpu::Queue,
	pub surface_format: wgpu::TextureFormat,
}

impl State {
	/// Open a window and create the device that renders into it.
	pub async fn new(title: &str, event_loop: &ActiveEventLoop) -> Result<(Self, Window), RenderError> {
		let attributes = winit::window::Window::default_attributes()
			.with_title(title)
			.with_min_inner_size(winit::dpi::LogicalSize { width: 10, height: 10 });
		let window = Arc::new(event_loop.create_window(attributes)?);

		let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
			backends: wgpu::Backends::PRIMARY,
			..Default::default()
		});

		let surface = instance.create_surface(window.clone())?;

		let adapter = instance
			.request_adapter(&wgpu::RequestAdapterOptions {
				power_preference: wgpu::PowerPreference::HighPerformance,
				compatible_surface: Some(&surface),
				force_fallback_adapter: false,
			})
			.await
			.ok_or(RenderError::NoAdapter)?;
		let info = adapter.get_info();
		log::info!("Using {} ({:?})", info.name, info.backend);

		let (device, queue) = adapter
			.request_device(
				&wgpu::DeviceDescriptor {
					label: Some("device"),
					required_features: wgpu::Features::empty(),
					required_limits: wgpu::Limits::default(),
					..Default::default()
				},
				None,
			)
			.await?;

		let size = window.inner_size();
		let surface_caps = surface.get_capabilities(&adapter);
		// channel values are written as given, without an sRGB transfer
		let surface_format = surface_caps
			.formats
			.iter()
			.find(|f| !f.is_srgb())
			.or(surface_caps.formats.first())
			.copied()
			.ok_or(RenderError::NoSurfaceFormat)?;
		let config = wgpu::SurfaceConfiguration {
			usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
			format: surface_format,
			width: size.width.max(1),
			height: size.height.max(1),
			present_mode: surface_caps.present_modes[0],
			alpha_mode: surface_caps.alpha_modes[0],
			desired_maximum_frame_latency: 2,
			view_formats: Vec::new(),
		};
		log::debug!("Surface {:?} {}x{}", config.format, config.width, config.height);
		surface.configure(&device, &config);

		let depth_texture = DepthTexture::new(&device, &config);

		let window = Window::new(window, config, surface, depth_texture);

		Ok((Self { device, queue, surface_format }, window))
	}

	pub fn device(&self) -> &wgpu::Device {
		&self.device
	}

	pub fn queue(&self) -> &wgpu::Queue {
		&self.queue
	}

	pub fn surface_format(&self) -> wgpu::TextureFormat {
		self.surface_format
	}
}
