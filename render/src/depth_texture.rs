pub struct DepthTexture {
	pub view: wgpu::TextureView,
}

impl DepthTexture {
	pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

	pub fn new(device: &wgpu::Device, config: &wgpu::SurfaceConfiguration) -> Self {
		let texture = device.create_texture(&wgpu::TextureDescriptor {
			label: Some("depth"),
			size: wgpu::Extent3d {
				width: config.width,
				height: config.height,
				depth_or_array_layers: 1,
			},
			mip_level_count: 1,
			sample_count: 1,
			dimension: wgpu::TextureDimension::D2,
			format: Self::DEPTH_FORMAT,
			view_formats: &[],
			usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
		});
		let view = texture.create_view(&Default::default());
		Self { view }
	}

	pub fn depth_stencil() -> wgpu::DepthStencilState {
		wgpu::DepthStencilState {
			format: Self::DEPTH_FORMAT,
			depth_write_enabled: true,
			depth_compare: wgpu::CompareFunction::Less,
			stencil: wgpu::StencilState::default(),
			bias: wgpu::DepthBiasState::default(),
		}
	}
}
