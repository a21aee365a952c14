use crate::{DepthTexture, State};

pub(crate) struct PipelineDescription<'a> {
	pub label: &'a str,
	pub shader: wgpu::ShaderModuleDescriptor<'a>,
	pub vertex_buffers: &'a [wgpu::VertexBufferLayout<'a>],
	pub bind_group_layouts: &'a [&'a wgpu::BindGroupLayout],
	pub topology: wgpu::PrimitiveTopology,
}

pub(crate) fn create_pipeline(state: &State, description: PipelineDescription) -> wgpu::RenderPipeline {
	let shader = state.device.create_shader_module(description.shader);
	let render_pipeline_layout = state
		.device
		.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
			label: Some(description.label),
			bind_group_layouts: description.bind_group_layouts,
			push_constant_ranges: &[],
		});

	state
		.device
		.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
			label: Some(description.label),
			layout: Some(&render_pipeline_layout),
			vertex: wgpu::VertexState {
				module: &shader,
				entry_point: "vs_main",
				compilation_options: Default::default(),
				buffers: description.vertex_buffers,
			},
			fragment: Some(wgpu::FragmentState {
				module: &shader,
				entry_point: "fs_main",
				compilation_options: Default::default(),
				targets: &[Some(wgpu::ColorTargetState {
					format: state.surface_format,
					blend: Some(wgpu::BlendState::REPLACE),
					write_mask: wgpu::ColorWrites::ALL,
				})],
			}),
			primitive: wgpu::PrimitiveState {
				topology: description.topology,
				strip_index_format: None,
				front_face: wgpu::FrontFace::Ccw,
				cull_mode: None,
				polygon_mode: wgpu::PolygonMode::Fill,
				unclipped_depth: false,
				conservative: false,
			},
			depth_stencil: Some(DepthTexture::depth_stencil()),
			multisample: wgpu::MultisampleState {
				count: 1,
				mask: !0,
				alpha_to_coverage_enabled: false,
			},
			multiview: None,
			cache: None,
		})
}
