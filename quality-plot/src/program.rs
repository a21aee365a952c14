use nalgebra as na;
use pollster::FutureExt;
use winit::event_loop::ActiveEventLoop;

use crate::{camera::Camera, scene::Scene, Error};

const TITLE: &str = "Quality";
const BACKGROUND: [f32; 3] = [1.0, 1.0, 1.0];
/// Sprite diameter in pixels.
const POINT_SIZE: f32 = 6.0;
/// Orbit offsets per second.
const PAN_SPEED: f32 = 0.5;
/// Longest frame time used for keyboard movement.
const MAX_DELTA: f32 = 0.1;

pub struct Program {
	pub state: render::State,
	pub window: render::Window,

	pub keyboard: input::Keyboard,
	pub mouse: input::Mouse,
	time: Time,
	paused: bool,

	camera: Camera,
	point_cloud_state: render::PointCloudState,
	environment: render::PointCloudEnvironment,
	point_cloud: render::PointCloud,
	lines_state: render::LinesState,
	axes: render::Lines,
}

impl Program {
	pub fn new(event_loop: &ActiveEventLoop, scene: &Scene) -> Result<Self, Error> {
		let (state, window) = render::State::new(TITLE, event_loop).block_on()?;

		let config = window.config();
		let environment = render::PointCloudEnvironment::new(
			&state,
			POINT_SIZE,
			[config.width as f32, config.height as f32],
		);
		let camera = Camera::new(&state, window.get_aspect(), scene.radius);

		Ok(Self {
			point_cloud_state: render::PointCloudState::new(&state),
			point_cloud: render::PointCloud::new(&state, &scene.points),
			lines_state: render::LinesState::new(&state),
			axes: render::Lines::new(&state, &scene.axes),
			environment,
			camera,

			keyboard: input::Keyboard::new(),
			mouse: input::Mouse::new(),
			time: Time::new(),
			paused: false,

			state,
			window,
		})
	}

	pub fn render(&mut self) -> Result<(), Error> {
		if self.paused {
			return Ok(());
		}
		let res = self.window.render(&self.state, |context| {
			let mut render_pass = context.render_pass(BACKGROUND.into());
			self.lines_state
				.render(&mut render_pass, self.camera.gpu(), &self.axes);
			let mut point_cloud_pass =
				self.point_cloud_state
					.render(&mut render_pass, self.camera.gpu(), &self.environment);
			self.point_cloud.render(&mut point_cloud_pass);
		});
		match res {
			Ok(()) => Ok(()),
			Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
				log::debug!("Surface lost, reconfiguring");
				self.resized();
				Ok(())
			},
			Err(wgpu::SurfaceError::OutOfMemory) => Err(Error::OutOfMemory),
			Err(err) => {
				log::warn!("Skipping frame: {}", err);
				Ok(())
			},
		}
	}

	/// Apply held movement keys, returns `true` while the camera is moving.
	pub fn update(&mut self) -> bool {
		let delta = self.time.elapsed().as_secs_f32().min(MAX_DELTA);
		let mut direction = na::vector![0.0, 0.0];
		if self.keyboard.pressed(input::KeyCode::KeyD) || self.keyboard.pressed(input::KeyCode::ArrowRight) {
			direction.x += 1.0;
		}
		if self.keyboard.pressed(input::KeyCode::KeyS) || self.keyboard.pressed(input::KeyCode::ArrowDown) {
			direction.y += 1.0;
		}
		if self.keyboard.pressed(input::KeyCode::KeyA) || self.keyboard.pressed(input::KeyCode::ArrowLeft) {
			direction.x -= 1.0;
		}
		if self.keyboard.pressed(input::KeyCode::KeyW) || self.keyboard.pressed(input::KeyCode::ArrowUp) {
			direction.y -= 1.0;
		}
		let l = direction.norm();
		if l == 0.0 {
			return false;
		}
		direction *= PAN_SPEED * delta / l;
		self.camera.movement(direction, &self.state);
		self.window.request_redraw();
		true
	}

	pub fn resized(&mut self) {
		let size = self.window.inner_size();
		if size.width == 0 || size.height == 0 {
			self.paused = true;
			return;
		}
		self.paused = false;
		self.window.resized(&self.state);
		self.camera.update_aspect(self.window.get_aspect(), &self.state);
		let config = self.window.config();
		self.environment.viewport = [config.width as f32, config.height as f32];
		self.environment.update(&self.state);
		self.window.request_redraw();
	}

	pub fn key(&mut self, key: input::KeyCode, key_state: input::State) {
		self.keyboard.update(key, key_state);
	}

	pub fn focus_lost(&mut self) {
		self.keyboard.clear();
	}

	pub fn mouse_click(&mut self, button: input::MouseButton, button_state: input::State) {
		self.mouse.update(button, button_state);
	}

	pub fn mouse_move(&mut self, position: na::Point2<f32>) {
		let delta = self.mouse.delta(position);
		if self.mouse.pressed(input::MouseButton::Left) {
			self.camera.rotate(delta, &self.state);
			self.window.request_redraw();
		}
	}

	pub fn scroll(&mut self, delta: f32) {
		self.camera.scroll(delta, &self.state);
		self.window.request_redraw();
	}
}

struct Time {
	last: std::time::Instant,
}

impl Time {
	pub fn new() -> Self {
		Self { last: std::time::Instant::now() }
	}

	pub fn elapsed(&mut self) -> std::time::Duration {
		let delta = self.last.elapsed();
		self.last = std::time::Instant::now();
		delta
	}
}
