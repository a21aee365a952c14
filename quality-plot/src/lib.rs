mod camera;
mod program;
mod scene;

pub use scene::Scene;

use nalgebra as na;
use program::Program;
use quality::Dataset;
use std::path::Path;
use winit::{
	application::ApplicationHandler,
	event::WindowEvent,
	event_loop::{ActiveEventLoop, ControlFlow},
	keyboard::{KeyCode, PhysicalKey},
};

/// Input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "res_horseshoe_u.txt";

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Quality(#[from] quality::Error),

	#[error(transparent)]
	EventLoop(#[from] winit::error::EventLoopError),

	#[error(transparent)]
	Render(#[from] render::RenderError),

	#[error("surface out of memory")]
	OutOfMemory,
}

/// Read the input file and log what was found.
pub fn load(path: impl AsRef<Path>) -> Result<Dataset, Error> {
	let path = path.as_ref();
	let (dataset, summary) = Dataset::load(path)?;
	log::info!(
		"Loaded {} records from {} ({} spatial, {} planar, {} of {} lines skipped)",
		dataset.len(),
		path.display(),
		summary.spatial,
		summary.planar,
		summary.skipped,
		summary.lines,
	);
	if let Some(bounds) = dataset.bounds() {
		log::info!(
			"Bounds [{}, {}, {}] to [{}, {}, {}]",
			bounds.min.x,
			bounds.min.y,
			bounds.min.z,
			bounds.max.x,
			bounds.max.y,
			bounds.max.z,
		);
	} else {
		log::warn!("No records in {}", path.display());
	}
	let out_of_range = dataset.out_of_range();
	if out_of_range > 0 {
		log::warn!("{} records have a quality outside [0, 1]", out_of_range);
	}
	Ok(dataset)
}

/// Show the dataset as a scatter plot, blocks until the window is closed.
pub fn run(dataset: Dataset) -> Result<(), Error> {
	let scene = Scene::new(&dataset);
	drop(dataset);

	let event_loop = winit::event_loop::EventLoop::new()?;
	let mut app = App::Pending(scene);
	event_loop.run_app(&mut app)?;

	if let App::Error(err) = app {
		return Err(err);
	}
	Ok(())
}

enum App {
	Pending(Scene),
	Running(Program),
	Error(Error),
	Exited,
}

impl ApplicationHandler for App {
	fn resumed(&mut self, event_loop: &ActiveEventLoop) {
		match std::mem::replace(self, Self::Exited) {
			Self::Pending(scene) => match Program::new(event_loop, &scene) {
				Ok(program) => {
					program.window.request_redraw();
					*self = Self::Running(program);
				},
				Err(err) => {
					event_loop.exit();
					*self = Self::Error(err);
				},
			},
			other => {
				log::debug!("resumed");
				*self = other;
			},
		}
	}

	fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
		self.try_do(event_loop, |program| {
			let flow = if program.update() { ControlFlow::Poll } else { ControlFlow::Wait };
			event_loop.set_control_flow(flow);
			Ok(())
		})
	}

	fn window_event(
		&mut self,
		event_loop: &ActiveEventLoop,
		_window_id: winit::window::WindowId,
		event: WindowEvent,
	) {
		self.try_do(event_loop, move |program| {
			match event {
				WindowEvent::CloseRequested => {
					event_loop.exit();
				},
				WindowEvent::RedrawRequested => {
					program.render()?;
				},
				WindowEvent::Resized(_size) => {
					program.resized();
				},
				WindowEvent::ScaleFactorChanged { .. } => {
					program.resized();
				},
				WindowEvent::Focused(false) => {
					program.focus_lost();
				},
				WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
					PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
					PhysicalKey::Code(key) => program.key(key, event.state),
					PhysicalKey::Unidentified(_) => {},
				},
				WindowEvent::MouseInput { state, button, .. } => {
					program.mouse_click(button.into(), state);
				},
				WindowEvent::CursorMoved { position, .. } => {
					let position = na::point![position.x as f32, position.y as f32];
					program.mouse_move(position);
				},
				WindowEvent::MouseWheel { delta, .. } => {
					let delta = match delta {
						winit::event::MouseScrollDelta::LineDelta(_, y) => -y,
						winit::event::MouseScrollDelta::PixelDelta(pos) => -pos.y as f32 / 100.0,
					};
					program.scroll(delta);
				},
				_ => {},
			}
			Ok(())
		})
	}
}

impl App {
	fn try_do(&mut self, event_loop: &ActiveEventLoop, action: impl FnOnce(&mut Program) -> Result<(), Error>) {
		if let Self::Running(program) = self {
			if let Err(err) = action(program) {
				event_loop.exit();
				*self = Self::Error(err);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn load_two_layouts() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "1.0 2.0 3.0 0.25 99").unwrap();
		writeln!(file, "0 0 5.0 6.0 z 0.75").unwrap();
		file.flush().unwrap();

		let dataset = load(file.path()).unwrap();
		assert_eq!(
			dataset.records(),
			&[
				quality::Record::new(1.0, 2.0, 3.0, 0.25),
				quality::Record::new(5.0, 6.0, 0.0, 0.75)
			]
		);
		let scene = Scene::new(&dataset);
		assert_eq!(scene.points.len(), 2);
	}

	#[test]
	fn load_reports_bad_number() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "1 2 3 0.5 1").unwrap();
		writeln!(file, "1 2 3 bad 1").unwrap();
		file.flush().unwrap();

		let err = load(file.path()).unwrap_err();
		assert!(matches!(err, Error::Quality(quality::Error::InvalidNumber { line: 2, .. })));
		assert_eq!(err.to_string(), "line 2: invalid number \"bad\": invalid float literal");
	}

	#[test]
	fn input_file_is_fixed() {
		assert_eq!(DEFAULT_INPUT, "res_horseshoe_u.txt");
		assert!(std::path::Path::new(DEFAULT_INPUT).is_relative());
	}

	#[test]
	fn load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = load(dir.path().join(DEFAULT_INPUT)).unwrap_err();
		assert!(matches!(err, Error::Quality(quality::Error::Open { .. })));
	}
}
