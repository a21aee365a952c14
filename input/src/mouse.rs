use super::State;
use nalgebra as na;
use std::collections::HashSet;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MouseButton {
	Left,
	Right,
	Middle,
	Backward,
	Forward,
	Unknown,
}

impl From<winit::event::MouseButton> for MouseButton {
	fn from(value: winit::event::MouseButton) -> Self {
		match value {
			winit::event::MouseButton::Left => Self::Left,
			winit::event::MouseButton::Right => Self::Right,
			winit::event::MouseButton::Middle => Self::Middle,
			winit::event::MouseButton::Back => Self::Backward,
			winit::event::MouseButton::Forward => Self::Forward,
			winit::event::MouseButton::Other(_) => Self::Unknown,
		}
	}
}

pub struct Mouse {
	pub(crate) pressed: HashSet<MouseButton>,
	pub(crate) position: na::Point2<f32>,
}

impl Mouse {
	pub fn new() -> Self {
		Self {
			pressed: HashSet::new(),
			position: na::Point2::origin(),
		}
	}

	pub fn update(&mut self, button: MouseButton, button_state: State) {
		match button_state {
			State::Pressed => self.pressed.insert(button),
			State::Released => self.pressed.remove(&button),
		};
	}

	/// Store the new cursor position and return the movement since the last one.
	pub fn delta(&mut self, position: na::Point2<f32>) -> na::Vector2<f32> {
		let delta = position - self.position;
		self.position = position;
		delta
	}

	pub fn pressed(&self, button: MouseButton) -> bool {
		self.pressed.contains(&button)
	}

	pub fn position(&self) -> na::Point2<f32> {
		self.position
	}
}

impl Default for Mouse {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delta_tracks_last_position() {
		let mut mouse = Mouse::new();
		assert_eq!(mouse.delta(na::point![10.0, 5.0]), na::vector![10.0, 5.0]);
		assert_eq!(mouse.delta(na::point![12.0, 1.0]), na::vector![2.0, -4.0]);
		assert_eq!(mouse.position(), na::point![12.0, 1.0]);
	}

	#[test]
	fn buttons() {
		let mut mouse = Mouse::new();
		mouse.update(winit::event::MouseButton::Left.into(), State::Pressed);
		assert!(mouse.pressed(MouseButton::Left));
		assert!(!mouse.pressed(MouseButton::Right));
		mouse.update(MouseButton::Left, State::Released);
		assert!(!mouse.pressed(MouseButton::Left));
	}
}
