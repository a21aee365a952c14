use super::State;
use std::collections::HashSet;

pub struct Keyboard {
	pub(crate) pressed: HashSet<KeyCode>,
}

impl Keyboard {
	pub fn new() -> Self {
		Self { pressed: HashSet::new() }
	}

	pub fn update(&mut self, key: KeyCode, key_state: State) {
		match key_state {
			State::Pressed => {
				self.pressed.insert(key);
			},
			State::Released => {
				self.pressed.remove(&key);
			},
		}
	}

	pub fn pressed(&self, key: KeyCode) -> bool {
		self.pressed.contains(&key)
	}

	/// Drop all held keys, used when the window loses focus.
	pub fn clear(&mut self) {
		self.pressed.clear();
	}
}

impl Default for Keyboard {
	fn default() -> Self {
		Self::new()
	}
}

pub type KeyCode = winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn press_and_release() {
		let mut keyboard = Keyboard::new();
		keyboard.update(KeyCode::KeyW, State::Pressed);
		keyboard.update(KeyCode::KeyA, State::Pressed);
		assert!(keyboard.pressed(KeyCode::KeyW));
		keyboard.update(KeyCode::KeyW, State::Released);
		assert!(!keyboard.pressed(KeyCode::KeyW));
		assert!(keyboard.pressed(KeyCode::KeyA));
		keyboard.clear();
		assert!(!keyboard.pressed(KeyCode::KeyA));
	}
}
