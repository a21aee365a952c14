/// RGB triple with unclamped channels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color {
	pub r: f64,
	pub g: f64,
	pub b: f64,
}

impl Color {
	pub fn new(r: f64, g: f64, b: f64) -> Self {
		Self { r, g, b }
	}

	/// Gradient from green at `0.0` to red at `1.0`.
	///
	/// Values outside `[0, 1]` are passed through, clipping is left to the renderer.
	pub fn from_quality(quality: f64) -> Self {
		Self { r: quality, g: 1.0 - quality, b: 0.0 }
	}

	pub fn to_array(self) -> [f64; 3] {
		[self.r, self.g, self.b]
	}
}
