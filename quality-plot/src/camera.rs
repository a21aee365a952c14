use nalgebra as na;

const BASE_ROTATE_SPEED: f32 = 0.005;

/// 45 degrees
const FIELD_OF_VIEW: f32 = 45.0 * std::f32::consts::TAU / 360.0;

/// Initial view direction, similar to the default matplotlib 3D axes.
const INITIAL_YAW: f32 = -60.0 * std::f32::consts::TAU / 360.0;
const INITIAL_PITCH: f32 = 30.0 * std::f32::consts::TAU / 360.0;

/// Camera controller
pub struct Camera {
	gpu: render::Camera3DGPU,
	cam: render::Camera3D,
	orbit: Orbit,
}

impl Camera {
	/// Orbit around the origin, far enough away to see a sphere of `radius`.
	pub fn new(state: &render::State, aspect: f32, radius: f32) -> Self {
		let radius = radius.max(f32::EPSILON);
		let camera = render::Camera3D {
			aspect,
			fovy: FIELD_OF_VIEW,
			near: radius * 0.01,
			far: radius * 1_000.0,
		};
		let offset = radius / (FIELD_OF_VIEW / 2.0).sin();
		let orbit = Orbit::new(offset, radius * 0.01, INITIAL_YAW, INITIAL_PITCH);

		Self {
			gpu: render::Camera3DGPU::new(state, &camera, &orbit.transform),
			cam: camera,
			orbit,
		}
	}

	pub fn update_aspect(&mut self, aspect: f32, state: &render::State) {
		self.cam.aspect = aspect;
		self.update_gpu(state);
	}

	fn update_gpu(&self, state: &render::State) {
		self.gpu.update(state, &self.cam, &self.orbit.transform);
	}

	pub fn movement(&mut self, direction: na::Vector2<f32>, state: &render::State) {
		self.orbit.movement(direction);
		self.update_gpu(state);
	}

	pub fn rotate(&mut self, delta: na::Vector2<f32>, state: &render::State) {
		self.orbit.rotate(delta);
		self.update_gpu(state);
	}

	pub fn scroll(&mut self, value: f32, state: &render::State) {
		self.orbit.scroll(value);
		self.update_gpu(state);
	}

	pub fn gpu(&self) -> &render::Camera3DGPU {
		&self.gpu
	}
}

/// Camera transform circling a center point at `offset` distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
	pub transform: na::Affine3<f32>,
	offset: f32,
	min_offset: f32,
}

impl Orbit {
	pub fn new(offset: f32, min_offset: f32, yaw: f32, pitch: f32) -> Self {
		let transform = na::Affine3::identity()
			* na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), yaw)
			* na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), -pitch)
			* na::Translation3::new(0.0, 0.0, offset);
		Self { transform, offset, min_offset }
	}

	#[cfg(test)]
	pub fn offset(&self) -> f32 {
		self.offset
	}

	#[cfg(test)]
	pub fn position(&self) -> na::Point3<f32> {
		self.transform * na::Point3::origin()
	}

	pub fn center(&self) -> na::Point3<f32> {
		self.transform * na::point![0.0, 0.0, -self.offset]
	}

	/// Move the center in the horizontal plane, `direction` is scaled by the offset.
	pub fn movement(&mut self, direction: na::Vector2<f32>) {
		let right = self.transform * na::Vector3::x();
		let forward = right.cross(&na::Vector3::y());
		let vector = (right * direction.x + forward * direction.y) * self.offset;
		self.transform = na::Translation3 { vector } * self.transform;
	}

	/// Yaw around the vertical axis and pitch around the view x axis, both through the center.
	pub fn rotate(&mut self, delta: na::Vector2<f32>) {
		let offset = self.offset;
		let d = self.center();
		self.transform = na::Translation3 { vector: d.coords }
			* na::Rotation3::from_axis_angle(&na::Vector3::y_axis(), delta.x * -BASE_ROTATE_SPEED)
			* na::Translation3 { vector: -d.coords }
			* self.transform
			* na::Translation3::new(0.0, 0.0, -offset)
			* na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), delta.y * -BASE_ROTATE_SPEED)
			* na::Translation3::new(0.0, 0.0, offset);
	}

	pub fn scroll(&mut self, value: f32) {
		let new_offset = (self.offset * (1.0 + value / 10.0)).max(self.min_offset);
		self.transform *= na::Translation3::new(0.0, 0.0, new_offset - self.offset);
		self.offset = new_offset;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn approx(a: na::Point3<f32>, b: na::Point3<f32>) -> bool {
		(a - b).norm() < 1e-3
	}

	#[test]
	fn starts_around_origin() {
		let orbit = Orbit::new(10.0, 0.1, INITIAL_YAW, INITIAL_PITCH);
		assert!(approx(orbit.center(), na::Point3::origin()));
		assert!((orbit.position().coords.norm() - 10.0).abs() < 1e-4);
		// looking down onto the data
		assert!(orbit.position().y > 0.0);
	}

	#[test]
	fn rotation_keeps_center_and_distance() {
		let mut orbit = Orbit::new(10.0, 0.1, 0.0, 0.0);
		let center = orbit.center();
		orbit.rotate(na::vector![120.0, -45.0]);
		assert!(approx(orbit.center(), center));
		assert!(((orbit.position() - center).norm() - 10.0).abs() < 1e-3);
	}

	#[test]
	fn scroll_is_clamped() {
		let mut orbit = Orbit::new(10.0, 0.5, 0.0, 0.0);
		let center = orbit.center();
		orbit.scroll(-5.0);
		assert!((orbit.offset() - 5.0).abs() < 1e-5);
		assert!(approx(orbit.center(), center));
		for _ in 0..100 {
			orbit.scroll(-9.0);
		}
		assert_eq!(orbit.offset(), 0.5);
		assert!(approx(orbit.center(), center));
	}

	#[test]
	fn movement_stays_horizontal() {
		let mut orbit = Orbit::new(10.0, 0.1, INITIAL_YAW, INITIAL_PITCH);
		let before = orbit.center();
		orbit.movement(na::vector![0.1, 0.2]);
		let after = orbit.center();
		assert!((after.y - before.y).abs() < 1e-4);
		assert!((after - before).norm() > 0.0);
	}
}
