use super::ApproxEq;
use auto_ops::impl_op_ex;

pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
pub const ONE: Vector2 = Vector2 { x: 1.0, y: 1.0 };
pub const UNIT_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
pub const UNIT_Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };

#[derive(Default, Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
	pub x: f32,
	pub y: f32
}

impl Vector2 {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	pub fn from_scalar(scalar: f32) -> Self {
		Self { x: scalar, y: scalar }
	}

	pub fn set(&mut self, x: f32, y: f32) {
		self.x = x;
		self.y = y;
	}

	pub fn set_from_scalar(&mut self, scalar: f32) {
		self.x = scalar;
		self.y = scalar;
	}

	pub fn length(&self) -> f32 {
		self.x.hypot(self.y)
	}

	pub fn length_sq(&self) -> f32 {
		self.x * self.x + self.y * self.y
	}

	pub fn dot(&self, other: &Self) -> f32 {
		self.x * other.x + self.y * other.y
	}

	/// Angle of the vector measured counterclockwise from the positive x axis, in (-π, π].
	pub fn angle(&self) -> f32 {
		self.y.atan2(self.x)
	}

	/// Rotates counterclockwise by `angle` radians about the origin.
	pub fn rotate(&self, angle: f32) -> Self {
		let (sin, cos) = angle.sin_cos();

		Self {
			x: self.x * cos - self.y * sin,
			y: self.x * sin + self.y * cos
		}
	}

	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl_op_ex!(+ |a: &Vector2, b: &Vector2| -> Vector2 {
	let mut r = *a;
	r += b;
	r
});

impl_op_ex!(- |a: &Vector2, b: &Vector2| -> Vector2 {
	let mut r = *a;
	r -= b;
	r
});

impl_op_ex!(* |a: &Vector2, b: &Vector2| -> Vector2 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(+= |a: &mut Vector2, b: &Vector2| {
	a.x += b.x;
	a.y += b.y;
});

impl_op_ex!(-= |a: &mut Vector2, b: &Vector2| {
	a.x -= b.x;
	a.y -= b.y;
});

impl_op_ex!(*= |a: &mut Vector2, b: &Vector2| {
	a.x *= b.x;
	a.y *= b.y;
});

impl_op_ex!(* |a: &Vector2, b: f32| -> Vector2 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(/ |a: &Vector2, b: f32| -> Vector2 {
	let mut r = *a;
	r /= b;
	r
});

impl_op_ex!(*= |a: &mut Vector2, b: f32| {
	a.x *= b;
	a.y *= b;
});

impl_op_ex!(/= |a: &mut Vector2, b: f32| {
	a.x /= b;
	a.y /= b;
});

impl_op_ex!(- |a: &Vector2| -> Vector2 {
	Vector2 {
		x: -a.x,
		y: -a.y
	}
});

impl ApproxEq for Vector2 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		(self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
	}
}
