use super::{Vector2, ApproxEq};
use auto_ops::impl_op_ex;

pub const IDENTITY: Matrix3 = Matrix3 {
	elements: [
		[1.0, 0.0, 0.0],
		[0.0, 1.0, 0.0],
		[0.0, 0.0, 1.0]
	]
};

/// Row major 2D affine matrix acting on column vectors `[x, y, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3 {
	pub elements: [[f32; 3]; 3]
}

impl Default for Matrix3 {
	fn default() -> Self {
		IDENTITY
	}
}

impl Matrix3 {
	pub fn new(elements: [[f32; 3]; 3]) -> Self {
		Self { elements }
	}

	/// Builds `translation * rotation * scale`.
	pub fn from_composition(position: &Vector2, rotation: f32, scale: &Vector2) -> Self {
		let mut m = IDENTITY;
		m.compose(position, rotation, scale);
		m
	}

	pub fn compose(&mut self, position: &Vector2, rotation: f32, scale: &Vector2) {
		let (sin, cos) = rotation.sin_cos();
		let se = &mut self.elements;

		se[0][0] = cos * scale.x;
		se[0][1] = -sin * scale.y;
		se[0][2] = position.x;

		se[1][0] = sin * scale.x;
		se[1][1] = cos * scale.y;
		se[1][2] = position.y;

		se[2][0] = 0.0;
		se[2][1] = 0.0;
		se[2][2] = 1.0;
	}

	pub fn determinant(&self) -> f32 {
		let e = &self.elements;
		e[0][0] * e[1][1] - e[0][1] * e[1][0]
	}

	/// Inverse of the affine part, or `None` when the linear part collapses the plane.
	pub fn inverse(&self) -> Option<Self> {
		let det = self.determinant();

		if det == 0.0 || !det.is_finite() {
			return None;
		}

		let e = &self.elements;
		let inv_det = 1.0 / det;

		let a = e[1][1] * inv_det;
		let b = -e[0][1] * inv_det;
		let c = -e[1][0] * inv_det;
		let d = e[0][0] * inv_det;

		let tx = -(a * e[0][2] + b * e[1][2]);
		let ty = -(c * e[0][2] + d * e[1][2]);

		Some(Self::new([
			[a, b, tx],
			[c, d, ty],
			[0.0, 0.0, 1.0]]))
	}

	pub fn transform_point(&self, point: &Vector2) -> Vector2 {
		let e = &self.elements;

		Vector2 {
			x: e[0][0] * point.x + e[0][1] * point.y + e[0][2],
			y: e[1][0] * point.x + e[1][1] * point.y + e[1][2]
		}
	}
}

impl_op_ex!(* |a: &Matrix3, b: &Matrix3| -> Matrix3 {
	let mut r = *a;
	r *= b;
	r
});

impl_op_ex!(*= |a: &mut Matrix3, b: &Matrix3| {
	let ae = &mut a.elements;
	let be = &b.elements;

	let (a00, a01, a02) = (ae[0][0], ae[0][1], ae[0][2]);
	let (a10, a11, a12) = (ae[1][0], ae[1][1], ae[1][2]);
	let (a20, a21, a22) = (ae[2][0], ae[2][1], ae[2][2]);

	let (b00, b01, b02) = (be[0][0], be[0][1], be[0][2]);
	let (b10, b11, b12) = (be[1][0], be[1][1], be[1][2]);
	let (b20, b21, b22) = (be[2][0], be[2][1], be[2][2]);

	ae[0][0] = a00 * b00 + a01 * b10 + a02 * b20;
	ae[0][1] = a00 * b01 + a01 * b11 + a02 * b21;
	ae[0][2] = a00 * b02 + a01 * b12 + a02 * b22;

	ae[1][0] = a10 * b00 + a11 * b10 + a12 * b20;
	ae[1][1] = a10 * b01 + a11 * b11 + a12 * b21;
	ae[1][2] = a10 * b02 + a11 * b12 + a12 * b22;

	ae[2][0] = a20 * b00 + a21 * b10 + a22 * b20;
	ae[2][1] = a20 * b01 + a21 * b11 + a22 * b21;
	ae[2][2] = a20 * b02 + a21 * b12 + a22 * b22;
});

impl ApproxEq for Matrix3 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		for i in 0..3 {
			for j in 0..3 {
				if (self.elements[i][j] - other.elements[i][j]).abs() > tol {
					return false;
				}
			}
		}

		true
	}
}
