pub mod vector2;
pub use vector2::Vector2;

pub mod matrix3;
pub use matrix3::Matrix3;

use std::fmt::Debug;

pub trait ApproxEq {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool;
}

impl ApproxEq for f32 {
	fn approx_eq(&self, other: &Self, tol: f32) -> bool {
		(self - other).abs() <= tol
	}
}

pub fn assert_approx_eq<T: ApproxEq + Debug>(left: &T, right: &T, tol: f32) {
	if !left.approx_eq(right, tol) {
		panic!("assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n   tol: `{}`", left, right, tol);
	}
}
