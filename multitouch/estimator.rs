//! Two-point estimation of a similarity transform: the translation, uniform scale and rotation
//! that carry one pair of points onto another.
//!
//! The transform is anchored at the first point of each pair. Stretch along a single axis is not
//! modelled; the ratio of the two baseline lengths is the whole scale.

use std::f32::consts::{PI, TAU};
use crate::{
	math::{vector2, Vector2, Matrix3},
	EstimateError,
	Transform2D
};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformResult {
	pub translation: Vector2,
	pub scale: f32,
	/// Radians in (-π, π].
	pub rotation: f32
}

impl TransformResult {
	pub fn identity() -> Self {
		Self {
			translation: vector2::ZERO,
			scale: 1.0,
			rotation: 0.0
		}
	}

	pub fn is_identity(&self) -> bool {
		*self == Self::identity()
	}

	pub fn apply_to_point(&self, point: &Vector2) -> Vector2 {
		point.rotate(self.rotation) * self.scale + self.translation
	}

	pub fn to_matrix(&self) -> Matrix3 {
		Matrix3::from_composition(&self.translation, self.rotation, &Vector2::from_scalar(self.scale))
	}

	/// The transform a node ends up with when this result is applied on top of `transform`,
	/// both living in the same parent frame.
	pub fn apply_to_transform(&self, transform: &Transform2D) -> Transform2D {
		Transform2D {
			position: self.apply_to_point(&transform.position),
			rotation: normalize_angle(transform.rotation + self.rotation),
			scale: transform.scale * self.scale
		}
	}

	/// Drops the scale and/or rotation components, then moves the translation so that
	/// `anchor` still lands where the full transform would put it.
	pub fn restricted(&self, keep_scale: bool, keep_rotation: bool, anchor: &Vector2) -> Self {
		let scale = if keep_scale { self.scale } else { 1.0 };
		let rotation = if keep_rotation { self.rotation } else { 0.0 };

		if scale == self.scale && rotation == self.rotation {
			return *self;
		}

		let target = self.apply_to_point(anchor);

		Self {
			translation: target - anchor.rotate(rotation) * scale,
			scale,
			rotation
		}
	}
}

impl Default for TransformResult {
	fn default() -> Self {
		Self::identity()
	}
}

/// Wraps an angle into (-π, π].
pub fn normalize_angle(angle: f32) -> f32 {
	if !angle.is_finite() {
		return angle;
	}

	let mut angle = angle % TAU;

	if angle > PI {
		angle -= TAU;
	}
	else if angle <= -PI {
		angle += TAU;
	}

	angle
}

/// Finds the transform that maps `before_p0` onto `after_p0` and the before baseline onto
/// the after baseline.
pub fn estimate(before_p0: &Vector2, before_p1: &Vector2, after_p0: &Vector2, after_p1: &Vector2) -> Result<TransformResult, EstimateError> {
	if ![before_p0, before_p1, after_p0, after_p1].iter().all(|p| p.is_finite()) {
		return Err(EstimateError::Degenerate);
	}

	let before = before_p1 - before_p0;
	let after = after_p1 - after_p0;

	let before_length = before.length();

	if before_length == 0.0 {
		return Err(EstimateError::Degenerate);
	}

	let scale = after.length() / before_length;

	if !scale.is_finite() {
		return Err(EstimateError::Degenerate);
	}

	let rotation = normalize_angle(after.angle() - before.angle());
	let translation = after_p0 - before_p0.rotate(rotation) * scale;

	if !translation.is_finite() {
		return Err(EstimateError::Degenerate);
	}

	Ok(TransformResult {
		translation,
		scale,
		rotation
	})
}

/// Runs [`estimate`] on the first two points of each side. Later points are ignored.
pub fn estimate_from_slices(before: &[Vector2], after: &[Vector2]) -> Result<TransformResult, EstimateError> {
	match (before, after) {
		([b0, b1, ..], [a0, a1, ..]) => estimate(b0, b1, a0, a1),
		_ => Err(EstimateError::InsufficientPoints {
			required: 2,
			found: before.len().min(after.len())
		})
	}
}

/// Single contact drag: pure translation.
pub fn estimate_translation(before: &Vector2, after: &Vector2) -> Result<TransformResult, EstimateError> {
	if !before.is_finite() || !after.is_finite() {
		return Err(EstimateError::Degenerate);
	}

	Ok(TransformResult {
		translation: after - before,
		..TransformResult::identity()
	})
}
