use crate::math::{vector2, Vector2, Matrix3};

/// Position, rotation and scale of a node, expressed in its parent's frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform2D {
	pub position: Vector2,
	pub rotation: f32,
	pub scale: Vector2
}

impl Transform2D {
	pub fn new() -> Self {
		Self {
			position: vector2::ZERO,
			rotation: 0.0,
			scale: vector2::ONE
		}
	}

	pub fn from(position: Vector2, rotation: f32, scale: Vector2) -> Self {
		Self {
			position,
			rotation,
			scale
		}
	}

	/// Maps points from this node's frame into its parent's frame.
	pub fn matrix(&self) -> Matrix3 {
		Matrix3::from_composition(&self.position, self.rotation, &self.scale)
	}
}

impl Default for Transform2D {
	fn default() -> Self {
		Self::new()
	}
}
