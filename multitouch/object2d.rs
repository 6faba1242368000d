use crate::{math::Vector2, Transform2D};

/// Anything with a 2D position, rotation and scale that a gesture may drive.
pub trait Object2D {
	fn get_position(&self) -> &Vector2;
	fn get_position_mut(&mut self) -> &mut Vector2;

	fn get_rotation(&self) -> f32;
	fn get_rotation_mut(&mut self) -> &mut f32;

	fn get_scale(&self) -> &Vector2;
	fn get_scale_mut(&mut self) -> &mut Vector2;

	fn to_transform(&self) -> Transform2D {
		Transform2D::from(*self.get_position(), self.get_rotation(), *self.get_scale())
	}
}

impl Object2D for Transform2D {
	fn get_position(&self) -> &Vector2 {
		&self.position
	}

	fn get_position_mut(&mut self) -> &mut Vector2 {
		&mut self.position
	}

	fn get_rotation(&self) -> f32 {
		self.rotation
	}

	fn get_rotation_mut(&mut self) -> &mut f32 {
		&mut self.rotation
	}

	fn get_scale(&self) -> &Vector2 {
		&self.scale
	}

	fn get_scale_mut(&mut self) -> &mut Vector2 {
		&mut self.scale
	}
}
