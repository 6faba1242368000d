//! Moves points between node frames by way of the scene graph's ancestor chains.

use crate::{
	graph::{Graph, NodeHandle},
	math::{Vector2, Matrix3},
	FrameError
};

/// Walks up from `of` to the node that has no parent.
pub fn root_frame(graph: &Graph, of: NodeHandle) -> Result<NodeHandle, FrameError> {
	let mut current = of;

	loop {
		let node = graph.get(current).ok_or(FrameError::InvalidHandle(current))?;

		match node.parent() {
			Some(parent) => current = parent,
			None => return Ok(current)
		}
	}
}

/// Expresses `point`, given in the frame of `from`, in the frame of `to`.
pub fn convert(graph: &Graph, point: &Vector2, from: NodeHandle, to: NodeHandle) -> Result<Vector2, FrameError> {
	if from == to {
		graph.get(from).ok_or(FrameError::InvalidHandle(from))?;
		return Ok(*point);
	}

	if root_frame(graph, from)? != root_frame(graph, to)? {
		return Err(FrameError::Mismatch { from, to });
	}

	let from_world = world_matrix(graph, from)?;
	let to_world_inverse = world_matrix(graph, to)?
		.inverse()
		.ok_or(FrameError::Singular(to))?;

	Ok(to_world_inverse.transform_point(&from_world.transform_point(point)))
}

/// Expresses `point`, given in the frame of `from`, in the frame `node`'s own transform is
/// relative to: its parent, or the space above the root when `node` has no parent.
pub fn convert_to_parent(graph: &Graph, point: &Vector2, from: NodeHandle, node: NodeHandle) -> Result<Vector2, FrameError> {
	let target = graph.get(node).ok_or(FrameError::InvalidHandle(node))?;

	match target.parent() {
		Some(parent) => convert(graph, point, from, parent),
		None => {
			if root_frame(graph, from)? != node {
				return Err(FrameError::Mismatch { from, to: node });
			}

			Ok(world_matrix(graph, from)?.transform_point(point))
		}
	}
}

fn world_matrix(graph: &Graph, handle: NodeHandle) -> Result<Matrix3, FrameError> {
	graph.world_matrix(handle).ok_or(FrameError::InvalidHandle(handle))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{graph::Node, math::assert_approx_eq, Transform2D};
	use std::f32::consts::FRAC_PI_2;

	struct Scene {
		graph: Graph,
		root: NodeHandle,
		layer: NodeHandle,
		sprite: NodeHandle,
		other_root: NodeHandle
	}

	fn scene() -> Scene {
		let mut graph = Graph::new();
		let root = graph.add(Node::new("scene"));
		let layer = graph.add_to(root, Node::with_transform("layer", Transform2D::from(Vector2::new(100.0, 50.0), FRAC_PI_2, Vector2::from_scalar(2.0)))).unwrap();
		let sprite = graph.add_to(layer, Node::with_transform("sprite", Transform2D::from(Vector2::new(5.0, 0.0), 0.0, Vector2::new(1.0, 0.5)))).unwrap();
		let other_root = graph.add(Node::new("overlay"));

		Scene { graph, root, layer, sprite, other_root }
	}

	#[test]
	fn root_frame_of_deep_chain() {
		let s = scene();
		assert_eq!(root_frame(&s.graph, s.sprite), Ok(s.root));
		assert_eq!(root_frame(&s.graph, s.root), Ok(s.root));
		assert_eq!(root_frame(&s.graph, s.other_root), Ok(s.other_root));
	}

	#[test]
	fn root_frame_of_removed_node() {
		let mut s = scene();
		s.graph.remove(s.layer).unwrap();
		assert_eq!(root_frame(&s.graph, s.sprite), Err(FrameError::InvalidHandle(s.sprite)));
	}

	#[test]
	fn convert_from_child_to_root() {
		let s = scene();
		// (2, 0) in layer: scaled (4, 0), rotated (0, 4), translated (100, 54)
		let point = convert(&s.graph, &Vector2::new(2.0, 0.0), s.layer, s.root).unwrap();
		assert_approx_eq(&point, &Vector2::new(100.0, 54.0), 1e-4);
	}

	#[test]
	fn convert_round_trip() {
		let s = scene();
		let original = Vector2::new(-3.5, 7.25);
		let in_sprite = convert(&s.graph, &original, s.root, s.sprite).unwrap();
		let back = convert(&s.graph, &in_sprite, s.sprite, s.root).unwrap();
		assert_approx_eq(&back, &original, 1e-4);
	}

	#[test]
	fn convert_between_siblings_frames() {
		let mut s = scene();
		let sibling = s.graph.add_to(s.layer, Node::with_transform("sibling", Transform2D::from(Vector2::new(0.0, 5.0), 0.0, Vector2::from_scalar(1.0)))).unwrap();

		// sprite origin is (5, 0) in layer, which is (5, -5) in sibling
		let point = convert(&s.graph, &Vector2::new(0.0, 0.0), s.sprite, sibling).unwrap();
		assert_approx_eq(&point, &Vector2::new(5.0, -5.0), 1e-4);
	}

	#[test]
	fn convert_same_frame_is_exact() {
		let s = scene();
		let point = Vector2::new(1.1, 2.2);
		assert_eq!(convert(&s.graph, &point, s.sprite, s.sprite), Ok(point));
	}

	#[test]
	fn convert_across_disjoint_trees() {
		let s = scene();
		let result = convert(&s.graph, &Vector2::new(1.0, 1.0), s.sprite, s.other_root);
		assert_eq!(result, Err(FrameError::Mismatch { from: s.sprite, to: s.other_root }));
	}

	#[test]
	fn convert_into_collapsed_frame() {
		let mut s = scene();
		s.graph.get_mut(s.layer).unwrap().transform.scale.set(0.0, 1.0);
		let result = convert(&s.graph, &Vector2::new(1.0, 1.0), s.root, s.sprite);
		assert_eq!(result, Err(FrameError::Singular(s.sprite)));
	}

	#[test]
	fn convert_to_parent_of_nested_node() {
		let s = scene();
		let direct = convert(&s.graph, &Vector2::new(8.0, 9.0), s.root, s.layer).unwrap();
		let via_parent = convert_to_parent(&s.graph, &Vector2::new(8.0, 9.0), s.root, s.sprite).unwrap();
		assert_eq!(direct, via_parent);
	}

	#[test]
	fn convert_to_parent_of_root() {
		let mut s = scene();
		s.graph.get_mut(s.root).unwrap().transform.position.set(10.0, 20.0);

		let point = convert_to_parent(&s.graph, &Vector2::new(1.0, 2.0), s.root, s.root).unwrap();
		assert_approx_eq(&point, &Vector2::new(11.0, 22.0), 1e-5);

		let result = convert_to_parent(&s.graph, &Vector2::new(1.0, 2.0), s.other_root, s.root);
		assert_eq!(result, Err(FrameError::Mismatch { from: s.other_root, to: s.root }));
	}
}
