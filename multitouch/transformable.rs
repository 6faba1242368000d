use crate::{
	estimator::{self, TransformResult},
	graph::{Graph, NodeHandle},
	math::Vector2,
	resolver,
	CapabilityMask,
	FrameError,
	GraphError,
	Object2D,
	Transform2D,
	TransformError
};

/// Gesture settings attached to one node of a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transformable {
	node: NodeHandle,
	pub capabilities: CapabilityMask,
	pub touchable: bool
}

impl Transformable {
	pub fn new(node: NodeHandle) -> Self {
		Self {
			node,
			capabilities: CapabilityMask::default(),
			touchable: true
		}
	}

	pub fn with_capabilities(node: NodeHandle, capabilities: CapabilityMask) -> Self {
		Self {
			capabilities,
			..Self::new(node)
		}
	}

	pub fn node(&self) -> NodeHandle {
		self.node
	}

	pub fn is_touchable(&self) -> bool {
		self.touchable
	}

	/// Estimates the transform carrying `start` onto `end`, each given in its own frame.
	/// The result lives in the frame the node's transform is relative to. Only the first
	/// two points of each side are used.
	pub fn transform_from_points(&self, graph: &Graph, start: &[Vector2], start_frame: NodeHandle, end: &[Vector2], end_frame: NodeHandle) -> Result<TransformResult, TransformError> {
		let start = self.resolve(graph, start, start_frame)?;
		let end = self.resolve(graph, end, end_frame)?;

		Ok(estimator::estimate_from_slices(&start, &end)?)
	}

	fn resolve(&self, graph: &Graph, points: &[Vector2], frame: NodeHandle) -> Result<Vec<Vector2>, FrameError> {
		points.iter()
			.take(2)
			.map(|point| resolver::convert_to_parent(graph, point, frame, self.node))
			.collect()
	}

	/// [`Self::transform_from_points`] with both sides given in the frame of the node's root.
	pub fn transform_from_root_points(&self, graph: &Graph, start: &[Vector2], end: &[Vector2]) -> Result<TransformResult, TransformError> {
		let root = resolver::root_frame(graph, self.node)?;
		self.transform_from_points(graph, start, root, end, root)
	}

	/// The position, rotation and scale the node would have after `result`, ignoring the
	/// capability mask.
	pub fn pose_for(&self, graph: &Graph, result: &TransformResult) -> Result<Transform2D, TransformError> {
		let node = graph.get(self.node).ok_or(GraphError::InvalidHandle(self.node))?;
		Ok(result.apply_to_transform(&node.transform))
	}

	/// Writes the parts of `result` the capability mask allows into the node. `anchor` is the
	/// first before point, in the same frame as `result`.
	pub fn apply(&self, graph: &mut Graph, result: &TransformResult, anchor: &Vector2) -> Result<Transform2D, TransformError> {
		let node = graph.get_mut(self.node).ok_or(GraphError::InvalidHandle(self.node))?;
		self.apply_to_object(node, result, anchor);
		Ok(node.transform)
	}

	pub fn apply_to_object<O: Object2D>(&self, object: &mut O, result: &TransformResult, anchor: &Vector2) {
		let capabilities = self.capabilities;

		if capabilities.is_inert() {
			return;
		}

		let result = result.restricted(capabilities.can_scale(), capabilities.can_rotate(), anchor);
		let target = result.apply_to_transform(&object.to_transform());

		if capabilities.can_move() {
			*object.get_position_mut() = target.position;
		}

		if capabilities.can_scale() {
			*object.get_scale_mut() = target.scale;
		}

		if capabilities.can_rotate() {
			*object.get_rotation_mut() = target.rotation;
		}
	}
}
