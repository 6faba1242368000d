use crate::{
	math::{Vector2, Matrix3},
	pool::{Pool, Handle},
	GraphError,
	Object2D,
	Transform2D
};

pub type NodeHandle = Handle<Node>;

pub struct Node {
	pub name: String,
	pub transform: Transform2D,
	parent_handle: Option<NodeHandle>,
	child_handles: Vec<NodeHandle>
}

impl Node {
	pub fn new(name: &str) -> Self {
		Self {
			name: name.to_owned(),
			transform: Transform2D::new(),
			parent_handle: None,
			child_handles: vec![]
		}
	}

	pub fn with_transform(name: &str, transform: Transform2D) -> Self {
		Self {
			transform,
			..Self::new(name)
		}
	}

	pub fn parent(&self) -> Option<NodeHandle> {
		self.parent_handle
	}

	pub fn children(&self) -> &[NodeHandle] {
		&self.child_handles
	}
}

impl Object2D for Node {
	fn get_position(&self) -> &Vector2 {
		&self.transform.position
	}

	fn get_position_mut(&mut self) -> &mut Vector2 {
		&mut self.transform.position
	}

	fn get_rotation(&self) -> f32 {
		self.transform.rotation
	}

	fn get_rotation_mut(&mut self) -> &mut f32 {
		&mut self.transform.rotation
	}

	fn get_scale(&self) -> &Vector2 {
		&self.transform.scale
	}

	fn get_scale_mut(&mut self) -> &mut Vector2 {
		&mut self.transform.scale
	}
}

/// A forest of 2D nodes. Every node's transform is relative to its parent, and a node
/// without a parent is the root of its own tree.
#[derive(Default)]
pub struct Graph {
	nodes: Pool<Node>
}

impl Graph {
	pub fn new() -> Self {
		Self {
			nodes: Pool::new()
		}
	}

	pub fn add(&mut self, mut node: Node) -> NodeHandle {
		node.parent_handle = None;
		node.child_handles.clear();
		self.nodes.add(node)
	}

	pub fn add_to(&mut self, parent_handle: NodeHandle, mut child_node: Node) -> Result<NodeHandle, GraphError> {
		if !self.nodes.contains(&parent_handle) {
			return Err(GraphError::InvalidHandle(parent_handle));
		}

		child_node.parent_handle = Some(parent_handle);
		child_node.child_handles.clear();
		let child_handle = self.nodes.add(child_node);

		if let Some(parent_node) = self.nodes.get_mut(&parent_handle) {
			parent_node.child_handles.push(child_handle);
		}

		Ok(child_handle)
	}

	/// Removes the node and its whole subtree.
	pub fn remove(&mut self, handle: NodeHandle) -> Result<(), GraphError> {
		let parent_handle = self.nodes.get(&handle)
			.ok_or(GraphError::InvalidHandle(handle))?
			.parent_handle;

		if let Some(parent_node) = parent_handle.and_then(|h| self.nodes.get_mut(&h)) {
			parent_node.child_handles.retain(|&h| h != handle);
		}

		let mut handles_to_remove = vec![handle];

		while let Some(handle) = handles_to_remove.pop() {
			if let Some(node) = self.nodes.remove(&handle) {
				handles_to_remove.extend_from_slice(&node.child_handles);
			}
		}

		Ok(())
	}

	pub fn contains(&self, handle: NodeHandle) -> bool {
		self.nodes.contains(&handle)
	}

	pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
		self.nodes.get(&handle)
	}

	pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
		self.nodes.get_mut(&handle)
	}

	pub fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
		self.nodes.get(&handle)?.parent_handle
	}

	pub fn len(&self) -> usize {
		self.nodes.present_len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
		self.nodes.iter()
	}

	pub fn local_matrix(&self, handle: NodeHandle) -> Option<Matrix3> {
		self.nodes.get(&handle).map(|node| node.transform.matrix())
	}

	/// Maps points from the node's frame into the frame above its root.
	pub fn world_matrix(&self, handle: NodeHandle) -> Option<Matrix3> {
		let mut node = self.nodes.get(&handle)?;
		let mut matrix = node.transform.matrix();

		while let Some(parent_handle) = node.parent_handle {
			node = self.nodes.get(&parent_handle)?;
			matrix = node.transform.matrix() * matrix;
		}

		Some(matrix)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::math::assert_approx_eq;

	#[test]
	fn add_to_links_parent_and_child() {
		let mut graph = Graph::new();
		let root = graph.add(Node::new("root"));
		let child = graph.add_to(root, Node::new("child")).unwrap();

		assert_eq!(graph.parent(child), Some(root));
		assert_eq!(graph.parent(root), None);
		assert_eq!(graph.get(root).unwrap().children(), &[child]);
		assert_eq!(graph.len(), 2);
	}

	#[test]
	fn add_to_invalid_parent() {
		let mut graph = Graph::new();
		let root = graph.add(Node::new("root"));
		graph.remove(root).unwrap();

		assert_eq!(graph.add_to(root, Node::new("orphan")), Err(GraphError::InvalidHandle(root)));
		assert!(graph.is_empty());
	}

	#[test]
	fn remove_subtree() {
		let mut graph = Graph::new();
		let root = graph.add(Node::new("root"));
		let a = graph.add_to(root, Node::new("a")).unwrap();
		let b = graph.add_to(a, Node::new("b")).unwrap();
		let c = graph.add_to(root, Node::new("c")).unwrap();

		graph.remove(a).unwrap();

		assert!(!graph.contains(a));
		assert!(!graph.contains(b));
		assert!(graph.contains(c));
		assert_eq!(graph.get(root).unwrap().children(), &[c]);
		assert_eq!(graph.remove(a), Err(GraphError::InvalidHandle(a)));
	}

	#[test]
	fn world_matrix_composes_ancestors() {
		let mut graph = Graph::new();
		let root = graph.add(Node::with_transform("root", Transform2D::from(Vector2::new(10.0, 0.0), 0.0, Vector2::from_scalar(2.0))));
		let child = graph.add_to(root, Node::with_transform("child", Transform2D::from(Vector2::new(1.0, 1.0), std::f32::consts::FRAC_PI_2, Vector2::from_scalar(1.0)))).unwrap();

		// (1, 0) in child -> (1, 2) in root -> (12, 4) in world
		let world = graph.world_matrix(child).unwrap();
		assert_approx_eq(&world.transform_point(&Vector2::new(1.0, 0.0)), &Vector2::new(12.0, 4.0), 1e-5);
		assert_eq!(graph.local_matrix(child), Some(graph.get(child).unwrap().transform.matrix()));
	}

	#[test]
	fn node_as_object2d() {
		let mut node = Node::new("sprite");
		node.get_position_mut().set(3.0, 4.0);
		*node.get_rotation_mut() = 0.5;
		node.get_scale_mut().set_from_scalar(2.0);

		assert_eq!(node.to_transform(), Transform2D::from(Vector2::new(3.0, 4.0), 0.5, Vector2::from_scalar(2.0)));
	}
}
