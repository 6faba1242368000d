use crate::graph::NodeHandle;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
	#[error("node {0} does not exist in the graph")]
	InvalidHandle(NodeHandle)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FrameError {
	/// The two frames hang off different roots, so no conversion between them exists.
	#[error("frames {from} and {to} do not share a common ancestor")]
	Mismatch {
		from: NodeHandle,
		to: NodeHandle
	},

	#[error("frame {0} does not exist in the graph")]
	InvalidHandle(NodeHandle),

	/// Some node on the frame's ancestor chain has a zero scale component.
	#[error("frame {0} collapses the plane and cannot be inverted")]
	Singular(NodeHandle)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
	#[error("the before points coincide or are not finite, the baseline has no length or direction")]
	Degenerate,

	#[error("{required} points are required on each side, found {found}")]
	InsufficientPoints {
		required: usize,
		found: usize
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TransformError {
	#[error(transparent)]
	Estimate(#[from] EstimateError),

	#[error(transparent)]
	Frame(#[from] FrameError),

	#[error(transparent)]
	Graph(#[from] GraphError)
}
