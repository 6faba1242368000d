pub mod math;

pub mod pool;
pub use pool::Pool;
pub use pool::Handle;

pub mod error;
pub use error::{EstimateError, FrameError, GraphError, TransformError};

pub mod transform2d;
pub use transform2d::Transform2D;

pub mod object2d;
pub use object2d::Object2D;

pub mod graph;
pub use graph::{Graph, Node, NodeHandle};

pub mod resolver;

pub mod estimator;
pub use estimator::TransformResult;

pub mod capability;
pub use capability::CapabilityMask;

pub mod transformable;
pub use transformable::Transformable;

pub mod touch;
pub use touch::{AdapterConfig, Contact, ContactSource, InputMode, Phase, TouchAdapter, TouchSet, Update};

#[cfg(feature = "glfw")]
pub mod pointer;
#[cfg(feature = "glfw")]
pub use pointer::PointerEmulator;
