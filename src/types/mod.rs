//! All data types for the link-graph library.

pub mod edge;
pub mod error;

pub use edge::{EdgeIter, EdgeList, EdgeNode};
pub use error::{GraphError, GraphResult};
