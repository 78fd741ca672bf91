mod assign;
mod edge;
mod error;
mod flow;
mod graph;
mod matrix;

pub use assign::*;
pub use edge::Edge;
pub use error::NetworkError;
pub use flow::Flow;
pub use graph::*;
