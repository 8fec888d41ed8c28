//! 图核心模块
//!
//! 定义顶点、边和图的核心数据结构

mod edge;
#[allow(clippy::module_inception)]
mod graph;
mod index;
mod vertex;

pub use edge::{Edge, EdgeRef};
pub use graph::{Graph, DEFAULT_VERTEX_CAPACITY};
pub use index::NameIndex;
pub use vertex::{Vertex, VertexId};
