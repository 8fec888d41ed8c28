//! dotgraph - 带名称的加权图容器
//!
//! 支持：
//! - 有向图与无向图，顶点按名称唯一标识
//! - 顶点颜色与标签
//! - 导出 Graphviz DOT 文本
//! - 从简单的行格式文件加载
//! - 链状、网格状测试图生成

pub mod colour;
pub mod dot;
pub mod error;
pub mod generator;
pub mod graph;
pub mod import;

// 重导出常用类型
pub use dot::DotOptions;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeRef, Graph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
