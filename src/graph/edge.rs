//! 边定义
//!
//! 边只记录目标顶点下标和权重，源顶点即持有该边的顶点。
//! 边不保存所属图的引用，需要解析目标时通过 [`EdgeRef`] 连同图一起访问，
//! 因此图被移动后无需修复任何引用。

use crate::graph::graph::Graph;
use crate::graph::vertex::{Vertex, VertexId};
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 目标顶点 ID
    target: VertexId,
    /// 权重
    weight: i64,
}

impl Edge {
    /// 创建新边
    pub fn new(target: VertexId, weight: i64) -> Self {
        Self { target, weight }
    }

    /// 获取目标顶点 ID
    pub fn target_id(&self) -> VertexId {
        self.target
    }

    /// 获取权重
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// 借用图的边视图，可以直接解析源顶点和目标顶点
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef<'g> {
    graph: &'g Graph,
    source: VertexId,
    edge: &'g Edge,
}

impl<'g> EdgeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, source: VertexId, edge: &'g Edge) -> Self {
        Self {
            graph,
            source,
            edge,
        }
    }

    /// 源顶点
    pub fn source(&self) -> &'g Vertex {
        &self.graph.vertices()[self.source.as_usize()]
    }

    /// 目标顶点
    pub fn target(&self) -> &'g Vertex {
        self.graph.target(self.edge)
    }

    /// 获取权重
    pub fn weight(&self) -> i64 {
        self.edge.weight()
    }

    /// 底层边记录
    pub fn edge(&self) -> &'g Edge {
        self.edge
    }
}
