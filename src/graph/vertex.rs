//! 顶点定义
//!
//! 顶点以名称标识，以插入顺序编号；颜色和标签只影响展示

use crate::colour;
use crate::graph::edge::Edge;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（即顶点在图中的下标，插入后永不改变）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    /// 顶点名称
    name: String,
    /// 顶点 ID
    id: VertexId,
    /// 填充颜色
    colour: String,
    /// 展示标签（空表示无标签）
    label: String,
    /// 出边列表
    edges: Vec<Edge>,
}

impl Vertex {
    /// 创建新顶点，颜色为白色、无标签、无出边
    pub(crate) fn new(name: String, id: VertexId) -> Self {
        Self {
            name,
            id,
            colour: colour::WHITE.to_string(),
            label: String::new(),
            edges: Vec::new(),
        }
    }

    /// 获取顶点名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取颜色
    pub fn colour(&self) -> &str {
        &self.colour
    }

    /// 获取标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 是否设置了标签
    pub fn has_label(&self) -> bool {
        !self.label.is_empty()
    }

    /// 获取出边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 出度
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn set_colour(&mut self, colour: impl Into<String>) {
        self.colour = colour.into();
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

impl AsRef<str> for Vertex {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_defaults() {
        let v = Vertex::new("a".to_string(), VertexId::new(3));

        assert_eq!(v.name(), "a");
        assert_eq!(v.id().as_usize(), 3);
        assert_eq!(v.colour(), colour::WHITE);
        assert_eq!(v.label(), "");
        assert!(!v.has_label());
        assert!(v.edges().is_empty());
    }

    #[test]
    fn test_vertex_attributes() {
        let mut v = Vertex::new("a".to_string(), VertexId::new(0));
        v.set_colour(colour::RED);
        v.set_label("start");
        v.push_edge(Edge::new(VertexId::new(1), 7));

        assert_eq!(v.colour(), "red");
        assert!(v.has_label());
        assert_eq!(v.degree(), 1);
        assert_eq!(v.edges()[0].weight(), 7);
        assert_eq!(v.to_string(), "a");
    }
}
