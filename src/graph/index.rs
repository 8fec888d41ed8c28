//! 名称索引
//!
//! 顶点名称到顶点 ID 的映射，与图中的顶点序列保持一一对应

use crate::graph::vertex::VertexId;
use std::collections::HashMap;

/// 名称索引
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    /// 名称到顶点 ID 的映射
    name_to_id: HashMap<String, VertexId>,
}

impl NameIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            name_to_id: HashMap::new(),
        }
    }

    /// 按预估顶点数创建索引
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            name_to_id: HashMap::with_capacity(capacity),
        }
    }

    /// 添加名称，名称已存在时返回 false 且不修改索引
    pub fn insert(&mut self, name: String, vertex_id: VertexId) -> bool {
        if self.name_to_id.contains_key(&name) {
            return false;
        }
        self.name_to_id.insert(name, vertex_id);
        true
    }

    /// 通过名称查找顶点
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}
