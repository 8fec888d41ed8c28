//! 图数据结构
//!
//! 顶点存放在按插入顺序编号的数组中，每个顶点持有自己的出边列表。
//! 无向图的每条逻辑边以两条方向相反的记录存储。

use super::edge::{Edge, EdgeRef};
use super::index::NameIndex;
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// 默认预分配的顶点容量
pub const DEFAULT_VERTEX_CAPACITY: usize = 50;

/// 图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    /// 是否为有向图（构造后不可变）
    directed: bool,
    /// 顶点序列，下标即顶点 ID
    vertices: Vec<Vertex>,
    /// 名称索引
    #[serde(skip)]
    index: NameIndex,
    /// 边记录总数（无向边计 2）
    edge_count: usize,
}

impl Graph {
    /// 创建空图
    pub fn new(is_directed: bool) -> Self {
        Self::with_capacity(is_directed, DEFAULT_VERTEX_CAPACITY)
    }

    /// 按预估顶点数创建空图
    pub fn with_capacity(is_directed: bool, capacity: usize) -> Self {
        Self {
            directed: is_directed,
            vertices: Vec::with_capacity(capacity),
            index: NameIndex::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// 创建有向图
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// 创建无向图
    pub fn undirected() -> Self {
        Self::new(false)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    ///
    /// 名称为空或全为空白字符时返回 [`Error::InvalidName`]，
    /// 名称已存在时返回 [`Error::DuplicateName`]。
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId> {
        let name = name.into();
        validate_name(&name)?;
        if self.index.contains(&name) {
            return Err(Error::DuplicateName(name));
        }

        Ok(self.push_vertex(name))
    }

    /// 追加顶点，调用方保证名称合法且未被占用
    pub(crate) fn push_vertex(&mut self, name: String) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        let inserted = self.index.insert(name.clone(), id);
        debug_assert!(inserted, "重复的顶点名称: {}", name);
        self.vertices.push(Vertex::new(name, id));
        id
    }

    /// 设置顶点颜色
    pub fn colour_vertex(&mut self, name: &str, colour: impl Into<String>) -> Result<()> {
        let id = self.find_id(name)?;
        self.vertices[id.as_usize()].set_colour(colour);
        Ok(())
    }

    /// 批量设置顶点颜色
    ///
    /// 按迭代顺序逐个着色，遇到第一个不存在的顶点即返回错误，
    /// 此前已着色的顶点不会回滚。
    pub fn colour_vertices<I, S>(&mut self, names: I, colour: &str) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.colour_vertex(name.as_ref(), colour)?;
        }
        Ok(())
    }

    /// 设置顶点标签，接受字符串或整数等任意可显示的值
    pub fn label_vertex(&mut self, name: &str, label: impl fmt::Display) -> Result<()> {
        let id = self.find_id(name)?;
        self.vertices[id.as_usize()].set_label(label.to_string());
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 端点按名称解析，不存在的端点会自动通过 [`Graph::add_vertex`] 创建。
    /// 无向图同时写入反向记录，边计数加 2；自环同样写入两条记录。
    /// 任一端点名称非法时不做任何修改。
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        validate_name(from)?;
        validate_name(to)?;

        let source = self.resolve_or_insert(from)?;
        let target = self.resolve_or_insert(to)?;
        self.link(source, target, weight);

        Ok(())
    }

    /// 按 ID 连接两个已存在的顶点，无向图同时写入反向记录
    pub(crate) fn link(&mut self, source: VertexId, target: VertexId, weight: i64) {
        debug_assert!(target.as_usize() < self.vertices.len());
        self.vertices[source.as_usize()].push_edge(Edge::new(target, weight));
        self.edge_count += 1;

        if !self.directed {
            self.vertices[target.as_usize()].push_edge(Edge::new(source, weight));
            self.edge_count += 1;
        }
    }

    fn resolve_or_insert(&mut self, name: &str) -> Result<VertexId> {
        match self.index.get(name) {
            Some(id) => Ok(id),
            None => self.add_vertex(name),
        }
    }

    // ==================== 查询 ====================

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 获取顶点数量
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// 获取边记录数量
    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// 按名称查找顶点 ID
    pub fn find_id(&self, name: &str) -> Result<VertexId> {
        self.index
            .get(name)
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    /// 按名称查找顶点
    pub fn find_vertex(&self, name: &str) -> Result<&Vertex> {
        let id = self.find_id(name)?;
        Ok(&self.vertices[id.as_usize()])
    }

    pub fn contains_vertex(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// 按 ID 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.as_usize())
    }

    /// 所有顶点（按 ID 顺序）
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// 解析边的目标顶点
    ///
    /// 边必须来自本图，否则下标可能越界。
    pub fn target(&self, edge: &Edge) -> &Vertex {
        &self.vertices[edge.target_id().as_usize()]
    }

    /// 获取顶点的所有出边，ID 不存在时为空
    pub fn edges_of(&self, id: VertexId) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(move |v| v.edges().iter().map(move |e| EdgeRef::new(self, id, e)))
    }

    /// 遍历所有边记录
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> + '_ {
        self.vertices.iter().flat_map(move |v| {
            v.edges()
                .iter()
                .map(move |e| EdgeRef::new(self, v.id(), e))
        })
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}

impl<'a> Index<&'a str> for Graph {
    type Output = Vertex;

    /// 按名称访问顶点，顶点不存在时 panic
    fn index(&self, name: &'a str) -> &Vertex {
        match self.find_vertex(name) {
            Ok(vertex) => vertex,
            Err(err) => panic!("{}", err),
        }
    }
}

/// 名称不能为空或全为空白字符
fn validate_name(name: &str) -> Result<()> {
    if name.chars().all(char::is_whitespace) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(())
}
