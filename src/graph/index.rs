//! 图索引
//!
//! 名称到顶点、端点对到实边的内存索引，支持 O(1) 查找

use crate::graph::edge::EdgeId;
use crate::graph::vertex::VertexId;
use std::collections::HashMap;

/// 顶点索引
#[derive(Debug, Default, Clone)]
pub struct VertexIndex {
    /// 名称到顶点 ID 的映射
    name_to_id: HashMap<String, VertexId>,
}

impl VertexIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加名称索引
    pub fn insert(&mut self, name: String, vertex_id: VertexId) {
        self.name_to_id.insert(name, vertex_id);
    }

    /// 通过名称查找顶点
    pub fn get(&self, name: &str) -> Option<VertexId> {
        self.name_to_id.get(name).copied()
    }

    /// 移除顶点
    pub fn remove(&mut self, name: &str) -> Option<VertexId> {
        self.name_to_id.remove(name)
    }

    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }

    pub fn clear(&mut self) {
        self.name_to_id.clear();
    }
}

/// 边索引
///
/// 只索引实边；残余边通过实边的 `redge` 找到。
#[derive(Debug, Default, Clone)]
pub struct EdgeIndex {
    /// (source, sink) 到实边 ID 的映射
    pair_to_edge: HashMap<(VertexId, VertexId), EdgeId>,
}

impl EdgeIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加实边
    pub fn insert(&mut self, source: VertexId, sink: VertexId, edge_id: EdgeId) {
        self.pair_to_edge.insert((source, sink), edge_id);
    }

    /// 获取两点之间的实边
    pub fn get(&self, source: VertexId, sink: VertexId) -> Option<EdgeId> {
        self.pair_to_edge.get(&(source, sink)).copied()
    }

    /// 移除实边
    pub fn remove(&mut self, source: VertexId, sink: VertexId) -> Option<EdgeId> {
        self.pair_to_edge.remove(&(source, sink))
    }

    /// 实边数量
    pub fn len(&self) -> usize {
        self.pair_to_edge.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pair_to_edge.is_empty()
    }

    pub fn clear(&mut self) {
        self.pair_to_edge.clear();
    }
}
