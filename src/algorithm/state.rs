//! 单次算法运行的临时状态
//!
//! 每次调用算法都新建一份状态，图本身不保存遍历颜色或距离。

use crate::graph::{Edge, EdgeId, Graph, VertexId};
use crate::types::{EdgeColor, VertexColor};
use indexmap::IndexSet;
use std::collections::HashMap;

/// 顶点颜色、距离和边颜色
#[derive(Debug, Clone, Default)]
pub struct RunState {
    vertex_colors: HashMap<VertexId, VertexColor>,
    distances: HashMap<VertexId, usize>,
    edge_colors: HashMap<EdgeId, EdgeColor>,
    /// 树边对应的实边，按标记顺序
    tree_edges: IndexSet<EdgeId>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 顶点颜色，未记录时为未访问
    pub fn color(&self, vertex: VertexId) -> VertexColor {
        self.vertex_colors.get(&vertex).copied().unwrap_or_default()
    }

    pub fn set_color(&mut self, vertex: VertexId, color: VertexColor) {
        self.vertex_colors.insert(vertex, color);
    }

    /// 到根的跳数，未记录时为 0
    pub fn distance(&self, vertex: VertexId) -> usize {
        self.distances.get(&vertex).copied().unwrap_or(0)
    }

    pub fn set_distance(&mut self, vertex: VertexId, distance: usize) {
        self.distances.insert(vertex, distance);
    }

    pub fn edge_color(&self, edge: EdgeId) -> EdgeColor {
        self.edge_colors.get(&edge).copied().unwrap_or_default()
    }

    /// 把边和它的残余边一起标为树边
    pub fn mark_tree_edge(&mut self, edge: &Edge) {
        self.edge_colors.insert(edge.id(), EdgeColor::Tree);
        self.edge_colors.insert(edge.redge(), EdgeColor::Tree);

        let real = if edge.is_real() { edge.id() } else { edge.redge() };
        self.tree_edges.insert(real);
    }

    pub fn is_tree_edge(&self, edge: EdgeId) -> bool {
        self.edge_color(edge) == EdgeColor::Tree
    }

    /// 树边（实边 ID），按标记顺序
    pub fn tree_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.tree_edges.iter().copied()
    }

    pub fn tree_edge_count(&self) -> usize {
        self.tree_edges.len()
    }

    /// 指定颜色的顶点数
    pub fn count(&self, color: VertexColor) -> usize {
        self.vertex_colors.values().filter(|&&c| c == color).count()
    }

    /// 能否沿这条边前进：终点未访问，且不是有向图中的残余边
    pub fn can_follow(&self, graph: &Graph, edge: &Edge) -> bool {
        self.color(edge.sink()) == VertexColor::Unvisited && !(edge.is_fake() && graph.is_directed())
    }
}
