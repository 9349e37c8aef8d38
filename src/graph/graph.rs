//! 图数据结构
//!
//! 顶点和边存放在按 ID 索引的 arena 中，`source`/`sink`/`redge` 等引用
//! 都是 ID，避免所有权环。顶点与边都保持插入顺序。

use super::edge::{Edge, EdgeId, EdgeProperties};
use super::index::{EdgeIndex, VertexIndex};
use super::vertex::{normalize_name, Vertex, VertexId};
use crate::algorithm::{Bipartition, PrimMst, SearchTree, SpanningTree, Traversal, TwoColoring};
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// 内存流网络图
#[derive(Debug, Clone)]
pub struct Graph {
    /// 图配置
    config: GraphConfig,
    /// 顶点 arena（插入顺序）
    vertices: IndexMap<VertexId, Vertex>,
    /// 边 arena，实边与残余边按创建顺序存放
    edges: IndexMap<EdgeId, Edge>,
    /// 名称索引
    vertex_index: VertexIndex,
    /// 实边端点索引
    edge_index: EdgeIndex,
    /// 下一个顶点 ID
    next_vertex_id: u64,
    /// 下一个边 ID
    next_edge_id: u64,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// 创建空的有向图
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// 创建空的无向图
    pub fn undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    /// 按配置创建空图
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            vertices: IndexMap::new(),
            edges: IndexMap::new(),
            vertex_index: VertexIndex::new(),
            edge_index: EdgeIndex::new(),
            next_vertex_id: 1,
            next_edge_id: 1,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// 是否为有向图
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// 设置有向/无向
    pub fn set_directed(&mut self, directed: bool) {
        self.config.directed = directed;
    }

    /// 清空图，ID 计数不回退
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        self.vertex_index.clear();
        self.edge_index.clear();
    }

    // ==================== 顶点操作 ====================

    /// 按名称查找顶点（精确匹配，不做规范化）
    pub fn find_vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).and_then(|id| self.vertices.get(&id))
    }

    /// 按名称查找顶点 ID
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.vertex_index.get(name)
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// 添加顶点
    ///
    /// 名称先去掉首尾空白再截断；同名顶点已存在时直接返回它的 ID。
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexId> {
        let normalized = normalize_name(name, self.config.max_name_len);
        if normalized.is_empty() {
            return Err(Error::InvalidName(name.to_string()));
        }

        if let Some(existing) = self.vertex_index.get(&normalized) {
            trace!(vertex = %normalized, "vertex already exists");
            return Ok(existing);
        }

        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;

        self.vertex_index.insert(normalized.clone(), id);
        debug!(vertex = %normalized, id = %id, "vertex added");
        self.vertices.insert(id, Vertex::new(id, normalized));

        Ok(id)
    }

    /// 删除顶点及其所有关联边（实边和残余边）
    pub fn remove_vertex(&mut self, name: &str) -> Result<()> {
        let id = self
            .vertex_id(name)
            .ok_or_else(|| Error::VertexNotFound(name.to_string()))?;

        let incident: Vec<EdgeId> = self
            .vertices
            .get(&id)
            .map(|v| v.adjacents().iter().rev().copied().collect())
            .unwrap_or_default();

        for edge_id in incident {
            // 残余边删除的是它所对应的、指向本顶点的实边
            let real = match self.edges.get(&edge_id) {
                Some(edge) if edge.is_real() => edge_id,
                Some(edge) => edge.redge(),
                None => continue,
            };
            self.remove_pair(real);
        }

        self.vertices.shift_remove(&id);
        self.vertex_index.remove(name);
        debug!(vertex = name, id = %id, "vertex removed");

        Ok(())
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 按插入顺序遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 第一个插入的顶点
    pub fn first_vertex(&self) -> Option<&Vertex> {
        self.vertices.first().map(|(_, v)| v)
    }

    // ==================== 边操作 ====================

    /// 按端点名称查找实边
    pub fn find_edge(&self, source: &str, sink: &str) -> Option<&Edge> {
        let src = self.vertex_id(source)?;
        let dst = self.vertex_id(sink)?;
        self.edge_between(src, dst)
    }

    /// 按端点 ID 查找实边
    pub fn edge_between(&self, source: VertexId, sink: VertexId) -> Option<&Edge> {
        self.edge_index
            .get(source, sink)
            .and_then(|id| self.edges.get(&id))
    }

    /// 获取边（实边或残余边）
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// 获取边的配对残余边
    pub fn residual(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id).and_then(|e| self.edges.get(&e.redge()))
    }

    /// 添加边
    ///
    /// 端点不存在时自动创建。同方向的实边已存在时返回已有边，
    /// 本次传入的属性不会生效。
    pub fn add_edge(&mut self, source: &str, sink: &str, props: EdgeProperties) -> Result<EdgeId> {
        let max_len = self.config.max_name_len;
        let src_name = normalize_name(source, max_len);
        let dst_name = normalize_name(sink, max_len);
        if src_name.is_empty() {
            return Err(Error::InvalidName(source.to_string()));
        }
        if dst_name.is_empty() {
            return Err(Error::InvalidName(sink.to_string()));
        }
        if src_name == dst_name {
            return Err(Error::SelfLoop(src_name));
        }

        let src = self.add_vertex(&src_name)?;
        let dst = self.add_vertex(&dst_name)?;

        if let Some(existing) = self.edge_index.get(src, dst) {
            trace!(source = %src_name, sink = %dst_name, "edge already exists");
            return Ok(existing);
        }

        let real_id = self.next_edge_id();
        let redge_id = self.next_edge_id();
        let real = Edge::real(real_id, src, dst, redge_id, &props);
        let residual = Edge::residual_of(redge_id, &real);

        if let Some(v) = self.vertices.get_mut(&src) {
            v.attach(real_id);
        }
        if let Some(v) = self.vertices.get_mut(&dst) {
            v.attach(redge_id);
        }

        debug!(
            source = %src_name,
            sink = %dst_name,
            edge = %real_id,
            cost = real.cost(),
            max_flow = real.max_flow(),
            "edge added"
        );
        self.edges.insert(real_id, real);
        self.edges.insert(redge_id, residual);
        self.edge_index.insert(src, dst, real_id);

        Ok(real_id)
    }

    /// 删除实边及其残余边
    pub fn remove_edge(&mut self, source: &str, sink: &str) -> Result<()> {
        if self.edge_index.is_empty() {
            return Err(Error::edge_not_found(source, sink));
        }
        let src = self
            .vertex_id(source)
            .ok_or_else(|| Error::VertexNotFound(source.to_string()))?;
        let dst = self
            .vertex_id(sink)
            .ok_or_else(|| Error::VertexNotFound(sink.to_string()))?;
        if src == dst {
            return Err(Error::SelfLoop(source.to_string()));
        }
        let real = self
            .edge_index
            .get(src, dst)
            .ok_or_else(|| Error::edge_not_found(source, sink))?;

        self.remove_pair(real);
        debug!(source, sink, edge = %real, "edge removed");
        Ok(())
    }

    /// 先从两端邻接表摘下实边和残余边，再从 arena 删除两者
    fn remove_pair(&mut self, real_id: EdgeId) {
        let Some(real) = self.edges.get(&real_id) else {
            return;
        };
        let (src, dst, redge_id) = (real.source(), real.sink(), real.redge());

        if let Some(v) = self.vertices.get_mut(&src) {
            v.detach(real_id);
        }
        if let Some(v) = self.vertices.get_mut(&dst) {
            v.detach(redge_id);
        }

        self.edges.shift_remove(&real_id);
        self.edges.shift_remove(&redge_id);
        self.edge_index.remove(src, dst);
    }

    fn next_edge_id(&mut self) -> EdgeId {
        let id = EdgeId::new(self.next_edge_id);
        self.next_edge_id += 1;
        id
    }

    /// 实边数量
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// 按创建顺序遍历实边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values().filter(|e| e.is_real())
    }

    /// 按创建顺序遍历所有边，包括残余边
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的出边（包括残余边），按邻接表顺序
    pub fn adjacents(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|v| v.adjacents().iter())
            .filter_map(|e| self.edges.get(e))
    }

    /// 实出边指向的顶点
    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.adjacents(id)
            .filter(|e| e.is_real())
            .map(|e| e.sink())
            .collect()
    }

    /// 实入边来源的顶点
    pub fn predecessors(&self, id: VertexId) -> Vec<VertexId> {
        self.adjacents(id)
            .filter(|e| e.is_fake())
            .map(|e| e.sink())
            .collect()
    }

    /// 实出边数量
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.adjacents(id).filter(|e| e.is_real()).count()
    }

    /// 实入边数量
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.adjacents(id).filter(|e| e.is_fake()).count()
    }

    // ==================== 算法 ====================

    /// 广度优先遍历
    pub fn bfs(&self, start: &str) -> Result<SearchTree> {
        Traversal::new(self).bfs(start)
    }

    /// 深度优先遍历（先序）
    pub fn dfs(&self, start: &str) -> Result<SearchTree> {
        Traversal::new(self).dfs(start)
    }

    /// Prim 最小生成树
    pub fn prim(&self, start: &str) -> Result<SpanningTree> {
        PrimMst::new(self).run(start)
    }

    /// 二分图着色
    pub fn bipartition(&self) -> Bipartition {
        TwoColoring::new(self).run()
    }

    /// 是否为二分图
    pub fn is_bipartite(&self) -> bool {
        self.bipartition().is_bipartite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_ab() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", EdgeProperties::new()).unwrap();
        graph
    }

    #[test]
    fn test_add_vertex_idempotent() {
        let mut graph = Graph::new();
        let v1 = graph.add_vertex("alpha").unwrap();
        let v2 = graph.add_vertex("  alpha ").unwrap();

        assert_eq!(v1, v2);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_vertex_truncates() {
        let mut graph = Graph::new();
        let id = graph.add_vertex("  abcdefghijklmnop ").unwrap();

        assert_eq!(graph.vertex(id).unwrap().name(), "abcdefghij");
        assert!(graph.find_vertex("abcdefghij").is_some());
        assert!(graph.find_vertex("abcdefghijklmnop").is_none());
    }

    #[test]
    fn test_add_vertex_rejects_empty() {
        let mut graph = Graph::new();
        assert!(matches!(graph.add_vertex(""), Err(Error::InvalidName(_))));
        assert!(matches!(graph.add_vertex("   "), Err(Error::InvalidName(_))));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_add_edge_creates_residual_pair() {
        let graph = graph_ab();
        let edge = graph.find_edge("a", "b").unwrap();
        assert!(edge.is_real());

        let b = graph.find_vertex("b").unwrap();
        let residuals: Vec<&Edge> = graph.adjacents(b.id()).filter(|e| e.is_fake()).collect();
        assert_eq!(residuals.len(), 1);
        assert_eq!(residuals[0].redge(), edge.id());
        assert_eq!(edge.redge(), residuals[0].id());
        assert_eq!(graph.residual(edge.id()).unwrap().id(), residuals[0].id());

        // 残余边不会被当作实边查到
        assert!(graph.find_edge("b", "a").is_none());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges().count(), 1);
        assert_eq!(graph.all_edges().count(), 2);
    }

    #[test]
    fn test_add_edge_idempotent_ignores_properties() {
        let mut graph = Graph::new();
        let e1 = graph.add_edge("a", "b", EdgeProperties::new().cost(1.0)).unwrap();
        let e2 = graph.add_edge("a", "b", EdgeProperties::new().cost(9.0)).unwrap();

        assert_eq!(e1, e2);
        assert_eq!(graph.edge(e1).unwrap().cost(), 1.0);
        assert_eq!(graph.all_edges().count(), 2);
    }

    #[test]
    fn test_add_edge_rejects_self_loop() {
        let mut graph = Graph::new();
        assert!(matches!(
            graph.add_edge("a", "a", EdgeProperties::new()),
            Err(Error::SelfLoop(_))
        ));
        // 规范化后相同的名称同样视为自环
        assert!(matches!(
            graph.add_edge("a", " a ", EdgeProperties::new()),
            Err(Error::SelfLoop(_))
        ));
        assert!(matches!(
            graph.add_edge("", "b", EdgeProperties::new()),
            Err(Error::InvalidName(_))
        ));
        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_both_directions_are_distinct_edges() {
        let mut graph = graph_ab();
        graph.add_edge("b", "a", EdgeProperties::new()).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.all_edges().count(), 4);
        let a = graph.vertex_id("a").unwrap();
        assert_eq!(graph.out_degree(a), 1);
        assert_eq!(graph.in_degree(a), 1);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = graph_ab();
        graph.remove_edge("a", "b").unwrap();

        assert!(graph.find_edge("a", "b").is_none());
        assert_eq!(graph.all_edges().count(), 0);
        for v in graph.vertices() {
            assert!(v.adjacents().is_empty());
        }
    }

    #[test]
    fn test_remove_edge_failures() {
        let mut graph = Graph::new();
        assert!(graph.remove_edge("a", "b").unwrap_err().is_not_found());

        let mut graph = graph_ab();
        graph.add_vertex("c").unwrap();
        assert!(matches!(
            graph.remove_edge("a", "x"),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(graph.remove_edge("a", "a"), Err(Error::SelfLoop(_))));
        assert!(matches!(
            graph.remove_edge("b", "a"),
            Err(Error::EdgeNotFound { .. })
        ));
        assert!(matches!(
            graph.remove_edge("a", "c"),
            Err(Error::EdgeNotFound { .. })
        ));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_remove_vertex_cascades() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", EdgeProperties::new()).unwrap();
        graph.add_edge("b", "a", EdgeProperties::new()).unwrap();
        graph.add_edge("b", "c", EdgeProperties::new()).unwrap();
        graph.add_edge("c", "a", EdgeProperties::new()).unwrap();

        graph.remove_vertex("a").unwrap();

        assert!(graph.find_vertex("a").is_none());
        assert!(graph.find_edge("a", "b").is_none());
        assert!(graph.find_edge("b", "a").is_none());
        assert!(graph.find_edge("c", "a").is_none());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.all_edges().count(), 2);

        let b = graph.vertex_id("b").unwrap();
        let c = graph.vertex_id("c").unwrap();
        for e in graph.adjacents(b).chain(graph.adjacents(c)) {
            assert!(graph.vertex(e.sink()).is_some());
        }
        assert_eq!(graph.vertex(b).unwrap().degree(), 1);
        assert_eq!(graph.vertex(c).unwrap().degree(), 1);
    }

    #[test]
    fn test_remove_missing_vertex() {
        let mut graph = Graph::new();
        assert!(matches!(
            graph.remove_vertex("ghost"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_ids_not_reused() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a").unwrap();
        graph.remove_vertex("a").unwrap();
        let a2 = graph.add_vertex("a").unwrap();
        assert_ne!(a, a2);
    }

    #[test]
    fn test_vertex_order_preserved_after_removal() {
        let mut graph = Graph::new();
        for name in ["a", "b", "c", "d"] {
            graph.add_vertex(name).unwrap();
        }
        graph.remove_vertex("b").unwrap();

        let names: Vec<&str> = graph.vertices().map(|v| v.name()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
        assert_eq!(graph.first_vertex().unwrap().name(), "a");
    }

    #[test]
    fn test_neighbors_and_predecessors() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", EdgeProperties::new()).unwrap();
        graph.add_edge("a", "c", EdgeProperties::new()).unwrap();
        graph.add_edge("d", "a", EdgeProperties::new()).unwrap();

        let a = graph.vertex_id("a").unwrap();
        let b = graph.vertex_id("b").unwrap();
        let c = graph.vertex_id("c").unwrap();
        let d = graph.vertex_id("d").unwrap();
        assert_eq!(graph.neighbors(a), vec![b, c]);
        assert_eq!(graph.predecessors(a), vec![d]);
    }
}
