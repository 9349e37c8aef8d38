//! Prim 最小生成树
//!
//! 队列只追加不降键，同一顶点可能多次入队；出队时跳过已访问的顶点。
//! 结果以树边着色表示，和 BFS/DFS 一致。

use super::queue::ScoredQueue;
use super::state::RunState;
use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph, VertexId};
use crate::types::VertexColor;
use std::collections::HashMap;
use tracing::debug;

/// 顶点的 Prim 标签
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimTag {
    /// 已知的最小连接代价
    pub key: f64,
    /// 树中的父顶点
    pub parent: Option<VertexId>,
    /// 连接父顶点的边（可能是残余边）
    pub edge: Option<EdgeId>,
}

impl Default for PrimTag {
    fn default() -> Self {
        Self {
            key: f64::INFINITY,
            parent: None,
            edge: None,
        }
    }
}

/// 最小生成树结果
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: VertexId,
    state: RunState,
    tags: HashMap<VertexId, PrimTag>,
    total_cost: f64,
}

impl SpanningTree {
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// 树边（实边 ID）
    pub fn tree_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.state.tree_edges()
    }

    pub fn edge_count(&self) -> usize {
        self.state.tree_edge_count()
    }

    pub fn is_tree_edge(&self, edge: EdgeId) -> bool {
        self.state.is_tree_edge(edge)
    }

    /// 树边代价之和
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn tag(&self, vertex: VertexId) -> PrimTag {
        self.tags.get(&vertex).copied().unwrap_or_default()
    }

    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.tags.get(&vertex).and_then(|t| t.parent)
    }

    /// 是否被纳入生成树
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.state.color(vertex) == VertexColor::Visited
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }
}

/// 队列条目，入队时携带当时的键值
#[derive(Debug, Clone, Copy)]
struct Candidate {
    vertex: VertexId,
    key: f64,
}

/// Prim 算法
pub struct PrimMst<'g> {
    graph: &'g Graph,
}

impl<'g> PrimMst<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn run(&self, start: &str) -> Result<SpanningTree> {
        let root = self
            .graph
            .vertex_id(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

        let mut state = RunState::new();
        let mut tags: HashMap<VertexId, PrimTag> = HashMap::new();
        tags.insert(
            root,
            PrimTag {
                key: 0.0,
                ..PrimTag::default()
            },
        );

        let mut queue = ScoredQueue::new(|c: &Candidate| c.key);
        queue.push(Candidate {
            vertex: root,
            key: 0.0,
        });

        while let Some(Candidate { vertex: current, .. }) = queue.pop() {
            if state.color(current) == VertexColor::Visited {
                continue;
            }
            state.set_color(current, VertexColor::Visited);

            for edge in self.graph.adjacents(current) {
                if !state.can_follow(self.graph, edge) {
                    continue;
                }
                let cost = self.comparison_cost(edge);
                let tag = tags.entry(edge.sink()).or_default();
                if cost < tag.key {
                    *tag = PrimTag {
                        key: cost,
                        parent: Some(current),
                        edge: Some(edge.id()),
                    };
                    queue.push(Candidate {
                        vertex: edge.sink(),
                        key: cost,
                    });
                }
            }
        }

        for vertex in self.graph.vertices() {
            let incoming = tags
                .get(&vertex.id())
                .and_then(|t| t.edge)
                .and_then(|e| self.graph.edge(e));
            if let Some(edge) = incoming {
                state.mark_tree_edge(edge);
            }
        }

        let total_cost: f64 = state
            .tree_edges()
            .filter_map(|e| self.graph.edge(e))
            .map(Edge::cost)
            .sum();

        debug!(
            start,
            tree_edges = state.tree_edge_count(),
            total_cost,
            "prim finished"
        );
        Ok(SpanningTree {
            root,
            state,
            tags,
            total_cost,
        })
    }

    /// 残余边的代价是哨兵值正无穷，比较时使用配对实边的代价
    fn comparison_cost(&self, edge: &Edge) -> f64 {
        if edge.is_fake() {
            self.graph
                .edge(edge.redge())
                .map(Edge::cost)
                .unwrap_or(f64::INFINITY)
        } else {
            edge.cost()
        }
    }
}
