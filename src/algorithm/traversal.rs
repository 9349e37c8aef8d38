//! 广度优先与深度优先遍历
//!
//! 结果以边着色（树边）和每个顶点到根的跳数表示。

use super::state::RunState;
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::types::VertexColor;
use std::collections::VecDeque;
use tracing::debug;

/// 遍历产生的生成树（森林中的一棵）
#[derive(Debug, Clone)]
pub struct SearchTree {
    root: VertexId,
    state: RunState,
}

impl SearchTree {
    /// 起点
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// 顶点最终颜色
    pub fn color(&self, vertex: VertexId) -> VertexColor {
        self.state.color(vertex)
    }

    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.state.color(vertex) == VertexColor::Visited
    }

    /// 到起点的跳数
    pub fn distance(&self, vertex: VertexId) -> usize {
        self.state.distance(vertex)
    }

    pub fn is_tree_edge(&self, edge: EdgeId) -> bool {
        self.state.is_tree_edge(edge)
    }

    /// 树边（实边 ID），按发现顺序
    pub fn tree_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.state.tree_edges()
    }

    /// 访问到的顶点数
    pub fn visited_count(&self) -> usize {
        self.state.count(VertexColor::Visited)
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }
}

/// 遍历器
pub struct Traversal<'g> {
    graph: &'g Graph,
}

impl<'g> Traversal<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    fn root(&self, start: &str) -> Result<VertexId> {
        self.graph
            .vertex_id(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))
    }

    /// BFS：入队时标为 frontier，出队并处理完所有出边后标为 visited
    pub fn bfs(&self, start: &str) -> Result<SearchTree> {
        let root = self.root(start)?;
        let mut state = RunState::new();
        let mut queue = VecDeque::new();

        state.set_color(root, VertexColor::Frontier);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            let depth = state.distance(current);

            for edge in self.graph.adjacents(current) {
                if !state.can_follow(self.graph, edge) {
                    continue;
                }
                let next = edge.sink();
                state.mark_tree_edge(edge);
                state.set_distance(next, depth + 1);
                state.set_color(next, VertexColor::Frontier);
                queue.push_back(next);
            }

            state.set_color(current, VertexColor::Visited);
        }

        debug!(
            start,
            visited = state.count(VertexColor::Visited),
            tree_edges = state.tree_edge_count(),
            "bfs finished"
        );
        Ok(SearchTree { root, state })
    }

    /// DFS：先序，进入顶点即标为 visited
    ///
    /// 递归深度等于从起点出发的最长树路径长度。
    pub fn dfs(&self, start: &str) -> Result<SearchTree> {
        let root = self.root(start)?;
        let mut state = RunState::new();

        self.dfs_visit(root, &mut state);

        debug!(
            start,
            visited = state.count(VertexColor::Visited),
            tree_edges = state.tree_edge_count(),
            "dfs finished"
        );
        Ok(SearchTree { root, state })
    }

    fn dfs_visit(&self, current: VertexId, state: &mut RunState) {
        state.set_color(current, VertexColor::Visited);
        let depth = state.distance(current);

        for edge in self.graph.adjacents(current) {
            // 递归返回后终点可能已被访问，每条边都要重新判断
            if !state.can_follow(self.graph, edge) {
                continue;
            }
            let next = edge.sink();
            state.mark_tree_edge(edge);
            state.set_distance(next, depth + 1);
            self.dfs_visit(next, state);
        }
    }
}
