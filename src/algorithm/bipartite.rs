//! 二分图判定
//!
//! 从第一个顶点开始 BFS 两着色，沿所有出边（包括残余边）扩展，
//! 发现同色相邻即停止。只检查第一个顶点所在的连通分量。

use crate::graph::{Graph, VertexId};
use crate::types::Side;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// 二分图判定结果
#[derive(Debug, Clone)]
pub struct Bipartition {
    bipartite: bool,
    sides: HashMap<VertexId, Side>,
}

impl Bipartition {
    pub fn is_bipartite(&self) -> bool {
        self.bipartite
    }

    /// 顶点所在的一侧
    ///
    /// 结果为 `false` 时着色只完成了一部分，不应依赖。
    pub fn side(&self, vertex: VertexId) -> Option<Side> {
        self.sides.get(&vertex).copied()
    }

    /// 已着色的顶点数
    pub fn colored_count(&self) -> usize {
        self.sides.len()
    }
}

/// 两着色器
pub struct TwoColoring<'g> {
    graph: &'g Graph,
}

impl<'g> TwoColoring<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn run(&self) -> Bipartition {
        let mut sides = HashMap::new();

        let first = match self.graph.first_vertex() {
            Some(v) if self.graph.edge_count() > 0 => v.id(),
            _ => {
                return Bipartition {
                    bipartite: true,
                    sides,
                }
            }
        };

        let mut queue = VecDeque::new();
        let mut conflict = false;
        sides.insert(first, Side::A);
        queue.push_back(first);

        while !conflict {
            let Some(current) = queue.pop_front() else {
                break;
            };
            let Some(side) = sides.get(&current).copied() else {
                continue;
            };

            for edge in self.graph.adjacents(current) {
                let next = edge.sink();
                match sides.get(&next) {
                    None => {
                        sides.insert(next, side.opposite());
                        queue.push_back(next);
                    }
                    Some(&other) if other == side => conflict = true,
                    Some(_) => {}
                }
            }
        }

        debug!(bipartite = !conflict, colored = sides.len(), "two-coloring finished");
        Bipartition {
            bipartite: !conflict,
            sides,
        }
    }
}
