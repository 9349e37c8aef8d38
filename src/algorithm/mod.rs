//! 图算法模块
//!
//! 包含 BFS/DFS 遍历、二分图判定和 Prim 最小生成树。
//! 每次运行都使用独立的 `RunState`，结果随返回值交给调用方。

mod bipartite;
mod prim;
mod queue;
mod state;
mod traversal;

pub use bipartite::{Bipartition, TwoColoring};
pub use prim::{PrimMst, PrimTag, SpanningTree};
pub use queue::ScoredQueue;
pub use state::RunState;
pub use traversal::{SearchTree, Traversal};
