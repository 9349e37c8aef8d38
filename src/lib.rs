//! FlowGraph - 内存流网络图
//!
//! 支持增量构建与修改的有向图，每条边自动配有残余边，提供：
//! - 广度优先 / 深度优先遍历
//! - 二分图判定
//! - Prim 最小生成树
//! - 交互式命令行（`flowgraph-cli`）

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use algorithm::{Bipartition, PrimTag, RunState, ScoredQueue, SearchTree, SpanningTree};
pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, EdgeProperties, Graph, Vertex, VertexId};
pub use types::{EdgeColor, Side, VertexColor};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
