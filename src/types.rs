//! 通用类型定义
//!
//! 遍历算法使用的着色状态

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点遍历颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VertexColor {
    /// 未访问
    #[default]
    Unvisited,
    /// 在队列中（仅 BFS）
    Frontier,
    /// 已访问
    Visited,
}

impl fmt::Display for VertexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexColor::Unvisited => write!(f, "unvisited"),
            VertexColor::Frontier => write!(f, "frontier"),
            VertexColor::Visited => write!(f, "visited"),
        }
    }
}

/// 边遍历颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeColor {
    /// 未访问
    #[default]
    Unvisited,
    /// 树边（BFS/DFS/Prim 的输出）
    Tree,
}

/// 二分图着色的两侧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// 相反的一侧
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}
