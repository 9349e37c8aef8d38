//! 顶点定义
//!
//! 顶点以名称唯一标识，邻接表按插入顺序保存出边（包括残余边）

use crate::graph::edge::EdgeId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// 顶点 ID（图内唯一，不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 规范化顶点名称：去掉首尾空白，截断到 `max_len` 个字符（不加省略号）
pub fn normalize_name(name: &str, max_len: usize) -> String {
    name.trim().chars().take(max_len).collect()
}

/// 顶点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点名称
    name: String,
    /// 以该顶点为起点的边
    adjacents: SmallVec<[EdgeId; 4]>,
}

impl Vertex {
    /// 创建新顶点，名称应已规范化
    pub(crate) fn new(id: VertexId, name: String) -> Self {
        Self {
            id,
            name,
            adjacents: SmallVec::new(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 出边列表（按插入顺序）
    pub fn adjacents(&self) -> &[EdgeId] {
        &self.adjacents
    }

    /// 出边数量（包括残余边）
    pub fn degree(&self) -> usize {
        self.adjacents.len()
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.adjacents.push(edge);
    }

    /// 从邻接表移除一条边，返回是否存在
    pub(crate) fn detach(&mut self, edge: EdgeId) -> bool {
        match self.adjacents.iter().position(|&e| e == edge) {
            Some(pos) => {
                self.adjacents.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  alpha  ", 10), "alpha");
        assert_eq!(normalize_name("abcdefghijklmno", 10), "abcdefghij");
        assert_eq!(normalize_name("   ", 10), "");
        // 按字符截断，不会切开多字节字符
        assert_eq!(normalize_name("顶点顶点顶点", 4), "顶点顶点");
    }

    #[test]
    fn test_attach_detach() {
        let mut v = Vertex::new(VertexId::new(1), "a".to_string());
        v.attach(EdgeId::new(1));
        v.attach(EdgeId::new(2));
        v.attach(EdgeId::new(3));

        assert!(v.detach(EdgeId::new(2)));
        assert!(!v.detach(EdgeId::new(2)));
        assert_eq!(v.adjacents(), &[EdgeId::new(1), EdgeId::new(3)]);
        assert_eq!(v.degree(), 2);
    }
}
