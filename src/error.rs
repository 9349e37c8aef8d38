//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("无效的顶点名称: {0:?}")]
    InvalidName(String),

    #[error("不允许自环: {0}")]
    SelfLoop(String),

    #[error("无效的命令: {0}")]
    InvalidCommand(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn edge_not_found(source: &str, sink: &str) -> Self {
        Self::EdgeNotFound {
            from: source.to_string(),
            to: sink.to_string(),
        }
    }

    /// 是否为"未找到"类错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::VertexNotFound(_) | Error::EdgeNotFound { .. })
    }
}
