//! 图配置

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 默认顶点名称最大长度
pub const DEFAULT_MAX_NAME_LEN: usize = 10;

/// 图配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// 有向图中算法不会沿残余边遍历
    pub directed: bool,
    /// 顶点名称截断长度（按字符计）
    pub max_name_len: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            max_name_len: DEFAULT_MAX_NAME_LEN,
        }
    }
}

impl GraphConfig {
    /// 无向图配置
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::default()
        }
    }

    /// 从 JSON 文件加载配置，缺失的字段使用默认值
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| Error::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if self.max_name_len == 0 {
            return Err(Error::ConfigError("max_name_len 必须大于 0".to_string()));
        }
        Ok(())
    }
}
