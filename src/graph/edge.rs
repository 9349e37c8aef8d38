//! 边定义
//!
//! 每条用户声明的边（实边）都配有一条反向的残余边，为流网络算法预留。
//! 残余边容量为 0、代价为正无穷，与实边同时创建、同时删除。

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// 边 ID（图内唯一，不复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 创建边时的可选属性
///
/// 未设置的字段取默认值；NaN 视为非数值，按 0 处理。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeProperties {
    pub cost: Option<f64>,
    pub min_flow: Option<f64>,
    pub max_flow: Option<f64>,
    pub flow: Option<f64>,
}

impl EdgeProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn min_flow(mut self, min_flow: f64) -> Self {
        self.min_flow = Some(min_flow);
        self
    }

    pub fn max_flow(mut self, max_flow: f64) -> Self {
        self.max_flow = Some(max_flow);
        self
    }

    pub fn flow(mut self, flow: f64) -> Self {
        self.flow = Some(flow);
        self
    }

    /// 从 `key=value` 形式的赋值列表解析属性
    ///
    /// 无法解析的数值按 0 处理，未知的键被忽略。
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut props = Self::default();
        for (key, raw) in pairs {
            let value = raw.trim().parse::<f64>().unwrap_or_else(|_| {
                warn!(key, value = raw, "non-numeric edge property coerced to 0");
                0.0
            });
            match key.trim() {
                "cost" => props.cost = Some(value),
                "min" | "min_flow" | "minFlow" => props.min_flow = Some(value),
                "max" | "max_flow" | "maxFlow" => props.max_flow = Some(value),
                "flow" => props.flow = Some(value),
                other => warn!(key = other, "unknown edge property ignored"),
            }
        }
        props
    }
}

fn numeric(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// 边
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 源顶点 ID
    source: VertexId,
    /// 目标顶点 ID
    sink: VertexId,
    /// 代价
    cost: f64,
    /// 流量下界
    min_flow: f64,
    /// 流量上界（容量）
    max_flow: f64,
    /// 当前流量
    flow: f64,
    /// 配对的残余边
    redge: EdgeId,
    /// 是否为自动生成的残余边
    fake: bool,
}

impl Edge {
    /// 创建实边，按规则夹紧各项属性
    pub(crate) fn real(
        id: EdgeId,
        source: VertexId,
        sink: VertexId,
        redge: EdgeId,
        props: &EdgeProperties,
    ) -> Self {
        let cost = props.cost.map(numeric).unwrap_or(0.0);
        let min_flow = props.min_flow.map(numeric).unwrap_or(0.0).max(0.0);
        let max_flow = match props.max_flow.map(numeric) {
            Some(max) => max.max(min_flow),
            None => f64::INFINITY,
        };
        let flow = props.flow.map(numeric).unwrap_or(0.0).clamp(0.0, max_flow);

        Self {
            id,
            source,
            sink,
            cost,
            min_flow,
            max_flow,
            flow,
            redge,
            fake: false,
        }
    }

    /// 创建 `real` 的残余边：方向相反、容量 0、代价正无穷
    pub(crate) fn residual_of(id: EdgeId, real: &Edge) -> Self {
        Self {
            id,
            source: real.sink,
            sink: real.source,
            cost: f64::INFINITY,
            min_flow: real.min_flow,
            max_flow: 0.0,
            flow: 0.0,
            redge: real.id,
            fake: true,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取源顶点 ID
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 获取目标顶点 ID
    pub fn sink(&self) -> VertexId {
        self.sink
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn min_flow(&self) -> f64 {
        self.min_flow
    }

    pub fn max_flow(&self) -> f64 {
        self.max_flow
    }

    pub fn flow(&self) -> f64 {
        self.flow
    }

    /// 配对的残余边 ID
    pub fn redge(&self) -> EdgeId {
        self.redge
    }

    /// 是否为残余边
    pub fn is_fake(&self) -> bool {
        self.fake
    }

    /// 是否为用户声明的实边
    pub fn is_real(&self) -> bool {
        !self.fake
    }

    /// 剩余容量（增广路径算法使用）
    pub fn residual_capacity(&self) -> f64 {
        self.max_flow - self.flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(props: EdgeProperties) -> Edge {
        Edge::real(
            EdgeId::new(1),
            VertexId::new(1),
            VertexId::new(2),
            EdgeId::new(2),
            &props,
        )
    }

    #[test]
    fn test_defaults() {
        let e = real(EdgeProperties::new());
        assert_eq!(e.cost(), 0.0);
        assert_eq!(e.min_flow(), 0.0);
        assert_eq!(e.max_flow(), f64::INFINITY);
        assert_eq!(e.flow(), 0.0);
        assert!(e.is_real());
    }

    #[test]
    fn test_clamping() {
        let e = real(EdgeProperties::new().max_flow(5.0).min_flow(10.0));
        assert_eq!(e.min_flow(), 10.0);
        assert_eq!(e.max_flow(), 10.0);

        let e = real(EdgeProperties::new().min_flow(-3.0).flow(-1.0));
        assert_eq!(e.min_flow(), 0.0);
        assert_eq!(e.flow(), 0.0);

        let e = real(EdgeProperties::new().max_flow(4.0).flow(9.0));
        assert_eq!(e.flow(), 4.0);
        assert_eq!(e.residual_capacity(), 0.0);
    }

    #[test]
    fn test_nan_is_zero() {
        let e = real(EdgeProperties::new().cost(f64::NAN).flow(f64::NAN));
        assert_eq!(e.cost(), 0.0);
        assert_eq!(e.flow(), 0.0);
    }

    #[test]
    fn test_residual() {
        let e = real(EdgeProperties::new().cost(7.0).min_flow(2.0).max_flow(8.0).flow(3.0));
        let r = Edge::residual_of(EdgeId::new(2), &e);

        assert!(r.is_fake());
        assert_eq!(r.source(), e.sink());
        assert_eq!(r.sink(), e.source());
        assert_eq!(r.redge(), e.id());
        assert_eq!(e.redge(), r.id());
        assert_eq!(r.cost(), f64::INFINITY);
        assert_eq!(r.max_flow(), 0.0);
        assert_eq!(r.min_flow(), 2.0);
        assert_eq!(r.flow(), 0.0);
    }

    #[test]
    fn test_from_pairs() {
        let props = EdgeProperties::from_pairs([
            ("cost", "2.5"),
            ("max", "10"),
            ("minFlow", "1"),
            ("flow", "abc"),
            ("color", "red"),
        ]);
        assert_eq!(props.cost, Some(2.5));
        assert_eq!(props.max_flow, Some(10.0));
        assert_eq!(props.min_flow, Some(1.0));
        assert_eq!(props.flow, Some(0.0));
    }
}
