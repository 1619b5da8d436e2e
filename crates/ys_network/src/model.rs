// crates/ys_network/src/model.rs

//! 管网数据模型
//!
//! 节点与管段在本核心的生命周期内只读，属性随构建一次写入。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ys_foundation::eid::{EdgeId, JunctionId};
use ys_geo::Point2D;

// ============================================================================
// 属性值
// ============================================================================

/// 要素属性值
///
/// 输出标注字段可取整数（含要素OID）、浮点或文本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// 整数值
    Integer(i64),
    /// 浮点值
    Real(f64),
    /// 文本值
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

// ============================================================================
// 节点与管段
// ============================================================================

/// 管网节点
///
/// 检查井、雨水口、排放口等。`class_id` 标识所属要素类别，
/// 追踪时与配置的入流口类别比对。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    /// 元素ID
    pub eid: JunctionId,
    /// 要素类别ID
    pub class_id: i32,
    /// 源要素ID（输出标注用）
    pub feature_id: u32,
    /// 是否启用
    pub enabled: bool,
    /// 平面位置
    pub location: Point2D,
    /// 要素属性
    pub attributes: BTreeMap<String, AttrValue>,
}

impl Junction {
    /// 创建节点（默认启用，源要素ID取元素ID）
    #[must_use]
    pub fn new(eid: JunctionId, class_id: i32, location: Point2D) -> Self {
        Self {
            eid,
            class_id,
            feature_id: eid.raw(),
            enabled: true,
            location,
            attributes: BTreeMap::new(),
        }
    }

    /// 设置启用状态
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// 设置源要素ID
    #[must_use]
    pub fn with_feature_id(mut self, feature_id: u32) -> Self {
        self.feature_id = feature_id;
        self
    }

    /// 添加属性
    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// 管段
///
/// `from` 流向 `to`，即水流方向。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// 元素ID
    pub eid: EdgeId,
    /// 上游端节点
    pub from: JunctionId,
    /// 下游端节点
    pub to: JunctionId,
    /// 是否启用
    pub enabled: bool,
}

impl Edge {
    /// 创建管段（默认启用）
    #[must_use]
    pub fn new(eid: EdgeId, from: JunctionId, to: JunctionId) -> Self {
        Self {
            eid,
            from,
            to,
            enabled: true,
        }
    }

    /// 设置启用状态
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

// ============================================================================
// 查询结果记录
// ============================================================================

/// 邻接管段记录
///
/// 以被查询节点为参照：`towards_junction` 为真表示管段流入该节点，
/// 即 `far_junction` 在上游一侧。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacentEdge {
    /// 管段元素ID
    pub edge: EdgeId,
    /// 管段另一端的节点
    pub far_junction: JunctionId,
    /// 管段是否流入被查询节点
    pub towards_junction: bool,
    /// 管段是否启用
    pub enabled: bool,
}

/// 节点查询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionInfo {
    /// 要素类别ID
    pub class_id: i32,
    /// 是否启用
    pub enabled: bool,
}

/// 管段查询结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeInfo {
    /// 是否启用
    pub enabled: bool,
}

/// 节点溯源信息（输出标注用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// 要素类别ID
    pub class_id: i32,
    /// 要素类别名称
    pub class_name: String,
    /// 源要素ID
    pub feature_id: u32,
}

// ============================================================================
// 测试
// ============================================================================
