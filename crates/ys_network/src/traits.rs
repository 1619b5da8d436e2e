// crates/ys_network/src/traits.rs

//! 管网能力接口
//!
//! 流域划分核心只通过这两个接口访问管网，任何后端（内存图、
//! 空间数据库、宿主GIS的几何网络）实现它们即可接入。
//! 后端错误不做重试，立即向调用方传播。

use crate::model::{AdjacentEdge, AttrValue, EdgeInfo, JunctionInfo, SourceRef};
use ys_foundation::eid::{EdgeId, JunctionId};
use ys_foundation::error::YsResult;
use ys_geo::Polygon;

/// 有向管网图查询接口
pub trait NetworkGraph {
    /// 查询节点的邻接管段
    ///
    /// 每条记录以被查询节点为参照报告流向与另一端节点。
    fn adjacent_edges(&self, junction: JunctionId) -> YsResult<Vec<AdjacentEdge>>;

    /// 查询节点的类别与启用状态
    fn junction_info(&self, junction: JunctionId) -> YsResult<JunctionInfo>;

    /// 查询管段的启用状态
    fn edge_info(&self, edge: EdgeId) -> YsResult<EdgeInfo>;

    /// 查询节点的溯源信息（类别名称与源要素ID）
    fn junction_source(&self, junction: JunctionId) -> YsResult<SourceRef>;

    /// 读取节点的属性值，字段不存在时返回 `None`
    fn junction_attribute(&self, junction: JunctionId, field: &str)
        -> YsResult<Option<AttrValue>>;
}

/// 节点空间查询接口
pub trait JunctionLocator {
    /// 查询被多边形完全包含的节点
    ///
    /// 包含判定，不是相交判定。
    fn junctions_contained_in(&self, boundary: &Polygon) -> YsResult<Vec<JunctionId>>;
}
