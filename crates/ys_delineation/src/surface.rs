// crates/ys_delineation/src/surface.rs

//! 地表水文能力接口
//!
//! 地表点模式的种子是任意平面点位，不必是管网节点。把点位
//! 换算成地表流域多边形的栅格水文链路（填洼、流向、分水岭、
//! 栅格转面、捕捉汇流低点）属于宿主平台，核心只通过本接口
//! 消费其结果：每个源要素对应一个流域多边形。
//!
//! [`PrecomputedSurface`] 是内存参考实现，持有预先算好的
//! 每要素流域多边形；捕捉已在预计算阶段完成，运行期的捕捉
//! 选项对它只是透传。

use crate::config::SnapOptions;
use std::collections::{BTreeMap, BTreeSet};
use ys_foundation::error::YsResult;
use ys_geo::Polygon;
use ys_network::model::AttrValue;

/// 地表源要素ID
pub type SourceId = u32;

/// 地表水文能力接口
pub trait SurfaceHydrology {
    /// 源图层别名（输出标注用）
    fn alias(&self) -> &str;

    /// 源图层的底层数据集是否可用
    fn has_dataset(&self) -> bool;

    /// 源是否为点要素（决定捕捉设置是否生效）
    fn is_point_source(&self) -> bool;

    /// 按源要素划分地表流域
    ///
    /// 返回源要素ID到流域多边形的映射。有选择集时只处理
    /// 选中的要素，否则处理全部要素。
    fn delineate(&self, snap: Option<&SnapOptions>) -> YsResult<BTreeMap<SourceId, Polygon>>;

    /// 读取源要素的属性值，字段不存在时返回 `None`
    fn label_value(&self, source: SourceId, field: &str) -> YsResult<Option<AttrValue>>;
}

// ============================================================================
// 内存参考实现
// ============================================================================

/// 预计算地表流域存储
pub struct PrecomputedSurface {
    alias: String,
    has_dataset: bool,
    point_source: bool,
    watersheds: BTreeMap<SourceId, Polygon>,
    attributes: BTreeMap<SourceId, BTreeMap<String, AttrValue>>,
    selection: BTreeSet<SourceId>,
}

impl PrecomputedSurface {
    /// 创建空存储
    #[must_use]
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            has_dataset: true,
            point_source: true,
            watersheds: BTreeMap::new(),
            attributes: BTreeMap::new(),
            selection: BTreeSet::new(),
        }
    }

    /// 创建数据源缺失的存储（图层引用了不存在的数据集）
    #[must_use]
    pub fn detached(alias: impl Into<String>) -> Self {
        Self {
            has_dataset: false,
            ..Self::new(alias)
        }
    }

    /// 设置源是否为点要素
    #[must_use]
    pub fn with_point_source(mut self, point_source: bool) -> Self {
        self.point_source = point_source;
        self
    }

    /// 登记源要素的流域多边形
    pub fn insert(&mut self, source: SourceId, watershed: Polygon) -> &mut Self {
        self.watersheds.insert(source, watershed);
        self
    }

    /// 登记源要素属性
    pub fn set_attr(
        &mut self,
        source: SourceId,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> &mut Self {
        self.attributes
            .entry(source)
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// 把源要素加入选择集
    pub fn select(&mut self, source: SourceId) -> &mut Self {
        self.selection.insert(source);
        self
    }

    /// 清空选择集（恢复处理全部要素）
    pub fn clear_selection(&mut self) -> &mut Self {
        self.selection.clear();
        self
    }
}

impl SurfaceHydrology for PrecomputedSurface {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn has_dataset(&self) -> bool {
        self.has_dataset
    }

    fn is_point_source(&self) -> bool {
        self.point_source
    }

    fn delineate(&self, _snap: Option<&SnapOptions>) -> YsResult<BTreeMap<SourceId, Polygon>> {
        let result = self
            .watersheds
            .iter()
            .filter(|(source, _)| self.selection.is_empty() || self.selection.contains(source))
            .map(|(source, shape)| (*source, shape.clone()))
            .collect();
        Ok(result)
    }

    fn label_value(&self, source: SourceId, field: &str) -> YsResult<Option<AttrValue>> {
        Ok(self
            .attributes
            .get(&source)
            .and_then(|attrs| attrs.get(field))
            .cloned())
    }
}

// ============================================================================
// 测试
// ============================================================================
