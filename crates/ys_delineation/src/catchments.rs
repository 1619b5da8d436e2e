// crates/ys_delineation/src/catchments.rs

//! 汇水面存储能力接口
//!
//! 每个入流口对应一块预计算的汇水面多边形（栅格流域划分的
//! 矢量化结果），以入流口元素ID为键。存储归外部所有、只读；
//! 键缺失按"无汇水面"处理而不是报错。
//!
//! # 示例
//!
//! ```
//! use ys_delineation::catchments::{CatchmentStore, InMemoryCatchments};
//! use ys_foundation::eid::junction;
//! use ys_geo::{Crs, Point2D, Polygon};
//!
//! let mut store = InMemoryCatchments::new(Crs::epsg(4547));
//! store.insert(
//!     junction(3),
//!     Polygon::rectangle(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0)),
//! );
//!
//! assert!(store.lookup(junction(3)).unwrap().is_some());
//! assert!(store.lookup(junction(9)).unwrap().is_none());
//! ```

use std::collections::BTreeMap;
use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsResult;
use ys_geo::{Crs, Polygon};

/// 汇水面存储能力接口
pub trait CatchmentStore {
    /// 存储数据的坐标参考系统
    fn crs(&self) -> Crs;

    /// 按入流口ID查找汇水面，缺失返回 `None`
    fn lookup(&self, inlet: JunctionId) -> YsResult<Option<Polygon>>;

    /// 顺序扫描全部记录
    ///
    /// 合并器只做一次全量扫描并按已排序的入流口ID做二分匹配。
    fn scan(&self, visit: &mut dyn FnMut(JunctionId, &Polygon)) -> YsResult<()>;
}

/// 内存汇水面存储
///
/// 键唯一；重复插入同一入流口时新值覆盖旧值。
pub struct InMemoryCatchments {
    crs: Crs,
    shapes: BTreeMap<JunctionId, Polygon>,
}

impl InMemoryCatchments {
    /// 创建空存储
    #[must_use]
    pub fn new(crs: Crs) -> Self {
        Self {
            crs,
            shapes: BTreeMap::new(),
        }
    }

    /// 插入汇水面，返回被覆盖的旧值
    pub fn insert(&mut self, inlet: JunctionId, shape: Polygon) -> Option<Polygon> {
        self.shapes.insert(inlet, shape)
    }

    /// 记录数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// 是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl CatchmentStore for InMemoryCatchments {
    fn crs(&self) -> Crs {
        self.crs.clone()
    }

    fn lookup(&self, inlet: JunctionId) -> YsResult<Option<Polygon>> {
        Ok(self.shapes.get(&inlet).cloned())
    }

    fn scan(&self, visit: &mut dyn FnMut(JunctionId, &Polygon)) -> YsResult<()> {
        for (inlet, shape) in &self.shapes {
            visit(*inlet, shape);
        }
        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================
