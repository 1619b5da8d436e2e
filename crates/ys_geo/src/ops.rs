// crates/ys_geo/src/ops.rs

//! 几何运算能力接口
//!
//! 流域划分核心通过 [`GeometryOps`] 消费几何运算，不直接依赖
//! 具体实现。默认实现 [`PlanarOps`] 基于本 crate 的多部件多边形；
//! 需要精确布尔运算（溶解共享边界、处理重叠输入）的宿主可以
//! 接入任意计算几何库实现该接口。
//!
//! # 示例
//!
//! ```
//! use ys_geo::geometry::Point2D;
//! use ys_geo::ops::{GeometryOps, PlanarOps};
//! use ys_geo::polygon::Polygon;
//!
//! let ops = PlanarOps;
//! let a = Polygon::rectangle(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
//! let b = Polygon::rectangle(Point2D::new(2.0, 0.0), Point2D::new(4.0, 3.0));
//!
//! let merged = ops.union(&a, &b).unwrap();
//! assert!((ops.area(&merged).unwrap() - 10.0).abs() < 1e-10);
//! ```

use crate::polygon::Polygon;
use ys_foundation::error::YsResult;

/// 几何运算能力接口
///
/// 后端错误不做重试，包装为 `YsError::Backend` 后立即传播。
pub trait GeometryOps {
    /// 合并两个多边形
    fn union(&self, a: &Polygon, b: &Polygon) -> YsResult<Polygon>;

    /// 计算多边形面积
    fn area(&self, polygon: &Polygon) -> YsResult<f64>;
}

/// 平面几何默认后端
///
/// 合并以部件拼接实现，面积为各部件面积之和。要求输入多边形
/// 内部互不重叠，栅格流域剖分产出的汇水面天然满足该条件。
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarOps;

impl GeometryOps for PlanarOps {
    fn union(&self, a: &Polygon, b: &Polygon) -> YsResult<Polygon> {
        Ok(a.union(b))
    }

    fn area(&self, polygon: &Polygon) -> YsResult<f64> {
        Ok(polygon.area())
    }
}

// ============================================================================
// 测试
// ============================================================================
