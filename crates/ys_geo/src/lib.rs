// crates/ys_geo/src/lib.rs

//! YuShui 平面几何模块
//!
//! 提供流域划分核心所需的平面几何类型与空间查询能力。
//!
//! # 模块
//!
//! - `geometry`: 平面点类型 `Point2D`
//! - `polygon`: 闭合环与多部件多边形（鞋带面积、射线法包含测试）
//! - `crs`: 轻量坐标参考系统标签
//! - `spatial_index`: 基于 R-tree 的空间索引
//! - `ops`: 几何运算能力接口 `GeometryOps` 及默认实现 `PlanarOps`
//!
//! # 示例
//!
//! ```
//! use ys_geo::prelude::*;
//!
//! let square = Polygon::rectangle(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
//! assert!((square.area() - 4.0).abs() < 1e-10);
//! assert!(square.contains_point(&Point2D::new(1.0, 1.0)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod crs;
pub mod geometry;
pub mod ops;
pub mod polygon;
pub mod spatial_index;

/// 预导入模块
pub mod prelude {
    pub use crate::crs::Crs;
    pub use crate::geometry::Point2D;
    pub use crate::ops::{GeometryOps, PlanarOps};
    pub use crate::polygon::{Polygon, Ring};
    pub use crate::spatial_index::{BoundingBox, SpatialIndex};
}

// 重导出常用类型
pub use crs::Crs;
pub use geometry::Point2D;
pub use ops::{GeometryOps, PlanarOps};
pub use polygon::{Polygon, Ring};
pub use spatial_index::{BoundingBox, SpatialIndex};
