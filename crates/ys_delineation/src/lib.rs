// crates/ys_delineation/src/lib.rs

//! YuShui 流域划分引擎
//!
//! 城市雨水管网流域划分核心：从种子节点沿管网向上游追踪，
//! 收集入流口并合并其预计算汇水面，再经地表延伸迭代扩展
//! 流域边界，直到不再发现新的入流口。
//!
//! # 模块
//!
//! - [`config`]: 划分配置与追踪选项
//! - [`catchments`]: 汇水面存储能力接口与内存实现
//! - [`trace`]: 上游追踪器（深度优先，环路安全）
//! - [`merge`]: 汇水面合并器（平衡两两合并）
//! - [`outlets`]: 排放口查找器（边界内的末端汇点）
//! - [`extend`]: 地表延伸器（不动点迭代）
//! - [`delineator`]: 划分协调器（管网选择模式与地表点模式）
//! - [`surface`]: 地表水文能力接口与预计算实现
//! - [`snapshot`]: 运行设置快照持久化
//! - [`error`]: 划分错误类型
//!
//! # 示例
//!
//! ```
//! use ys_delineation::prelude::*;
//! use ys_foundation::eid::{edge, junction};
//! use ys_geo::{Crs, PlanarOps, Point2D, Polygon};
//! use ys_network::{Edge, Junction, NetworkBuilder};
//!
//! // 雨水口(2)流入检查井(1)
//! let mut builder = NetworkBuilder::new();
//! builder.add_class(1, "检查井");
//! builder.add_class(2, "雨水口");
//! builder.add_junction(Junction::new(junction(1), 1, Point2D::new(5.0, 0.0)));
//! builder.add_junction(Junction::new(junction(2), 2, Point2D::new(0.0, 0.0)));
//! builder.add_edge(Edge::new(edge(10), junction(2), junction(1)));
//! let network = builder.build().unwrap();
//!
//! let mut catchments = InMemoryCatchments::new(Crs::epsg(4547));
//! catchments.insert(
//!     junction(2),
//!     Polygon::rectangle(Point2D::new(-2.0, -2.0), Point2D::new(2.0, 2.0)),
//! );
//!
//! let config = DelineationConfig {
//!     inlet_class_id: Some(2),
//!     extend_overland: false,
//!     ..DelineationConfig::default()
//! };
//!
//! let ops = PlanarOps;
//! let delineator = Delineator::new(&network, &ops, config).with_catchments(&catchments);
//! let watersheds = delineator.delineate_junctions(&[junction(1)]).unwrap();
//!
//! assert!((watersheds[&junction(1)].area - 16.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catchments;
pub mod config;
pub mod delineator;
pub mod error;
pub mod extend;
pub mod merge;
pub mod outlets;
pub mod snapshot;
pub mod surface;
pub mod trace;

// 重导出常用类型
pub use catchments::{CatchmentStore, InMemoryCatchments};
pub use config::{DelineationConfig, SnapOptions, TraceOptions};
pub use delineator::{Delineator, Watershed};
pub use error::{DelineationError, DelineationResult};
pub use extend::OverlandExtender;
pub use merge::CatchmentMerger;
pub use outlets::OutletFinder;
pub use snapshot::SettingsSnapshot;
pub use surface::{PrecomputedSurface, SourceId, SurfaceHydrology};
pub use trace::UpstreamTracer;

/// 预导入模块
pub mod prelude {
    pub use crate::catchments::{CatchmentStore, InMemoryCatchments};
    pub use crate::config::{DelineationConfig, SnapOptions, TraceOptions};
    pub use crate::delineator::{Delineator, Watershed};
    pub use crate::error::{DelineationError, DelineationResult};
    pub use crate::extend::OverlandExtender;
    pub use crate::merge::CatchmentMerger;
    pub use crate::outlets::OutletFinder;
    pub use crate::snapshot::SettingsSnapshot;
    pub use crate::surface::{PrecomputedSurface, SourceId, SurfaceHydrology};
    pub use crate::trace::UpstreamTracer;
}
