// crates/ys_network/src/lib.rs

//! YuShui 管网模型层
//!
//! 有向排水管网图：节点（检查井、雨水口、排放口）与管段，
//! 以及上游追踪所需的邻接查询与空间查询能力接口。
//!
//! 管段方向即水流方向（`from` 流向 `to`）。邻接查询以被查询
//! 节点为参照报告 `towards_junction`（管段是否流入该节点）。
//!
//! # 模块
//!
//! - `model`: 节点、管段、属性值与邻接记录类型
//! - `traits`: `NetworkGraph` 与 `JunctionLocator` 能力接口
//! - `memory`: 内存参考实现 `InMemoryNetwork` 与 `NetworkBuilder`
//!
//! # 示例
//!
//! ```
//! use ys_foundation::eid::{edge, junction};
//! use ys_geo::Point2D;
//! use ys_network::memory::NetworkBuilder;
//! use ys_network::model::{Edge, Junction};
//! use ys_network::traits::NetworkGraph;
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_class(1, "检查井");
//! builder.add_junction(Junction::new(junction(1), 1, Point2D::new(0.0, 0.0)));
//! builder.add_junction(Junction::new(junction(2), 1, Point2D::new(10.0, 0.0)));
//! builder.add_edge(Edge::new(edge(100), junction(1), junction(2)));
//!
//! let network = builder.build().unwrap();
//! let adjacent = network.adjacent_edges(junction(2)).unwrap();
//! assert!(adjacent[0].towards_junction);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod model;
pub mod traits;

// 重导出常用类型
pub use memory::{InMemoryNetwork, NetworkBuilder};
pub use model::{AdjacentEdge, AttrValue, Edge, EdgeInfo, Junction, JunctionInfo, SourceRef};
pub use traits::{JunctionLocator, NetworkGraph};
