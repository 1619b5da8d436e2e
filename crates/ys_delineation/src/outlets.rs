// crates/ys_delineation/src/outlets.rs

//! 排放口查找器
//!
//! 在流域多边形内找出相对其中管网子图的末端汇点：被边界完全
//! 包含、至少有一条邻接管段、且所有邻接管段都流入它的节点。
//! 这些节点是地表延伸继续向上游追踪的新种子。

use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsResult;
use ys_geo::Polygon;
use ys_network::traits::{JunctionLocator, NetworkGraph};

/// 排放口查找器
pub struct OutletFinder<'a, N: NetworkGraph + JunctionLocator> {
    graph: &'a N,
    exclude_disabled: bool,
}

impl<'a, N: NetworkGraph + JunctionLocator> OutletFinder<'a, N> {
    /// 创建查找器
    #[must_use]
    pub fn new(graph: &'a N, exclude_disabled: bool) -> Self {
        Self {
            graph,
            exclude_disabled,
        }
    }

    /// 查找边界多边形内的排放口
    ///
    /// 停用检查开启时跳过停用节点；这里没有种子例外，
    /// 排放口都是被发现的，不是用户选择的。
    pub fn find(&self, boundary: &Polygon) -> YsResult<Vec<JunctionId>> {
        let mut outlets = Vec::new();

        for candidate in self.graph.junctions_contained_in(boundary)? {
            if self.exclude_disabled && !self.graph.junction_info(candidate)?.enabled {
                continue;
            }

            let adjacent = self.graph.adjacent_edges(candidate)?;
            let is_outlet = !adjacent.is_empty() && adjacent.iter().all(|a| a.towards_junction);
            if is_outlet {
                outlets.push(candidate);
            }
        }

        Ok(outlets)
    }
}

// ============================================================================
// 测试
// ============================================================================
