// crates/ys_delineation/src/extend.rs

//! 地表延伸器
//!
//! 地表水流越过管网汇流边界继续向下游汇集：流域多边形内的
//! 排放口承接了上游子网的来水，其汇流范围也属于该流域。
//! 延伸器反复查找当前流域内的排放口、从排放口向上游追踪、
//! 合并新发现入流口的汇水面并并入流域，直到不再发现新的
//! 入流口（不动点）。
//!
//! `used_inlets` 只增不减且以全网入流口总数为上界，这既是
//! 跨轮次的环路切断机制（环状管网会重复发现同一批入流口），
//! 也是递归终止的依据。

use crate::catchments::CatchmentStore;
use crate::config::TraceOptions;
use crate::merge::CatchmentMerger;
use crate::outlets::OutletFinder;
use crate::trace::UpstreamTracer;
use log::debug;
use std::collections::HashSet;
use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsResult;
use ys_geo::ops::GeometryOps;
use ys_geo::Polygon;
use ys_network::traits::{JunctionLocator, NetworkGraph};

/// 地表延伸器
pub struct OverlandExtender<'a, N, S, G>
where
    N: NetworkGraph + JunctionLocator,
    S: CatchmentStore + ?Sized,
    G: GeometryOps,
{
    graph: &'a N,
    store: &'a S,
    geometry: &'a G,
    options: TraceOptions,
}

impl<'a, N, S, G> OverlandExtender<'a, N, S, G>
where
    N: NetworkGraph + JunctionLocator,
    S: CatchmentStore + ?Sized,
    G: GeometryOps,
{
    /// 创建延伸器
    #[must_use]
    pub fn new(graph: &'a N, store: &'a S, geometry: &'a G, options: TraceOptions) -> Self {
        Self {
            graph,
            store,
            geometry,
            options,
        }
    }

    /// 延伸流域多边形直到不动点
    ///
    /// `used_inlets` 由调用方持有并跨轮次累积；已在其中的
    /// 入流口不会再次参与合并。到达不动点时原样返回输入。
    pub fn extend(
        &self,
        current: Polygon,
        used_inlets: &mut HashSet<JunctionId>,
    ) -> YsResult<Polygon> {
        let finder = OutletFinder::new(self.graph, self.options.exclude_disabled);
        let outlets = finder.find(&current)?;
        if outlets.is_empty() {
            return Ok(current);
        }

        // 收集所有排放口上游的新入流口；排放口是被发现的，
        // 不享受种子的停用豁免
        let tracer = UpstreamTracer::new(self.graph, self.options);
        let mut new_inlets = Vec::new();
        for outlet in &outlets {
            for inlet in tracer.trace(*outlet, false)? {
                if used_inlets.insert(inlet) {
                    new_inlets.push(inlet);
                }
            }
        }

        debug!(
            "地表延伸: {} 个排放口, {} 个新入流口",
            outlets.len(),
            new_inlets.len()
        );

        // 全部入流口都已划分过时终止，防止环状管网导致的无限迭代
        if new_inlets.is_empty() {
            return Ok(current);
        }

        let merger = CatchmentMerger::new(self.store, self.geometry);
        let extended_area = merger.merge(&new_inlets)?;
        let extended_area = self.extend(extended_area, used_inlets)?;

        self.geometry.union(&current, &extended_area)
    }
}

// ============================================================================
// 测试
// ============================================================================
