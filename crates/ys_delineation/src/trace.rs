// crates/ys_delineation/src/trace.rs

//! 上游追踪器
//!
//! 从种子节点沿来水管段递归向上游走，收集可达的入流口。
//!
//! # 追踪规则
//!
//! - 已访问节点直接返回（环路保护，静默停止）
//! - 停用节点终止该分支；种子节点例外：用户显式选择的节点
//!   始终按启用处理
//! - 只递归进入启用的来水管段；去水管段不递归，仅参与管端判定
//! - 管端判定要求节点至少有一条邻接管段：无来水管段为上游管端，
//!   无去水管段为下游管端；孤立节点两者都不是，直接落入
//!   入流口类别判定
//! - 上游管端仅在配置开启时计入；下游管端在配置开启排除时
//!   不参与类别判定；其余节点类别等于入流口类别时计入
//!
//! 输出为发现顺序（深度优先）的入流口ID列表，不含重复；
//! 不可达或被停用隔断的区域静默排除，不报错。

use crate::config::TraceOptions;
use std::collections::HashSet;
use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsResult;
use ys_network::traits::NetworkGraph;

/// 上游追踪器
pub struct UpstreamTracer<'a, N: NetworkGraph> {
    graph: &'a N,
    options: TraceOptions,
}

impl<'a, N: NetworkGraph> UpstreamTracer<'a, N> {
    /// 创建追踪器
    #[must_use]
    pub fn new(graph: &'a N, options: TraceOptions) -> Self {
        Self { graph, options }
    }

    /// 追踪选项
    #[must_use]
    pub fn options(&self) -> &TraceOptions {
        &self.options
    }

    /// 从种子节点向上游追踪，返回可达的入流口ID
    ///
    /// `seed_always_enabled` 仅对用户显式选择的种子为真，
    /// 使种子本身跳过停用检查。
    pub fn trace(
        &self,
        seed: JunctionId,
        seed_always_enabled: bool,
    ) -> YsResult<Vec<JunctionId>> {
        let mut inlets = Vec::new();
        let mut traversed = HashSet::new();
        self.collect_upstream(seed, seed_always_enabled, &mut traversed, &mut inlets)?;
        Ok(inlets)
    }

    fn collect_upstream(
        &self,
        current: JunctionId,
        first_node: bool,
        traversed: &mut HashSet<JunctionId>,
        inlets: &mut Vec<JunctionId>,
    ) -> YsResult<()> {
        // 环路保护
        if !traversed.insert(current) {
            return Ok(());
        }

        // 种子节点始终按启用处理，因为它是用户选择的
        let info = self.graph.junction_info(current)?;
        if !first_node && self.options.exclude_disabled && !info.enabled {
            return Ok(());
        }

        let adjacent = self.graph.adjacent_edges(current)?;

        // 管端判定要求节点有邻接管段
        let mut upstream_end = !adjacent.is_empty();
        let mut downstream_end = !adjacent.is_empty();

        for adj in &adjacent {
            if adj.towards_junction {
                upstream_end = false;
                if adj.enabled || !self.options.exclude_disabled {
                    self.collect_upstream(adj.far_junction, false, traversed, inlets)?;
                }
            } else {
                downstream_end = false;
            }
        }

        if upstream_end && self.options.include_upstream_pipe_ends {
            inlets.push(current);
        } else if !(downstream_end && self.options.exclude_downstream_pipe_ends)
            && info.class_id == self.options.inlet_class_id
        {
            inlets.push(current);
        }

        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ys_foundation::eid::{edge, junction};
    use ys_geo::Point2D;
    use ys_network::memory::{InMemoryNetwork, NetworkBuilder};
    use ys_network::model::{Edge, Junction};

    const PLAIN: i32 = 1;
    const INLET: i32 = 2;

    fn options() -> TraceOptions {
        TraceOptions {
            inlet_class_id: INLET,
            include_upstream_pipe_ends: false,
            exclude_downstream_pipe_ends: false,
            exclude_disabled: true,
        }
    }

    /// 管端节点(1)与入流口(3)各经一条管段汇入种子汇点(2)
    fn junction_with_two_branches(
        plain_branch_enabled: bool,
        inlet_branch_enabled: bool,
    ) -> InMemoryNetwork {
        let mut builder = NetworkBuilder::new();
        builder.add_class(PLAIN, "检查井");
        builder.add_class(INLET, "雨水口");
        builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(-10.0, 0.0)));
        builder.add_junction(Junction::new(junction(2), PLAIN, Point2D::new(0.0, 0.0)));
        builder.add_junction(Junction::new(junction(3), INLET, Point2D::new(10.0, 0.0)));
        builder.add_edge(
            Edge::new(edge(101), junction(1), junction(2)).with_enabled(plain_branch_enabled),
        );
        builder.add_edge(
            Edge::new(edge(102), junction(3), junction(2)).with_enabled(inlet_branch_enabled),
        );
        builder.build().unwrap()
    }

    #[test]
    fn test_collects_only_inlet_class_by_default() {
        let network = junction_with_two_branches(true, true);
        let tracer = UpstreamTracer::new(
            &network,
            TraceOptions {
                exclude_downstream_pipe_ends: true,
                ..options()
            },
        );

        // 管端节点1不计入（开关关闭），汇点2被下游管端排除
        let inlets = tracer.trace(junction(2), true).unwrap();
        assert_eq!(inlets, vec![junction(3)]);
    }

    #[test]
    fn test_upstream_pipe_ends_included_when_configured() {
        let network = junction_with_two_branches(true, true);
        let tracer = UpstreamTracer::new(
            &network,
            TraceOptions {
                include_upstream_pipe_ends: true,
                exclude_downstream_pipe_ends: true,
                ..options()
            },
        );

        let mut inlets = tracer.trace(junction(2), true).unwrap();
        inlets.sort_unstable();
        assert_eq!(inlets, vec![junction(1), junction(3)]);
    }

    #[test]
    fn test_disabled_edge_blocks_branch() {
        let network = junction_with_two_branches(true, false);
        let tracer = UpstreamTracer::new(
            &network,
            TraceOptions {
                exclude_downstream_pipe_ends: true,
                ..options()
            },
        );

        // 入流口分支的管段停用，追踪止于汇点一侧
        let inlets = tracer.trace(junction(2), true).unwrap();
        assert!(inlets.is_empty());
    }

    #[test]
    fn test_disabled_edge_traversed_when_check_off() {
        let network = junction_with_two_branches(true, false);
        let tracer = UpstreamTracer::new(
            &network,
            TraceOptions {
                exclude_disabled: false,
                ..options()
            },
        );

        let inlets = tracer.trace(junction(2), true).unwrap();
        assert_eq!(inlets, vec![junction(3)]);
    }

    #[test]
    fn test_disabled_junction_stops_branch() {
        let mut builder = NetworkBuilder::new();
        builder.add_junction(Junction::new(junction(1), INLET, Point2D::new(0.0, 0.0)));
        builder.add_junction(
            Junction::new(junction(2), PLAIN, Point2D::new(5.0, 0.0)).with_enabled(false),
        );
        builder.add_junction(Junction::new(junction(3), PLAIN, Point2D::new(10.0, 0.0)));
        builder.add_edge(Edge::new(edge(101), junction(1), junction(2)));
        builder.add_edge(Edge::new(edge(102), junction(2), junction(3)));
        let network = builder.build().unwrap();

        // 停用节点2隔断了种子3与上游入流口1
        let tracer = UpstreamTracer::new(&network, options());
        assert!(tracer.trace(junction(3), true).unwrap().is_empty());
    }

    #[test]
    fn test_disabled_seed_bypassed_when_user_selected() {
        let mut builder = NetworkBuilder::new();
        builder.add_junction(Junction::new(junction(1), INLET, Point2D::new(0.0, 0.0)));
        builder.add_junction(
            Junction::new(junction(2), PLAIN, Point2D::new(5.0, 0.0)).with_enabled(false),
        );
        builder.add_edge(Edge::new(edge(101), junction(1), junction(2)));
        let network = builder.build().unwrap();

        let tracer = UpstreamTracer::new(&network, options());

        // 种子自身停用但用户显式选择，照常追踪
        assert_eq!(
            tracer.trace(junction(2), true).unwrap(),
            vec![junction(1)]
        );
        // 同一节点作为被发现的种子时则被停用检查拦下
        assert!(tracer.trace(junction(2), false).unwrap().is_empty());
    }

    #[test]
    fn test_isolated_junction_falls_through_to_class_check() {
        let mut builder = NetworkBuilder::new();
        builder.add_junction(Junction::new(junction(1), INLET, Point2D::ZERO));
        builder.add_junction(Junction::new(junction(2), PLAIN, Point2D::new(1.0, 0.0)));
        let network = builder.build().unwrap();

        // 零邻接管段的节点不参与管端判定，仅按类别判定
        let tracer = UpstreamTracer::new(
            &network,
            TraceOptions {
                include_upstream_pipe_ends: true,
                exclude_downstream_pipe_ends: true,
                ..options()
            },
        );
        assert_eq!(tracer.trace(junction(1), true).unwrap(), vec![junction(1)]);
        assert!(tracer.trace(junction(2), true).unwrap().is_empty());
    }

    #[test]
    fn test_cycle_terminates_and_visits_once() {
        // 1 -> 2 -> 3 -> 1 构成环
        let mut builder = NetworkBuilder::new();
        builder.add_junction(Junction::new(junction(1), INLET, Point2D::new(0.0, 0.0)));
        builder.add_junction(Junction::new(junction(2), INLET, Point2D::new(5.0, 0.0)));
        builder.add_junction(Junction::new(junction(3), INLET, Point2D::new(10.0, 0.0)));
        builder.add_edge(Edge::new(edge(101), junction(1), junction(2)));
        builder.add_edge(Edge::new(edge(102), junction(2), junction(3)));
        builder.add_edge(Edge::new(edge(103), junction(3), junction(1)));
        let network = builder.build().unwrap();

        let tracer = UpstreamTracer::new(&network, options());
        let mut inlets = tracer.trace(junction(1), true).unwrap();
        inlets.sort_unstable();
        assert_eq!(inlets, vec![junction(1), junction(2), junction(3)]);
    }

    #[test]
    fn test_dfs_discovery_order_no_duplicates() {
        // 菱形: 4 -> {2,3} -> 1，节点4分别经2和3两条路径汇入1
        let mut builder = NetworkBuilder::new();
        builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(0.0, 0.0)));
        builder.add_junction(Junction::new(junction(2), INLET, Point2D::new(-5.0, 5.0)));
        builder.add_junction(Junction::new(junction(3), INLET, Point2D::new(5.0, 5.0)));
        builder.add_junction(Junction::new(junction(4), INLET, Point2D::new(0.0, 10.0)));
        builder.add_edge(Edge::new(edge(101), junction(2), junction(1)));
        builder.add_edge(Edge::new(edge(102), junction(3), junction(1)));
        builder.add_edge(Edge::new(edge(103), junction(4), junction(2)));
        builder.add_edge(Edge::new(edge(104), junction(4), junction(3)));
        let network = builder.build().unwrap();

        let tracer = UpstreamTracer::new(&network, options());
        let inlets = tracer.trace(junction(1), true).unwrap();

        // 节点4经两条路径可达，但只分类一次
        assert_eq!(inlets.len(), 3);
        let unique: HashSet<_> = inlets.iter().copied().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_unreachable_region_excluded() {
        // 两个不连通的子网
        let mut builder = NetworkBuilder::new();
        builder.add_junction(Junction::new(junction(1), INLET, Point2D::new(0.0, 0.0)));
        builder.add_junction(Junction::new(junction(2), PLAIN, Point2D::new(5.0, 0.0)));
        builder.add_junction(Junction::new(junction(10), INLET, Point2D::new(100.0, 0.0)));
        builder.add_junction(Junction::new(junction(11), PLAIN, Point2D::new(105.0, 0.0)));
        builder.add_edge(Edge::new(edge(101), junction(1), junction(2)));
        builder.add_edge(Edge::new(edge(102), junction(10), junction(11)));
        let network = builder.build().unwrap();

        let tracer = UpstreamTracer::new(&network, options());
        assert_eq!(tracer.trace(junction(2), true).unwrap(), vec![junction(1)]);
    }
}
