// crates/ys_delineation/tests/pathological_tests.rs

//! 病态输入测试
//!
//! 环状管网、超长链路、孤立节点、缺失/重复的汇水面记录、
//! 后端故障与数据源断链。

use std::collections::BTreeMap;
use ys_delineation::prelude::*;
use ys_foundation::eid::{edge, junction, JunctionId};
use ys_foundation::error::{YsError, YsResult};
use ys_geo::{Crs, PlanarOps, Point2D, Polygon};
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

fn config() -> DelineationConfig {
    DelineationConfig {
        inlet_class_id: Some(INLET),
        extend_overland: false,
        ..DelineationConfig::default()
    }
}

// ============================================================
// Plan 1: 环与长链
// ============================================================

#[test]
fn test_cycle_with_branch_terminates() {
    // 环 1->2->3->1，入流口4经管段汇入环上节点2
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(0.0, 0.0)));
    builder.add_junction(Junction::new(junction(2), PLAIN, Point2D::new(10.0, 0.0)));
    builder.add_junction(Junction::new(junction(3), PLAIN, Point2D::new(5.0, 10.0)));
    builder.add_junction(Junction::new(junction(4), INLET, Point2D::new(20.0, 0.0)));
    builder.add_edge(Edge::new(edge(101), junction(1), junction(2)));
    builder.add_edge(Edge::new(edge(102), junction(2), junction(3)));
    builder.add_edge(Edge::new(edge(103), junction(3), junction(1)));
    builder.add_edge(Edge::new(edge(104), junction(4), junction(2)));
    let network = builder.build().unwrap();

    let tracer = UpstreamTracer::new(&network, options());
    let inlets = tracer.trace(junction(1), true).unwrap();
    assert_eq!(inlets, vec![junction(4)]);
}

#[test]
fn test_long_chain_trace_is_bounded_by_junction_count() {
    // 1000级串联链路，最上游是入流口
    const CHAIN: u32 = 1000;
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(
        junction(CHAIN),
        INLET,
        Point2D::new(f64::from(CHAIN), 0.0),
    ));
    for i in 1..CHAIN {
        builder.add_junction(Junction::new(junction(i), PLAIN, Point2D::new(f64::from(i), 0.0)));
    }
    for i in 1..CHAIN {
        // 水流从 i+1 流向 i
        builder.add_edge(Edge::new(edge(10_000 + i), junction(i + 1), junction(i)));
    }
    let network = builder.build().unwrap();

    let tracer = UpstreamTracer::new(&network, options());
    let inlets = tracer.trace(junction(1), true).unwrap();
    assert_eq!(inlets, vec![junction(CHAIN)]);
}

#[test]
fn test_cyclic_outlet_rediscovery_terminates_extension() {
    // 入流口2汇入汇点1，1的汇水面覆盖1自己：
    // 延伸每轮都会重新发现排放口1，但其上游入流口已用过
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(5.0, 5.0)));
    builder.add_junction(Junction::new(junction(2), INLET, Point2D::new(2.0, 2.0)));
    builder.add_edge(Edge::new(edge(101), junction(2), junction(1)));
    let network = builder.build().unwrap();

    let mut store = InMemoryCatchments::new(Crs::Unknown);
    store.insert(
        junction(2),
        Polygon::rectangle(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0)),
    );

    let ops = PlanarOps;
    let delineator = Delineator::new(
        &network,
        &ops,
        DelineationConfig {
            extend_overland: true,
            ..config()
        },
    )
    .with_catchments(&store);

    let watersheds = delineator.delineate_junctions(&[junction(1)]).unwrap();
    assert!((watersheds[&junction(1)].area - 100.0).abs() < 1e-10);
}

// ============================================================
// Plan 2: 孤立节点与缺失记录
// ============================================================

#[test]
fn test_isolated_inlet_seed_uses_own_catchment() {
    let mut builder = NetworkBuilder::new();
    builder.add_class(INLET, "雨水口");
    builder.add_junction(Junction::new(junction(9), INLET, Point2D::ZERO));
    let network = builder.build().unwrap();

    let mut store = InMemoryCatchments::new(Crs::Unknown);
    store.insert(
        junction(9),
        Polygon::rectangle(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0)),
    );

    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    // 孤立节点不参与管端判定，按类别判定计入自己
    let watersheds = delineator.delineate_junctions(&[junction(9)]).unwrap();
    assert!((watersheds[&junction(9)].area - 4.0).abs() < 1e-10);
}

#[test]
fn test_isolated_plain_seed_is_empty_trace() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(9), PLAIN, Point2D::ZERO));
    let network = builder.build().unwrap();
    let store = InMemoryCatchments::new(Crs::Unknown);

    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    assert!(matches!(
        delineator.delineate_junctions(&[junction(9)]),
        Err(DelineationError::EmptyTrace { seed }) if seed == junction(9)
    ));
}

#[test]
fn test_inlet_without_catchment_yields_empty_polygon() {
    // 入流口存在但没有对应的汇水面记录：静默跳过，不报错
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(1.0, 0.0)));
    builder.add_junction(Junction::new(junction(2), INLET, Point2D::new(0.0, 0.0)));
    builder.add_edge(Edge::new(edge(10), junction(2), junction(1)));
    let network = builder.build().unwrap();
    let store = InMemoryCatchments::new(Crs::Unknown);

    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let watersheds = delineator.delineate_junctions(&[junction(1)]).unwrap();
    let record = &watersheds[&junction(1)];
    assert!(record.polygon.is_empty());
    assert!((record.area - 0.0).abs() < 1e-10);
}

#[test]
fn test_duplicate_catchment_key_last_wins() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(1.0, 0.0)));
    builder.add_junction(Junction::new(junction(2), INLET, Point2D::new(0.0, 0.0)));
    builder.add_edge(Edge::new(edge(10), junction(2), junction(1)));
    let network = builder.build().unwrap();

    let mut store = InMemoryCatchments::new(Crs::Unknown);
    store.insert(
        junction(2),
        Polygon::rectangle(Point2D::ZERO, Point2D::new(1.0, 1.0)),
    );
    store.insert(
        junction(2),
        Polygon::rectangle(Point2D::ZERO, Point2D::new(3.0, 3.0)),
    );

    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let watersheds = delineator.delineate_junctions(&[junction(1)]).unwrap();
    assert!((watersheds[&junction(1)].area - 9.0).abs() < 1e-10);
}

// ============================================================
// Plan 3: 后端故障与数据源断链
// ============================================================

/// 扫描即失败的汇水面存储
struct FailingStore;

impl CatchmentStore for FailingStore {
    fn crs(&self) -> Crs {
        Crs::Unknown
    }

    fn lookup(&self, _inlet: JunctionId) -> YsResult<Option<Polygon>> {
        Err(YsError::backend("catchments", "存储连接中断"))
    }

    fn scan(&self, _visit: &mut dyn FnMut(JunctionId, &Polygon)) -> YsResult<()> {
        Err(YsError::backend("catchments", "存储连接中断"))
    }
}

#[test]
fn test_backend_failure_propagates_immediately() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), PLAIN, Point2D::new(1.0, 0.0)));
    builder.add_junction(Junction::new(junction(2), INLET, Point2D::new(0.0, 0.0)));
    builder.add_edge(Edge::new(edge(10), junction(2), junction(1)));
    let network = builder.build().unwrap();

    let store = FailingStore;
    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let err = delineator.delineate_junctions(&[junction(1)]).unwrap_err();
    assert!(err.to_string().contains("后端错误"));
}

#[test]
fn test_unknown_seed_is_backend_not_found() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), INLET, Point2D::ZERO));
    let network = builder.build().unwrap();
    let store = InMemoryCatchments::new(Crs::Unknown);

    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let err = delineator.delineate_junctions(&[junction(404)]).unwrap_err();
    assert!(err.to_string().contains("404"));
}

#[test]
fn test_detached_surface_source_fails_validation() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), INLET, Point2D::ZERO));
    let network = builder.build().unwrap();
    let store = InMemoryCatchments::new(Crs::Unknown);

    let surface = PrecomputedSurface::detached("断链图层");
    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let err = delineator.delineate_surface(&surface).unwrap_err();
    assert!(err.to_string().contains("数据源"));
}

#[test]
fn test_non_point_surface_source_warns_on_snap() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), INLET, Point2D::ZERO));
    let network = builder.build().unwrap();
    let store = InMemoryCatchments::new(Crs::Unknown);

    // 面要素源 + 捕捉开启：校验降级为警告，划分照常进行
    let surface = PrecomputedSurface::new("面要素源").with_point_source(false);
    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let report = delineator.validate_surface_mode(&surface);
    assert!(report.is_valid());
    assert!(report.has_warnings());

    let watersheds = delineator.delineate_surface(&surface).unwrap();
    assert!(watersheds.is_empty());
}

// ============================================================
// Plan 4: 空结果映射
// ============================================================

#[test]
fn test_surface_without_features_yields_empty_map() {
    let mut builder = NetworkBuilder::new();
    builder.add_junction(Junction::new(junction(1), INLET, Point2D::ZERO));
    let network = builder.build().unwrap();
    let store = InMemoryCatchments::new(Crs::Unknown);

    let surface = PrecomputedSurface::new("空图层");
    let ops = PlanarOps;
    let delineator = Delineator::new(&network, &ops, config()).with_catchments(&store);

    let watersheds: BTreeMap<SourceId, Watershed> =
        delineator.delineate_surface(&surface).unwrap();
    assert!(watersheds.is_empty());
}
