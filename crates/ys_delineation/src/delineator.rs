// crates/ys_delineation/src/delineator.rs

//! 划分协调器
//!
//! 组合追踪、合并与延伸三个部件，提供两种种子模式：
//!
//! - **管网选择模式**: 种子是用户选中的管网节点。逐个种子向
//!   上游追踪、合并汇水面，按配置做地表延伸（该种子自己的
//!   入流口集合预置到 `used_inlets`）。
//! - **地表点模式**: 种子是任意点位，由外部地表水文后端换算成
//!   流域多边形；延伸时传入**空的** `used_inlets`，此时尚无
//!   入流口归属，延伸完全依靠边界内发现的排放口来归集。
//!
//! 前置条件在任何追踪开始前一次性校验（快速失败）；单个种子
//! 失败使整次调用失败，不输出部分结果。

use crate::catchments::{CatchmentStore, InMemoryCatchments};
use crate::config::{DelineationConfig, SnapOptions, TraceOptions};
use crate::error::{DelineationError, DelineationResult};
use crate::extend::OverlandExtender;
use crate::merge::CatchmentMerger;
use crate::surface::{SourceId, SurfaceHydrology};
use crate::trace::UpstreamTracer;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsError;
use ys_foundation::validation::ValidationReport;
use ys_geo::ops::GeometryOps;
use ys_geo::Polygon;
use ys_network::model::AttrValue;
use ys_network::traits::{JunctionLocator, NetworkGraph};

// ============================================================================
// 结果记录
// ============================================================================

/// 流域划分结果记录
///
/// 每个排放口/种子对应一条记录，标注其来源与可选的标注字段值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watershed {
    /// 来源名称（节点类别名或地表源图层别名）
    pub source: String,
    /// 源要素ID
    pub feature_id: u32,
    /// 种子节点元素ID（地表点模式为 `None`）
    pub seed: Option<JunctionId>,
    /// 流域多边形
    pub polygon: Polygon,
    /// 流域面积
    pub area: f64,
    /// 标注字段值（未配置标注字段或字段缺失时为 `None`）
    pub label: Option<AttrValue>,
}

// ============================================================================
// 协调器
// ============================================================================

/// 流域划分协调器
pub struct Delineator<'a, N, S, G>
where
    N: NetworkGraph + JunctionLocator,
    S: CatchmentStore,
    G: GeometryOps,
{
    network: &'a N,
    geometry: &'a G,
    catchments: Option<&'a S>,
    config: DelineationConfig,
}

impl<'a, N, G> Delineator<'a, N, InMemoryCatchments, G>
where
    N: NetworkGraph + JunctionLocator,
    G: GeometryOps,
{
    /// 创建协调器（尚未关联汇水面存储）
    #[must_use]
    pub fn new(network: &'a N, geometry: &'a G, config: DelineationConfig) -> Self {
        Self {
            network,
            geometry,
            catchments: None,
            config,
        }
    }
}

impl<'a, N, S, G> Delineator<'a, N, S, G>
where
    N: NetworkGraph + JunctionLocator,
    S: CatchmentStore,
    G: GeometryOps,
{
    /// 关联汇水面存储
    #[must_use]
    pub fn with_catchments<S2: CatchmentStore>(self, store: &'a S2) -> Delineator<'a, N, S2, G> {
        Delineator {
            network: self.network,
            geometry: self.geometry,
            catchments: Some(store),
            config: self.config,
        }
    }

    /// 当前配置
    #[must_use]
    pub fn config(&self) -> &DelineationConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // 前置条件校验
    // ------------------------------------------------------------------

    /// 校验管网选择模式的前置条件
    #[must_use]
    pub fn validate_network_mode(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.config.inlet_class_id.is_none() {
            report.add_error("尚未设置入流口要素类别");
        }
        if self.catchments.is_none() {
            report.add_error("尚未计算入流口汇水面，请先完成预处理");
        }
        report
    }

    /// 校验地表点模式的前置条件
    #[must_use]
    pub fn validate_surface_mode<H: SurfaceHydrology>(&self, surface: &H) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.config.inlet_class_id.is_none() {
            report.add_error("尚未设置入流口要素类别");
        }
        if self.config.extend_overland && self.catchments.is_none() {
            report.add_error("尚未计算入流口汇水面，请先完成预处理");
        }
        if !surface.has_dataset() {
            report.add_error("所选输入图层缺少底层数据源，请修复图层");
        }

        let mut normalized = self.config.clone();
        if normalized.normalize_snap(surface.is_point_source()) {
            report.add_warning("捕捉设置无效（非点要素源或捕捉距离非正），已自动关闭捕捉");
        }
        report
    }

    fn emit_warnings(report: &ValidationReport) {
        for warning in &report.warnings {
            warn!("{warning}");
        }
    }

    fn store(&self) -> Result<&'a S, YsError> {
        self.catchments
            .ok_or_else(|| YsError::missing_config("catchments"))
    }

    // ------------------------------------------------------------------
    // 管网选择模式
    // ------------------------------------------------------------------

    /// 从选中的管网节点划分流域
    ///
    /// 每个种子产出一条结果记录；种子无可达入流口时整次调用
    /// 以 [`DelineationError::EmptyTrace`] 失败。
    pub fn delineate_junctions(
        &self,
        seeds: &[JunctionId],
    ) -> DelineationResult<BTreeMap<JunctionId, Watershed>> {
        let report = self.validate_network_mode();
        Self::emit_warnings(&report);
        report.into_result()?;

        if seeds.is_empty() {
            return Err(DelineationError::NoSeeds);
        }

        let store = self.store()?;
        let options = TraceOptions::from_config(&self.config)?;
        let tracer = UpstreamTracer::new(self.network, options);
        let merger = CatchmentMerger::new(store, self.geometry);
        let extender = OverlandExtender::new(self.network, store, self.geometry, options);

        info!("管网选择模式划分: {} 个种子节点", seeds.len());

        let mut watersheds = BTreeMap::new();
        for &seed in seeds {
            let inlets = tracer.trace(seed, true)?;
            if inlets.is_empty() {
                return Err(DelineationError::EmptyTrace { seed });
            }

            let mut shape = merger.merge(&inlets)?;
            if self.config.extend_overland {
                let mut used_inlets: HashSet<JunctionId> = inlets.iter().copied().collect();
                shape = extender.extend(shape, &mut used_inlets)?;
            }

            watersheds.insert(seed, self.network_record(seed, shape)?);
        }

        info!("管网选择模式划分完成: {} 个流域", watersheds.len());
        Ok(watersheds)
    }

    fn network_record(&self, seed: JunctionId, polygon: Polygon) -> DelineationResult<Watershed> {
        let area = self.geometry.area(&polygon)?;
        let source = self.network.junction_source(seed)?;
        let label = match &self.config.label_field {
            Some(field) => self.network.junction_attribute(seed, field)?,
            None => None,
        };
        Ok(Watershed {
            source: source.class_name,
            feature_id: source.feature_id,
            seed: Some(seed),
            polygon,
            area,
            label,
        })
    }

    // ------------------------------------------------------------------
    // 地表点模式
    // ------------------------------------------------------------------

    /// 从地表源要素划分流域
    ///
    /// 地表后端产出每要素的流域多边形；延伸从空的 `used_inlets`
    /// 出发，入流口归属完全来自边界内发现的排放口。
    pub fn delineate_surface<H: SurfaceHydrology>(
        &self,
        surface: &H,
    ) -> DelineationResult<BTreeMap<SourceId, Watershed>> {
        let report = self.validate_surface_mode(surface);
        Self::emit_warnings(&report);
        report.into_result()?;

        let mut effective = self.config.clone();
        effective.normalize_snap(surface.is_point_source());
        let snap = if effective.snap_to_pour_point {
            Some(SnapOptions {
                distance: effective.snap_distance,
            })
        } else {
            None
        };

        let shapes = surface.delineate(snap.as_ref())?;
        info!(
            "地表点模式划分: 图层 {}, {} 个源要素",
            surface.alias(),
            shapes.len()
        );

        let mut watersheds = BTreeMap::new();
        for (source_id, shape) in shapes {
            let mut shape = shape;
            if self.config.extend_overland {
                let store = self.store()?;
                let options = TraceOptions::from_config(&self.config)?;
                let extender =
                    OverlandExtender::new(self.network, store, self.geometry, options);
                let mut used_inlets = HashSet::new();
                shape = extender.extend(shape, &mut used_inlets)?;
            }

            let area = self.geometry.area(&shape)?;
            let label = match &self.config.label_field {
                Some(field) => surface.label_value(source_id, field)?,
                None => None,
            };
            watersheds.insert(
                source_id,
                Watershed {
                    source: surface.alias().to_string(),
                    feature_id: source_id,
                    seed: None,
                    polygon: shape,
                    area,
                    label,
                },
            );
        }

        info!("地表点模式划分完成: {} 个流域", watersheds.len());
        Ok(watersheds)
    }
}

// ============================================================================
// 测试
// ============================================================================
