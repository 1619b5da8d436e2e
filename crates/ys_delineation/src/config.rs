// crates/ys_delineation/src/config.rs

//! 划分配置
//!
//! 默认值沿用既有工程实践：追踪遇到停用要素即停止、
//! 地表延伸开启、地表点捕捉开启且捕捉距离10米。
//!
//! # 示例
//!
//! ```
//! use ys_delineation::config::DelineationConfig;
//!
//! let config = DelineationConfig {
//!     inlet_class_id: Some(3),
//!     ..DelineationConfig::default()
//! };
//! assert!(config.extend_overland);
//! assert!((config.snap_distance - 10.0).abs() < 1e-10);
//! ```

use serde::{Deserialize, Serialize};
use ys_foundation::error::{YsError, YsResult};

// ============================================================================
// 划分配置
// ============================================================================

/// 流域划分配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelineationConfig {
    /// 入流口要素类别ID（必填）
    pub inlet_class_id: Option<i32>,

    /// 是否把上游管端（无来水管段的节点）计入入流口
    pub include_upstream_pipe_ends: bool,

    /// 是否把下游管端（无去水管段的节点）从入流口中排除
    pub exclude_downstream_pipe_ends: bool,

    /// 追踪是否在停用要素处停止
    pub exclude_disabled: bool,

    /// 是否把流域沿地表延伸到排放口并继续向上游追踪
    pub extend_overland: bool,

    /// 地表点模式下是否把源点捕捉到汇流低点
    pub snap_to_pour_point: bool,

    /// 捕捉距离上限（米）
    pub snap_distance: f64,

    /// 输出标注字段名（从源要素复制）
    pub label_field: Option<String>,
}

impl Default for DelineationConfig {
    fn default() -> Self {
        Self {
            inlet_class_id: None,
            include_upstream_pipe_ends: false,
            exclude_downstream_pipe_ends: false,
            exclude_disabled: true,
            extend_overland: true,
            snap_to_pour_point: true,
            snap_distance: 10.0,
            label_field: None,
        }
    }
}

impl DelineationConfig {
    /// 规范化捕捉设置
    ///
    /// 捕捉开启但源不是点要素、或捕捉距离非正时，关闭捕捉并
    /// 把距离归零。返回是否发生了修正。
    pub fn normalize_snap(&mut self, point_source: bool) -> bool {
        if self.snap_to_pour_point && (!point_source || self.snap_distance <= 0.0) {
            self.snap_to_pour_point = false;
            self.snap_distance = 0.0;
            return true;
        }
        false
    }
}

// ============================================================================
// 追踪选项
// ============================================================================

/// 上游追踪选项
///
/// 划分配置中追踪器实际消费的子集。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// 入流口要素类别ID
    pub inlet_class_id: i32,
    /// 是否计入上游管端
    pub include_upstream_pipe_ends: bool,
    /// 是否排除下游管端
    pub exclude_downstream_pipe_ends: bool,
    /// 追踪是否在停用要素处停止
    pub exclude_disabled: bool,
}

impl TraceOptions {
    /// 从划分配置提取追踪选项
    ///
    /// 入流口类别未配置时报缺少配置错误。
    pub fn from_config(config: &DelineationConfig) -> YsResult<Self> {
        let inlet_class_id = config
            .inlet_class_id
            .ok_or_else(|| YsError::missing_config("inlet_class_id"))?;
        Ok(Self {
            inlet_class_id,
            include_upstream_pipe_ends: config.include_upstream_pipe_ends,
            exclude_downstream_pipe_ends: config.exclude_downstream_pipe_ends,
            exclude_disabled: config.exclude_disabled,
        })
    }
}

// ============================================================================
// 捕捉选项
// ============================================================================

/// 地表点捕捉选项
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapOptions {
    /// 捕捉距离上限（米）
    pub distance: f64,
}

// ============================================================================
// 测试
// ============================================================================
