// crates/ys_delineation/src/snapshot.rs

//! 运行设置快照
//!
//! 每次划分完成后把本次运行的配置写到结果旁边，便于事后核查
//! 结果是用什么设置算出来的。以 JSON 持久化。
//!
//! # 示例
//!
//! ```
//! use ys_delineation::config::DelineationConfig;
//! use ys_delineation::snapshot::SettingsSnapshot;
//!
//! let config = DelineationConfig {
//!     inlet_class_id: Some(3),
//!     ..DelineationConfig::default()
//! };
//! let snapshot = SettingsSnapshot::for_network_selection(&config);
//! let json = snapshot.to_json().unwrap();
//! let back = SettingsSnapshot::from_json(&json).unwrap();
//! assert_eq!(back, snapshot);
//! ```

use crate::config::DelineationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use ys_foundation::error::{YsError, YsResult};

/// 管网选择模式的来源描述
const SELECTED_NETWORK_NODES: &str = "(Selected Network Nodes)";

/// 未配置标注字段的描述
const NO_LABEL_FIELD: &str = "(None)";

/// 运行设置快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// 排放口来源（选中管网节点或地表源图层别名）
    pub outlet_source: String,
    /// 标注字段名
    pub outlet_label_field: String,
    /// 划分配置
    pub config: DelineationConfig,
}

impl SettingsSnapshot {
    /// 管网选择模式的快照
    #[must_use]
    pub fn for_network_selection(config: &DelineationConfig) -> Self {
        Self {
            outlet_source: SELECTED_NETWORK_NODES.to_string(),
            outlet_label_field: Self::label_field(config),
            config: config.clone(),
        }
    }

    /// 地表点模式的快照
    #[must_use]
    pub fn for_surface_source(config: &DelineationConfig, alias: impl Into<String>) -> Self {
        Self {
            outlet_source: alias.into(),
            outlet_label_field: Self::label_field(config),
            config: config.clone(),
        }
    }

    fn label_field(config: &DelineationConfig) -> String {
        config
            .label_field
            .clone()
            .unwrap_or_else(|| NO_LABEL_FIELD.to_string())
    }

    /// 序列化为 JSON 文本
    pub fn to_json(&self) -> YsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| YsError::serialization(e.to_string()))
    }

    /// 从 JSON 文本解析
    pub fn from_json(json: &str) -> YsResult<Self> {
        serde_json::from_str(json).map_err(|e| YsError::serialization(e.to_string()))
    }

    /// 写入文件
    pub fn save(&self, path: &Path) -> YsResult<()> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 从文件读取
    pub fn load(path: &Path) -> YsResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

// ============================================================================
// 测试
// ============================================================================
