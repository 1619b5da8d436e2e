// crates/ys_geo/src/crs.rs

//! 轻量坐标参考系统标签
//!
//! 本核心不做投影换算，只负责把外部汇水面数据的坐标系标识
//! 原样携带到输出多边形上。
//!
//! # 示例
//!
//! ```
//! use ys_geo::crs::Crs;
//!
//! let crs = Crs::epsg(4547); // CGCS2000 / 3-degree Gauss-Kruger CM 114E
//! assert!(!crs.is_unknown());
//! assert_eq!(crs.to_string(), "EPSG:4547");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// 坐标参考系统标签
///
/// 未设置坐标系的数据默认标记为 `Unknown`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crs {
    /// 未知坐标系
    #[default]
    Unknown,
    /// EPSG 代码（如 4326 = WGS84）
    Epsg(u32),
    /// 自定义命名坐标系（WKT 或工程局部坐标系名称）
    Named(String),
}

impl Crs {
    /// 从 EPSG 代码创建
    #[must_use]
    pub const fn epsg(code: u32) -> Self {
        Self::Epsg(code)
    }

    /// 从名称创建
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// 是否为未知坐标系
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// 合并两个坐标系标签，优先保留已知的一方
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self.is_unknown() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "(Unknown)"),
            Self::Epsg(code) => write!(f, "EPSG:{code}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
