// crates/ys_foundation/src/lib.rs

//! YuShui Foundation Layer
//!
//! 零依赖基础层，提供整个项目的基础抽象。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型 `YsError` / `YsResult`
//! - [`eid`]: 强类型网络元素ID（节点/管段）
//! - [`validation`]: 运行前校验报告
//!
//! # 设计原则
//!
//! 1. **最小依赖**: 仅依赖 serde 和 thiserror
//! 2. **类型安全**: 编译期区分节点ID与管段ID
//! 3. **失败显式**: 所有可失败操作返回 `YsResult`，不使用 panic
//!
//! # 示例
//!
//! ```
//! use ys_foundation::{
//!     eid::{junction, JunctionId},
//!     error::{YsError, YsResult},
//! };
//!
//! fn find_seed(seeds: &[JunctionId]) -> YsResult<JunctionId> {
//!     seeds
//!         .first()
//!         .copied()
//!         .ok_or_else(|| YsError::invalid_input("种子节点列表为空"))
//! }
//!
//! assert!(find_seed(&[]).is_err());
//! assert_eq!(find_seed(&[junction(3)]).unwrap(), junction(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod eid;
pub mod error;
pub mod validation;

// 重导出常用类型
pub use eid::{EdgeId, Eid, JunctionId};
pub use error::{YsError, YsResult};
pub use validation::ValidationReport;

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::eid::{edge, junction, EdgeId, Eid, JunctionId};
    pub use crate::error::{YsError, YsResult};
    pub use crate::validation::ValidationReport;
    pub use crate::{ensure, require};
}
