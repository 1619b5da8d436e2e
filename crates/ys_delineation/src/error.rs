// crates/ys_delineation/src/error.rs

//! 划分错误类型
//!
//! 在基础层 `YsError` 之上扩展流域划分特有的错误。
//! 每个种子的划分要么整体成功要么整体失败，不输出部分结果。

use thiserror::Error;
use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsError;

/// 划分结果类型
pub type DelineationResult<T> = Result<T, DelineationError>;

/// 流域划分错误
#[derive(Debug, Error)]
pub enum DelineationError {
    /// 基础层错误（配置、校验、后端）
    #[error(transparent)]
    Core(#[from] YsError),

    /// 种子节点未追踪到任何入流口
    ///
    /// 通常意味着所选节点不在排水管网的汇流范围内，
    /// 作为显式错误反馈而不是静默输出空流域。
    #[error("种子节点 {seed} 的上游追踪未发现任何入流口")]
    EmptyTrace {
        /// 种子节点元素ID
        seed: JunctionId,
    },

    /// 管网选择模式下种子列表为空
    #[error("指定排水管网中没有选中的节点")]
    NoSeeds,
}

// ============================================================================
// 测试
// ============================================================================
