// crates/ys_foundation/src/validation.rs

//! 运行前校验报告
//!
//! 在执行任何追踪之前收集所有前置条件问题，一次性反馈给调用方。
//!
//! # 示例
//!
//! ```
//! use ys_foundation::validation::ValidationReport;
//!
//! let mut report = ValidationReport::new();
//! report.add_error("尚未设置入流口类别");
//! report.add_warning("捕捉距离无效，已自动关闭捕捉");
//!
//! assert!(report.has_errors());
//! assert!(report.into_result().is_err());
//! ```

use crate::error::{YsError, YsResult};

/// 校验报告
///
/// 错误使整个操作失败；警告仅供记录，不阻止执行。
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// 错误列表
    pub errors: Vec<String>,
    /// 警告列表
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// 创建空的校验报告
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加错误
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// 添加警告
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// 是否有错误
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 是否有警告
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// 是否通过（无错误）
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// 转换为结果
    ///
    /// 有错误时返回 `YsError::Validation`，错误信息以分号连接。
    pub fn into_result(self) -> YsResult<()> {
        if self.has_errors() {
            Err(YsError::validation(self.errors.join("; ")))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
