// crates/ys_foundation/src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `YsError` 枚举和 `YsResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，流域划分相关错误在 ys_delineation 中扩展
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **立即失败**: 后端错误不做重试，直接向调用方传播
//!
//! # 示例
//!
//! ```
//! use ys_foundation::error::{YsError, YsResult};
//!
//! fn read_setup() -> YsResult<()> {
//!     Err(YsError::missing_config("inlet_class_id"))
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type YsResult<T> = Result<T, YsError>;

/// YuShui 错误类型
///
/// 核心错误类型，用于整个项目。流域划分相关的错误在 `ys_delineation` 中扩展。
#[derive(Error, Debug)]
pub enum YsError {
    /// 配置错误
    #[error("配置错误: {message}")]
    Config {
        /// 具体错误信息
        message: String,
    },

    /// 缺少配置项
    #[error("缺少必需的配置项: {key}")]
    MissingConfig {
        /// 配置键名
        key: String,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 资源未找到
    #[error("资源未找到: {resource}")]
    NotFound {
        /// 资源名称
        resource: String,
    },

    /// 后端错误（图/几何/汇水面存储）
    ///
    /// 不做重试，包装后立即向调用方传播。
    #[error("后端错误: {context}: {message}")]
    Backend {
        /// 出错的后端名称
        context: String,
        /// 底层错误描述
        message: String,
    },

    /// 校验失败
    #[error("校验失败: {0}")]
    Validation(String),

    /// 序列化错误
    #[error("序列化错误: {message}")]
    Serialization {
        /// 序列化失败原因
        message: String,
    },

    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    /// 内部错误
    #[error("内部错误: {message}")]
    Internal {
        /// 内部错误描述
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl YsError {
    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// 缺少配置
    pub fn missing_config(key: impl Into<String>) -> Self {
        Self::MissingConfig { key: key.into() }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 资源未找到
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// 后端错误
    pub fn backend(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Backend {
            context: context.into(),
            message: message.into(),
        }
    }

    /// 校验失败
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// 序列化错误
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// IO 错误
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// 内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// ========================================================================
// 标准库错误转换
// ========================================================================

impl From<std::io::Error> for YsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ========================================================================
// 断言宏
// ========================================================================

/// 条件不成立时返回给定错误
///
/// # 示例
///
/// ```
/// use ys_foundation::{ensure, error::{YsError, YsResult}};
///
/// fn check(count: usize) -> YsResult<()> {
///     ensure!(count > 0, YsError::invalid_input("数量必须大于零"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// 从 `Option` 中取值，为 `None` 时返回给定错误
///
/// # 示例
///
/// ```
/// use ys_foundation::{require, error::{YsError, YsResult}};
///
/// fn first(values: &[i32]) -> YsResult<i32> {
///     let v = require!(values.first(), YsError::not_found("values"));
///     Ok(*v)
/// }
/// ```
#[macro_export]
macro_rules! require {
    ($opt:expr, $err:expr) => {
        match $opt {
            Some(value) => value,
            None => return Err($err),
        }
    };
}

// ========================================================================
// 测试
// ========================================================================
