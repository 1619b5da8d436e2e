// crates/ys_foundation/src/eid.rs

//! 强类型网络元素ID
//!
//! 使用泛型 `Eid<T>` 在编译期区分节点ID与管段ID。
//!
//! # 设计目标
//!
//! 1. **类型安全**: 节点ID不能误用为管段ID，反之亦然
//! 2. **零开销**: release 模式下与 u32 完全相同的性能
//! 3. **稳定身份**: 网络元素在本核心的生命周期内不会被创建或销毁，
//!    因此不需要代际或墓碑机制
//!
//! # 示例
//!
//! ```
//! use ys_foundation::eid::{junction, JunctionId};
//!
//! let seed: JunctionId = junction(42);
//! assert_eq!(seed.raw(), 42);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

// ============================================================================
// 标记类型 (Phantom Types)
// ============================================================================

/// 节点ID标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JunctionTag;

/// 管段ID标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeTag;

// ============================================================================
// 泛型元素ID
// ============================================================================

/// 网络元素ID
///
/// 使用 Phantom Type `T` 区分不同类型的元素，避免误用。
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Eid<T> {
    value: u32,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

// 手动实现 Copy 和 Clone，因为 PhantomData<T> 的 Copy 需要 T: Copy
impl<T> Copy for Eid<T> {}

impl<T> Clone for Eid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eid<T> {
    /// 创建新ID
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// 获取原始ID值
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.value
    }

    /// 获取ID值（usize）
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.value as usize
    }
}

// ============================================================================
// Trait 实现
// ============================================================================

impl<T> PartialEq for Eid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Eid<T> {}

impl<T> PartialOrd for Eid<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Eid<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Eid<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Eid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Eid({})", self.value)
    }
}

impl<T> fmt::Display for Eid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<u32> for Eid<T> {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<T> From<Eid<T>> for u32 {
    #[inline]
    fn from(eid: Eid<T>) -> u32 {
        eid.raw()
    }
}

// ============================================================================
// 类型别名
// ============================================================================

/// 节点（检查井/雨水口/排放口等）的元素ID
pub type JunctionId = Eid<JunctionTag>;

/// 管段的元素ID
pub type EdgeId = Eid<EdgeTag>;

// ============================================================================
// 便捷函数
// ============================================================================

/// 创建节点ID
#[inline]
#[must_use]
pub const fn junction(value: u32) -> JunctionId {
    JunctionId::new(value)
}

/// 创建管段ID
#[inline]
#[must_use]
pub const fn edge(value: u32) -> EdgeId {
    EdgeId::new(value)
}

// ============================================================================
// 测试
// ============================================================================
