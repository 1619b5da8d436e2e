// crates/ys_delineation/src/merge.rs

//! 汇水面合并器
//!
//! 把一组入流口的预计算汇水面合并为一个流域多边形。
//!
//! 合并顺序采用平衡两两合并：每轮把相邻下标的多边形两两合并，
//! 奇数个时末尾一个原样进入下一轮，直到只剩一个。相比顺序
//! 累积合并只需 O(log n) 轮，迭代合并的几何复杂度增长更慢。

use crate::catchments::CatchmentStore;
use ys_foundation::eid::JunctionId;
use ys_foundation::error::YsResult;
use ys_geo::ops::GeometryOps;
use ys_geo::Polygon;

/// 汇水面合并器
pub struct CatchmentMerger<'a, S: CatchmentStore + ?Sized, G: GeometryOps> {
    store: &'a S,
    geometry: &'a G,
}

impl<'a, S: CatchmentStore + ?Sized, G: GeometryOps> CatchmentMerger<'a, S, G> {
    /// 创建合并器
    #[must_use]
    pub fn new(store: &'a S, geometry: &'a G) -> Self {
        Self { store, geometry }
    }

    /// 合并一组入流口的汇水面
    ///
    /// - 入流口ID排序去重后对存储做一次全量扫描，二分匹配命中
    ///   的记录取独立拷贝
    /// - 无匹配（含空输入）返回空多边形，不报错
    /// - 合并结果带上存储的坐标系标签；仅一条匹配时直接返回，
    ///   不执行合并
    pub fn merge(&self, inlets: &[JunctionId]) -> YsResult<Polygon> {
        if inlets.is_empty() {
            return Ok(Polygon::empty());
        }

        let mut sorted: Vec<JunctionId> = inlets.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let mut shapes: Vec<Polygon> = Vec::with_capacity(sorted.len());
        self.store.scan(&mut |inlet, shape| {
            if sorted.binary_search(&inlet).is_ok() {
                shapes.push(shape.clone());
            }
        })?;

        // 平衡两两合并
        while shapes.len() > 1 {
            let mut reduced = Vec::with_capacity(shapes.len() / 2 + 1);
            for pair in shapes.chunks(2) {
                match pair {
                    [a, b] => reduced.push(self.geometry.union(a, b)?),
                    [last] => reduced.push(last.clone()),
                    _ => unreachable!(),
                }
            }
            shapes = reduced;
        }

        match shapes.pop() {
            Some(shape) => Ok(shape.with_crs(self.store.crs())),
            None => Ok(Polygon::empty()),
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
