// crates/ys_geo/src/polygon.rs

//! 闭合环与多部件多边形
//!
//! 汇水面多边形来自栅格流域划分结果，彼此内部不重叠（栅格流域
//! 是对地表的一个剖分）。因此多部件多边形的面积取各部件面积之和，
//! 合并运算以部件拼接实现；需要溶解共享边界的调用方可以通过
//! [`crate::ops::GeometryOps`] 接入完整的计算几何后端。
//!
//! # 示例
//!
//! ```
//! use ys_geo::geometry::Point2D;
//! use ys_geo::polygon::Polygon;
//!
//! let a = Polygon::rectangle(Point2D::new(0.0, 0.0), Point2D::new(2.0, 2.0));
//! let b = Polygon::rectangle(Point2D::new(2.0, 0.0), Point2D::new(4.0, 3.0));
//!
//! let merged = a.union(&b);
//! assert!((merged.area() - 10.0).abs() < 1e-10);
//! ```

use crate::crs::Crs;
use crate::geometry::Point2D;
use crate::spatial_index::BoundingBox;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// 闭合环
// ============================================================================

/// 闭合环
///
/// 顶点序列隐式闭合（首尾顶点不重复存储）。顶点数少于3的环
/// 视为退化环，面积为零且不包含任何点。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    points: Vec<Point2D>,
}

impl Ring {
    /// 创建闭合环
    ///
    /// 若输入首尾顶点重复（显式闭合），自动去掉末尾重复点。
    #[must_use]
    pub fn new(mut points: Vec<Point2D>) -> Self {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }

    /// 顶点序列
    #[must_use]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// 顶点数量
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 是否为退化环（顶点数少于3）
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// 鞋带公式计算带符号面积
    ///
    /// 逆时针为正，顺时针为负。
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }

        let n = self.points.len();
        let mut area = 0.0;

        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }

        area / 2.0
    }

    /// 面积（绝对值）
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// 射线法判断点是否在环内（奇偶规则）
    #[must_use]
    pub fn contains_point(&self, point: &Point2D) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let mut inside = false;
        let mut j = self.points.len() - 1;
        for i in 0..self.points.len() {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > point.y) != (pj.y > point.y)
                && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// 计算外包矩形
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        Some(BoundingBox::from_corners(min, max))
    }

    /// 规范化：逆时针定向，并旋转到以字典序最小顶点开头
    ///
    /// 同一几何形状的不同顶点表达经规范化后逐点相等，
    /// 用于与起始顶点和绕向无关的拓扑比较。
    #[must_use]
    pub fn normalized(&self) -> Self {
        if self.points.is_empty() {
            return self.clone();
        }

        let mut points = self.points.clone();
        if self.signed_area() < 0.0 {
            points.reverse();
        }

        let start = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| cmp_points(a, b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        points.rotate_left(start);

        Self { points }
    }
}

/// 顶点字典序比较（先X后Y）
fn cmp_points(a: &Point2D, b: &Point2D) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

// ============================================================================
// 多部件多边形
// ============================================================================

/// 多部件平面多边形
///
/// 空多边形是合法取值（零个部件，面积为零），携带可选的坐标系标签。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    parts: Vec<Ring>,
    crs: Crs,
}

impl Polygon {
    /// 创建空多边形
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            crs: Crs::Unknown,
        }
    }

    /// 从单个环创建
    #[must_use]
    pub fn from_ring(ring: Ring) -> Self {
        Self {
            parts: vec![ring],
            crs: Crs::Unknown,
        }
    }

    /// 从部件列表创建
    #[must_use]
    pub fn from_parts(parts: Vec<Ring>) -> Self {
        Self {
            parts,
            crs: Crs::Unknown,
        }
    }

    /// 创建轴对齐矩形（常用于测试数据与外包区域）
    #[must_use]
    pub fn rectangle(min: Point2D, max: Point2D) -> Self {
        Self::from_ring(Ring::new(vec![
            Point2D::new(min.x, min.y),
            Point2D::new(max.x, min.y),
            Point2D::new(max.x, max.y),
            Point2D::new(min.x, max.y),
        ]))
    }

    /// 替换坐标系标签
    #[must_use]
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = crs;
        self
    }

    /// 坐标系标签
    #[must_use]
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    /// 部件列表
    #[must_use]
    pub fn parts(&self) -> &[Ring] {
        &self.parts
    }

    /// 部件数量
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// 是否为空多边形
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// 总面积（各部件面积之和）
    #[must_use]
    pub fn area(&self) -> f64 {
        self.parts.iter().map(Ring::area).sum()
    }

    /// 判断点是否在多边形内（任一部件包含即为包含）
    #[must_use]
    pub fn contains_point(&self, point: &Point2D) -> bool {
        self.parts.iter().any(|ring| ring.contains_point(point))
    }

    /// 计算外包矩形
    #[must_use]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut result: Option<BoundingBox> = None;
        for ring in &self.parts {
            if let Some(bbox) = ring.bounding_box() {
                result = Some(match result {
                    Some(acc) => acc.merge(&bbox),
                    None => bbox,
                });
            }
        }
        result
    }

    /// 合并两个多边形
    ///
    /// 以部件拼接实现，跳过与已有部件几何相同的部件；
    /// 坐标系标签优先保留已知的一方。
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut parts = self.parts.clone();
        let mut seen: Vec<Ring> = parts.iter().map(Ring::normalized).collect();

        for ring in &other.parts {
            let candidate = ring.normalized();
            if !seen.contains(&candidate) {
                parts.push(ring.clone());
                seen.push(candidate);
            }
        }

        Self {
            parts,
            crs: self.crs.clone().or(other.crs.clone()),
        }
    }

    /// 规范化：各部件规范化后按外包矩形与顶点字典序排序
    ///
    /// 用于与部件顺序无关的拓扑比较。
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut parts: Vec<Ring> = self.parts.iter().map(Ring::normalized).collect();
        parts.sort_by(|a, b| {
            let (pa, pb) = (a.points(), b.points());
            for (va, vb) in pa.iter().zip(pb.iter()) {
                let ord = cmp_points(va, vb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            pa.len().cmp(&pb.len())
        });
        Self {
            parts,
            crs: self.crs.clone(),
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
