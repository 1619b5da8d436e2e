// crates/ys_network/src/memory.rs

//! 内存管网参考实现
//!
//! `NetworkBuilder` 一次性构建只读的 `InMemoryNetwork`；
//! 构建时校验拓扑引用并建立邻接表与节点空间索引。
//!
//! # 示例
//!
//! ```
//! use ys_foundation::eid::{edge, junction};
//! use ys_geo::Point2D;
//! use ys_network::memory::NetworkBuilder;
//! use ys_network::model::{Edge, Junction};
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_class(1, "检查井");
//! builder.add_junction(Junction::new(junction(1), 1, Point2D::new(0.0, 0.0)));
//! builder.add_junction(Junction::new(junction(2), 1, Point2D::new(5.0, 0.0)));
//! builder.add_edge(Edge::new(edge(10), junction(1), junction(2)));
//!
//! let network = builder.build().unwrap();
//! assert_eq!(network.junction_count(), 2);
//! ```

use crate::model::{AdjacentEdge, AttrValue, Edge, EdgeInfo, Junction, JunctionInfo, SourceRef};
use crate::traits::{JunctionLocator, NetworkGraph};
use std::collections::BTreeMap;
use ys_foundation::eid::{EdgeId, JunctionId};
use ys_foundation::ensure;
use ys_foundation::error::{YsError, YsResult};
use ys_geo::{Polygon, SpatialIndex};

// ============================================================================
// 构建器
// ============================================================================

/// 管网构建器
#[derive(Default)]
pub struct NetworkBuilder {
    junctions: Vec<Junction>,
    edges: Vec<Edge>,
    class_names: BTreeMap<i32, String>,
}

impl NetworkBuilder {
    /// 创建空构建器
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记要素类别名称
    pub fn add_class(&mut self, class_id: i32, name: impl Into<String>) -> &mut Self {
        self.class_names.insert(class_id, name.into());
        self
    }

    /// 添加节点
    pub fn add_junction(&mut self, junction: Junction) -> &mut Self {
        self.junctions.push(junction);
        self
    }

    /// 添加管段
    pub fn add_edge(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// 构建只读管网
    ///
    /// 校验元素ID唯一且管段两端节点存在。
    pub fn build(self) -> YsResult<InMemoryNetwork> {
        let mut junctions = BTreeMap::new();
        for junction in self.junctions {
            let eid = junction.eid;
            ensure!(
                junctions.insert(eid, junction).is_none(),
                YsError::invalid_input(format!("节点元素ID重复: {eid}"))
            );
        }

        let mut edges = BTreeMap::new();
        let mut adjacency: BTreeMap<JunctionId, Vec<EdgeId>> = BTreeMap::new();
        for edge in self.edges {
            let eid = edge.eid;
            ensure!(
                junctions.contains_key(&edge.from),
                YsError::invalid_input(format!("管段 {eid} 引用了不存在的上游节点 {}", edge.from))
            );
            ensure!(
                junctions.contains_key(&edge.to),
                YsError::invalid_input(format!("管段 {eid} 引用了不存在的下游节点 {}", edge.to))
            );

            adjacency.entry(edge.from).or_default().push(eid);
            if edge.to != edge.from {
                adjacency.entry(edge.to).or_default().push(eid);
            }
            ensure!(
                edges.insert(eid, edge).is_none(),
                YsError::invalid_input(format!("管段元素ID重复: {eid}"))
            );
        }

        let index = SpatialIndex::bulk_load(
            junctions
                .values()
                .map(|j| (j.location, j.eid))
                .collect::<Vec<_>>(),
        );

        Ok(InMemoryNetwork {
            junctions,
            edges,
            adjacency,
            class_names: self.class_names,
            index,
        })
    }
}

// ============================================================================
// 内存管网
// ============================================================================

/// 内存管网
///
/// 构建后只读；同时实现 [`NetworkGraph`] 与 [`JunctionLocator`]。
pub struct InMemoryNetwork {
    junctions: BTreeMap<JunctionId, Junction>,
    edges: BTreeMap<EdgeId, Edge>,
    adjacency: BTreeMap<JunctionId, Vec<EdgeId>>,
    class_names: BTreeMap<i32, String>,
    index: SpatialIndex<JunctionId>,
}

impl InMemoryNetwork {
    /// 节点数量
    #[must_use]
    pub fn junction_count(&self) -> usize {
        self.junctions.len()
    }

    /// 管段数量
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按ID取节点
    #[must_use]
    pub fn junction(&self, eid: JunctionId) -> Option<&Junction> {
        self.junctions.get(&eid)
    }

    /// 按ID取管段
    #[must_use]
    pub fn edge(&self, eid: EdgeId) -> Option<&Edge> {
        self.edges.get(&eid)
    }

    /// 迭代全部节点
    pub fn junctions(&self) -> impl Iterator<Item = &Junction> {
        self.junctions.values()
    }

    fn get_junction(&self, eid: JunctionId) -> YsResult<&Junction> {
        self.junctions
            .get(&eid)
            .ok_or_else(|| YsError::not_found(format!("节点元素ID {eid}")))
    }

    fn get_edge(&self, eid: EdgeId) -> YsResult<&Edge> {
        self.edges
            .get(&eid)
            .ok_or_else(|| YsError::not_found(format!("管段元素ID {eid}")))
    }
}

impl NetworkGraph for InMemoryNetwork {
    fn adjacent_edges(&self, junction: JunctionId) -> YsResult<Vec<AdjacentEdge>> {
        self.get_junction(junction)?;

        let Some(edge_ids) = self.adjacency.get(&junction) else {
            return Ok(Vec::new());
        };

        let mut adjacent = Vec::with_capacity(edge_ids.len());
        for &eid in edge_ids {
            let edge = self.get_edge(eid)?;
            let towards = edge.to == junction;
            adjacent.push(AdjacentEdge {
                edge: eid,
                far_junction: if towards { edge.from } else { edge.to },
                towards_junction: towards,
                enabled: edge.enabled,
            });
        }
        Ok(adjacent)
    }

    fn junction_info(&self, junction: JunctionId) -> YsResult<JunctionInfo> {
        let j = self.get_junction(junction)?;
        Ok(JunctionInfo {
            class_id: j.class_id,
            enabled: j.enabled,
        })
    }

    fn edge_info(&self, edge: EdgeId) -> YsResult<EdgeInfo> {
        let e = self.get_edge(edge)?;
        Ok(EdgeInfo { enabled: e.enabled })
    }

    fn junction_source(&self, junction: JunctionId) -> YsResult<SourceRef> {
        let j = self.get_junction(junction)?;
        let class_name = self
            .class_names
            .get(&j.class_id)
            .cloned()
            .unwrap_or_else(|| format!("class-{}", j.class_id));
        Ok(SourceRef {
            class_id: j.class_id,
            class_name,
            feature_id: j.feature_id,
        })
    }

    fn junction_attribute(
        &self,
        junction: JunctionId,
        field: &str,
    ) -> YsResult<Option<AttrValue>> {
        let j = self.get_junction(junction)?;
        Ok(j.attributes.get(field).cloned())
    }
}

impl JunctionLocator for InMemoryNetwork {
    fn junctions_contained_in(&self, boundary: &Polygon) -> YsResult<Vec<JunctionId>> {
        let mut found: Vec<JunctionId> = self
            .index
            .query_polygon(boundary)
            .into_iter()
            .map(|(_, eid)| *eid)
            .collect();
        found.sort_unstable();
        Ok(found)
    }
}

// ============================================================================
// 测试
// ============================================================================
