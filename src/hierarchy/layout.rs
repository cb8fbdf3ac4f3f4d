//! Org-chart layout: levels, coordinates and validated edges.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::models::{Edge, LayoutNode, OrgChartLayout, Position};

use super::PositionIndex;

/// Lays positions out as a top-down tree.
///
/// Each level is a horizontal band `y = level * y_spacing`; siblings within a
/// level are spaced `x_spacing` apart and centered on `x = 0`.
///
/// # Example
///
/// ```
/// use people_analytics::hierarchy::HierarchyLayoutBuilder;
/// use people_analytics::models::Position;
///
/// let positions = vec![
///     Position::new("root", "Root", None),
///     Position::new("c1", "Child 1", Some("root")),
///     Position::new("c2", "Child 2", Some("root")),
/// ];
/// let layout = HierarchyLayoutBuilder::default().build(&positions);
///
/// assert_eq!(layout.node("c1").unwrap().x, -150.0);
/// assert_eq!(layout.node("c2").unwrap().x, 150.0);
/// assert_eq!(layout.edges.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyLayoutBuilder {
    config: LayoutConfig,
}

impl HierarchyLayoutBuilder {
    /// Creates a builder with the given spacing.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Returns the spacing in use.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Builds the layout for `positions`.
    ///
    /// Never fails: cycles and dangling parents make the affected positions
    /// roots, and edges to parents missing from the input are dropped.
    pub fn build(&self, positions: &[Position]) -> OrgChartLayout {
        let index = PositionIndex::new(positions);

        let mut buckets: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        let mut cycle_hits = 0usize;
        for (i, walk) in index.walk_all().into_iter().enumerate() {
            if walk.hit_cycle {
                cycle_hits += 1;
            }
            buckets.entry(walk.level).or_default().push(i);
        }

        if cycle_hits > 0 {
            warn!(
                positions = cycle_hits,
                "Parent cycle found; cycle members laid out as roots"
            );
        }

        let mut nodes = Vec::with_capacity(positions.len());
        for (&level, members) in &buckets {
            let offset = (members.len() - 1) as f64 / 2.0;
            for (slot, &i) in members.iter().enumerate() {
                nodes.push(LayoutNode {
                    position: positions[i].clone(),
                    level,
                    x: (slot as f64 - offset) * self.config.x_spacing,
                    y: level as f64 * self.config.y_spacing,
                });
            }
        }

        let edges = build_edges(positions, &index);

        debug!(
            positions = positions.len(),
            levels = buckets.len(),
            edges = edges.len(),
            "Built org chart layout"
        );

        OrgChartLayout { nodes, edges }
    }
}

/// One edge per position whose parent is present, duplicates collapsed.
fn build_edges(positions: &[Position], index: &PositionIndex<'_>) -> Vec<Edge> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut edges = Vec::new();

    for position in positions {
        let Some(parent) = position.parent_ref() else {
            continue;
        };

        if !index.contains(parent) {
            debug!(
                position = %position.id,
                parent = %parent,
                "Dropping edge to unknown parent"
            );
            continue;
        }

        if seen.insert((parent, position.id.as_str())) {
            edges.push(Edge::new(parent, &position.id));
        }
    }

    edges
}

/// Builds a layout with the default spacing.
pub fn build_layout(positions: &[Position]) -> OrgChartLayout {
    HierarchyLayoutBuilder::default().build(positions)
}
