//! Org-chart position model and the layout structures derived from it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A node in the organizational hierarchy (a job or role).
///
/// # Example
///
/// ```
/// use people_analytics::models::Position;
///
/// let json = r#"{"id": "cfo", "name": "CFO", "parentId": "ceo"}"#;
/// let position: Position = serde_json::from_str(json).unwrap();
/// assert_eq!(position.parent_ref(), Some("ceo"));
/// assert!(position.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Unique identifier of the position.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Identifier of the parent position, if any.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Identifier of the owning department, if any.
    #[serde(default)]
    pub department_id: Option<String>,
    /// Whether the position is part of the leadership group.
    #[serde(default)]
    pub is_leadership: bool,
    /// Whether the position is currently in use.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Position {
    /// Creates an active, non-leadership position.
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: parent_id.map(str::to_string),
            department_id: None,
            is_leadership: false,
            is_active: true,
        }
    }

    /// Returns the parent id, treating blank values and the literal `"null"`
    /// as no parent.
    pub fn parent_ref(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty() && !p.eq_ignore_ascii_case("null"))
    }
}

/// A position placed on the org-chart canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// The original position record.
    #[serde(flatten)]
    pub position: Position,
    /// Hierarchy depth, 0 for roots.
    pub level: usize,
    /// Horizontal coordinate, centered on 0 within each level.
    pub x: f64,
    /// Vertical coordinate, `level * y_spacing`.
    pub y: f64,
}

/// A directed parent-to-child link between two laid-out positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Stable edge key, `e{source}-{target}`.
    pub id: String,
    /// Id of the parent position.
    pub source: String,
    /// Id of the child position.
    pub target: String,
}

impl Edge {
    /// Creates an edge from a parent id to a child id.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            id: format!("e{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// The drawable result of laying out a set of positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgChartLayout {
    /// Nodes ordered by level, then by input order within a level.
    pub nodes: Vec<LayoutNode>,
    /// Validated parent-to-child edges.
    pub edges: Vec<Edge>,
}

impl OrgChartLayout {
    /// Groups node ids by level.
    pub fn levels(&self) -> BTreeMap<usize, Vec<&str>> {
        let mut levels: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
        for node in &self.nodes {
            levels
                .entry(node.level)
                .or_default()
                .push(node.position.id.as_str());
        }
        levels
    }

    /// Finds a node by position id.
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.position.id == id)
    }
}
