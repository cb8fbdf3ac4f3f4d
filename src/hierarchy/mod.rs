//! Org-chart hierarchy: level resolution and tree layout.
//!
//! Positions arrive as a flat list with optional parent ids. The index in
//! [`PositionIndex`] resolves levels and parent links; the
//! [`HierarchyLayoutBuilder`] turns those levels into coordinates and edges.

mod index;
mod layout;

pub use index::PositionIndex;
pub use layout::{HierarchyLayoutBuilder, build_layout};
