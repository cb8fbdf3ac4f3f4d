//! Arena index over a flat list of positions.
//!
//! Parent links are followed by index lookups rather than by recursion, so
//! cycles and dangling references are easy to detect and never loop.

use std::collections::HashMap;

use crate::models::Position;

/// Outcome of walking a position's ancestor chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelWalk {
    /// Hops to the nearest ancestor treated as a root.
    pub level: usize,
    /// Whether the walk was cut short by a parent cycle.
    pub hit_cycle: bool,
}

/// Id lookup and level resolution for a slice of positions.
///
/// When an id appears more than once, references to it resolve to the
/// first occurrence.
///
/// # Example
///
/// ```
/// use people_analytics::hierarchy::PositionIndex;
/// use people_analytics::models::Position;
///
/// let positions = vec![
///     Position::new("ceo", "CEO", None),
///     Position::new("cto", "CTO", Some("ceo")),
///     Position::new("dev", "Developer", Some("cto")),
/// ];
/// let index = PositionIndex::new(&positions);
///
/// assert_eq!(index.level_of("dev"), 2);
/// assert_eq!(index.level_of("unknown"), 0);
/// assert_eq!(index.depth(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PositionIndex<'a> {
    positions: &'a [Position],
    by_id: HashMap<&'a str, usize>,
}

impl<'a> PositionIndex<'a> {
    /// Indexes `positions` by id.
    pub fn new(positions: &'a [Position]) -> Self {
        let mut by_id = HashMap::with_capacity(positions.len());
        for (i, position) in positions.iter().enumerate() {
            by_id.entry(position.id.as_str()).or_insert(i);
        }
        Self { positions, by_id }
    }

    /// Returns the number of indexed positions, duplicates included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if there are no positions.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if some position has this id.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Returns the position with this id.
    pub fn get(&self, id: &str) -> Option<&'a Position> {
        self.by_id.get(id).map(|&i| &self.positions[i])
    }

    fn parent_index(&self, index: usize) -> Option<usize> {
        self.positions[index]
            .parent_ref()
            .and_then(|parent| self.by_id.get(parent).copied())
    }

    /// Walks up from `index`, recording the depth at which each ancestor was
    /// reached. Reaching an ancestor a second time means a cycle: that
    /// ancestor is taken as the root.
    pub(crate) fn walk(&self, index: usize) -> LevelWalk {
        let mut depth_of: HashMap<usize, usize> = HashMap::new();
        let mut current = index;
        let mut depth = 0;

        loop {
            depth_of.insert(current, depth);
            match self.parent_index(current) {
                None => {
                    return LevelWalk {
                        level: depth,
                        hit_cycle: false,
                    };
                }
                Some(parent) => {
                    if let Some(&entry) = depth_of.get(&parent) {
                        return LevelWalk {
                            level: entry,
                            hit_cycle: true,
                        };
                    }
                    current = parent;
                    depth += 1;
                }
            }
        }
    }

    /// Resolves every position in one pass, indexed like the input slice.
    ///
    /// Gives the same result as calling [`walk`](Self::walk) for each index,
    /// but each position is visited once: a walk stops at the first ancestor
    /// already resolved, and the levels along the path are filled in on the
    /// way back down.
    pub(crate) fn walk_all(&self) -> Vec<LevelWalk> {
        let mut resolved: Vec<Option<LevelWalk>> = vec![None; self.positions.len()];
        let mut on_path: HashMap<usize, usize> = HashMap::new();
        let mut path: Vec<usize> = Vec::new();

        for start in 0..self.positions.len() {
            if resolved[start].is_some() {
                continue;
            }
            on_path.clear();
            path.clear();

            // (slot on the path, its level, whether a cycle was involved)
            let mut current = start;
            let (anchor, anchor_level, hit_cycle) = loop {
                on_path.insert(current, path.len());
                path.push(current);
                let last = path.len() - 1;
                match self.parent_index(current) {
                    None => break (last, 0, false),
                    Some(parent) => {
                        if let Some(known) = resolved[parent] {
                            break (last, known.level + 1, known.hit_cycle);
                        }
                        if let Some(&entry) = on_path.get(&parent) {
                            for &member in &path[entry..] {
                                resolved[member] = Some(LevelWalk {
                                    level: 0,
                                    hit_cycle: true,
                                });
                            }
                            break (entry, 0, true);
                        }
                        current = parent;
                    }
                }
            };

            for (slot, &member) in path[..=anchor].iter().enumerate() {
                resolved[member] = Some(LevelWalk {
                    level: anchor_level + (anchor - slot),
                    hit_cycle,
                });
            }
        }

        resolved.into_iter().flatten().collect()
    }

    /// Returns the level of the position at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn level_at(&self, index: usize) -> usize {
        self.walk(index).level
    }

    /// Returns the hierarchy level of the position with `id`.
    ///
    /// Roots, positions with a dangling parent and unknown ids are level 0.
    /// Positions on a parent cycle are level 0 as well; positions hanging
    /// below a cycle count their hops to it.
    pub fn level_of(&self, id: &str) -> usize {
        self.by_id
            .get(id)
            .map(|&i| self.level_at(i))
            .unwrap_or(0)
    }

    /// Positions without a resolvable parent, in input order.
    pub fn roots(&self) -> Vec<&'a Position> {
        (0..self.positions.len())
            .filter(|&i| self.parent_index(i).is_none())
            .map(|i| &self.positions[i])
            .collect()
    }

    /// Direct children of `id`, in input order.
    pub fn children_of(&self, id: &str) -> Vec<&'a Position> {
        if !self.contains(id) {
            return Vec::new();
        }
        self.positions
            .iter()
            .filter(|p| p.parent_ref() == Some(id))
            .collect()
    }

    /// Number of distinct levels, 0 for an empty index.
    pub fn depth(&self) -> usize {
        self.walk_all()
            .iter()
            .map(|walk| walk.level + 1)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Position> {
        vec![
            Position::new("root", "Root", None),
            Position::new("a", "A", Some("root")),
            Position::new("b", "B", Some("a")),
            Position::new("c", "C", Some("b")),
        ]
    }

    #[test]
    fn test_levels_along_chain() {
        let positions = chain();
        let index = PositionIndex::new(&positions);

        assert_eq!(index.level_of("root"), 0);
        assert_eq!(index.level_of("a"), 1);
        assert_eq!(index.level_of("b"), 2);
        assert_eq!(index.level_of("c"), 3);
        assert_eq!(index.depth(), 4);
    }

    #[test]
    fn test_dangling_parent_is_level_zero() {
        let positions = vec![Position::new("orphan", "Orphan", Some("ghost"))];
        let index = PositionIndex::new(&positions);

        assert_eq!(index.level_of("orphan"), 0);
        assert_eq!(index.roots().len(), 1);
    }

    #[test]
    fn test_two_node_cycle_is_level_zero() {
        let positions = vec![
            Position::new("a", "A", Some("b")),
            Position::new("b", "B", Some("a")),
        ];
        let index = PositionIndex::new(&positions);

        assert_eq!(index.level_of("a"), 0);
        assert_eq!(index.level_of("b"), 0);
        assert!(index.walk(0).hit_cycle);
        assert!(index.roots().is_empty());
    }

    #[test]
    fn test_self_parent_is_level_zero() {
        let positions = vec![Position::new("a", "A", Some("a"))];
        let index = PositionIndex::new(&positions);

        assert_eq!(index.level_of("a"), 0);
    }

    #[test]
    fn test_node_below_cycle_counts_hops_to_cycle() {
        let positions = vec![
            Position::new("a", "A", Some("b")),
            Position::new("b", "B", Some("a")),
            Position::new("c", "C", Some("a")),
            Position::new("d", "D", Some("c")),
        ];
        let index = PositionIndex::new(&positions);

        assert_eq!(index.level_of("c"), 1);
        assert_eq!(index.level_of("d"), 2);
        assert!(index.walk(3).hit_cycle);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let positions = vec![
            Position::new("root", "Root", None),
            Position::new("dup", "First", Some("root")),
            Position::new("dup", "Second", None),
            Position::new("leaf", "Leaf", Some("dup")),
        ];
        let index = PositionIndex::new(&positions);

        assert_eq!(index.get("dup").map(|p| p.name.as_str()), Some("First"));
        assert_eq!(index.level_of("leaf"), 2);
        assert_eq!(index.level_at(2), 0);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_children_of_in_input_order() {
        let positions = vec![
            Position::new("root", "Root", None),
            Position::new("x", "X", Some("root")),
            Position::new("y", "Y", Some("other")),
            Position::new("z", "Z", Some("root")),
        ];
        let index = PositionIndex::new(&positions);

        let children: Vec<&str> = index
            .children_of("root")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(children, vec!["x", "z"]);
        assert!(index.children_of("other").is_empty());
    }

    #[test]
    fn test_walk_all_agrees_with_single_walks() {
        let fixtures = vec![
            chain(),
            vec![
                Position::new("a", "A", Some("b")),
                Position::new("b", "B", Some("a")),
                Position::new("c", "C", Some("a")),
                Position::new("d", "D", Some("c")),
            ],
            vec![
                Position::new("d", "D", Some("c")),
                Position::new("c", "C", Some("b")),
                Position::new("b", "B", Some("a")),
                Position::new("a", "A", Some("b")),
                Position::new("self", "Self", Some("self")),
                Position::new("orphan", "Orphan", Some("ghost")),
            ],
            vec![
                Position::new("leaf", "Leaf", Some("mid")),
                Position::new("root", "Root", None),
                Position::new("dup", "Dup", None),
                Position::new("mid", "Mid", Some("root")),
                Position::new("dup", "Dup again", Some("leaf")),
            ],
        ];

        for positions in &fixtures {
            let index = PositionIndex::new(positions);
            let single: Vec<LevelWalk> = (0..positions.len()).map(|i| index.walk(i)).collect();
            assert_eq!(index.walk_all(), single);
        }
    }

    #[test]
    fn test_walk_all_long_chain() {
        let positions: Vec<Position> = (0..500)
            .map(|i| {
                let parent = (i > 0).then(|| format!("p{}", i - 1));
                Position::new(format!("p{}", i), "P", parent.as_deref())
            })
            .rev()
            .collect();
        let index = PositionIndex::new(&positions);
        let walks = index.walk_all();

        assert_eq!(walks[0].level, 499);
        assert_eq!(walks[499].level, 0);
        assert_eq!(index.depth(), 500);
    }

    #[test]
    fn test_empty_index() {
        let index = PositionIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.depth(), 0);
        assert!(index.roots().is_empty());
    }
}
