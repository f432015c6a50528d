//! Branching move history.

use std::{
    collections::HashMap,
    time::SystemTime,
};

/// Identifier of a history node.
///
/// Ids are allocated monotonically and never reused, so an id uniquely names
/// one snapshot for the lifetime of the tree even across pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// One recorded state in the history tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNode<T> {
    id: NodeId,
    snapshot: T,
    move_count: u64,
    timestamp: SystemTime,
    description: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<T> HistoryNode<T> {
    /// Returns this node's id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the recorded snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &T {
        &self.snapshot
    }

    /// Returns the number of moves from the root to this node.
    #[must_use]
    pub const fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Returns when this node was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Returns the human-readable description of the move.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the parent id, or `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the ids of this node's children, oldest first.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A bounded tree of board snapshots.
///
/// Commits append a child to the current node and move the cursor there;
/// undoing moves the cursor to the parent without deleting anything, so a
/// commit after an undo starts a new branch and the abandoned line stays
/// reachable through [`restore_to`](Self::restore_to).
///
/// The tree holds at most `capacity` nodes. When a commit exceeds that, the
/// oldest leaves outside the root-to-current path are dropped first; nodes
/// on that path are never pruned, so undo always works back to the root.
#[derive(Debug, Clone)]
pub struct HistoryTree<T> {
    nodes: HashMap<NodeId, HistoryNode<T>>,
    root: NodeId,
    current: NodeId,
    next_id: u64,
    capacity: usize,
}

impl<T: Clone> HistoryTree<T> {
    /// Creates a tree whose root holds `initial`.
    ///
    /// `capacity` is clamped to at least one node.
    #[must_use]
    pub fn new(initial: T, description: impl Into<String>, capacity: usize) -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            HistoryNode {
                id: root,
                snapshot: initial,
                move_count: 0,
                timestamp: SystemTime::now(),
                description: description.into(),
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            root,
            current: root,
            next_id: 1,
            capacity: capacity.max(1),
        }
    }

    /// Returns the root id.
    #[must_use]
    pub const fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns the current cursor id.
    #[must_use]
    pub const fn current_id(&self) -> NodeId {
        self.current
    }

    /// Returns the node at the cursor.
    ///
    /// # Panics
    ///
    /// Never panics; the cursor always names a live node.
    #[must_use]
    pub fn current(&self) -> &HistoryNode<T> {
        &self.nodes[&self.current]
    }

    /// Looks up a node by id. Pruned ids return `None`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&HistoryNode<T>> {
        self.nodes.get(&id)
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `false`; a tree always holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the ids from the root to the cursor, root first.
    #[must_use]
    pub fn path(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = Some(self.current);
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.nodes[&id].parent;
        }
        path.reverse();
        path
    }

    /// Records `snapshot` as a child of the current node and moves the
    /// cursor to it.
    pub fn commit(&mut self, snapshot: T, description: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let parent = self.current;
        let move_count = self.nodes[&parent].move_count + 1;
        self.nodes.insert(
            id,
            HistoryNode {
                id,
                snapshot,
                move_count,
                timestamp: SystemTime::now(),
                description: description.into(),
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.push(id);
        }
        self.current = id;
        self.prune();
        id
    }

    /// Moves the cursor to the parent and returns its snapshot.
    ///
    /// Returns `None` at the root. The undone node is kept, so the move can
    /// be revisited with [`restore_to`](Self::restore_to).
    pub fn undo(&mut self) -> Option<&T> {
        let parent = self.nodes[&self.current].parent?;
        self.current = parent;
        Some(&self.nodes[&parent].snapshot)
    }

    /// Moves the cursor to any live node and returns its snapshot.
    ///
    /// Returns `None` if `id` was pruned or never existed.
    pub fn restore_to(&mut self, id: NodeId) -> Option<&T> {
        if !self.nodes.contains_key(&id) {
            return None;
        }
        self.current = id;
        Some(&self.nodes[&id].snapshot)
    }

    /// Drops the oldest off-path leaves until the tree fits its capacity.
    fn prune(&mut self) {
        while self.nodes.len() > self.capacity {
            let path = self.path();
            let victim = self
                .nodes
                .values()
                .filter(|node| node.children.is_empty() && !path.contains(&node.id))
                .map(HistoryNode::id)
                .min();
            let Some(victim) = victim else {
                // Everything left is on the root-to-current path.
                break;
            };
            let parent = self.nodes[&victim].parent;
            self.nodes.remove(&victim);
            if let Some(parent) = parent.and_then(|id| self.nodes.get_mut(&id)) {
                parent.children.retain(|child| *child != victim);
            }
        }
    }
}
