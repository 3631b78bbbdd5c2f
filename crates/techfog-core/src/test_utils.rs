//! In-memory tree and research-store implementations.
//!
//! Available to unit tests and, behind the `test-utils` feature, to
//! integration tests and examples. Real hosts implement the traits in
//! [`crate::tree`] over their own screen objects instead.

use std::collections::HashSet;

use crate::id::{TechId, TechState};
use crate::tree::{ParentLink, ResearchOracle, TreeNode, TreeView};

/// A tree node backed by plain fields.
#[derive(Debug, Clone)]
pub struct ScreenNode {
    tech: TechId,
    prefers_any_parent: bool,
    parents: Vec<ParentLink>,
    visible: bool,
}

impl ScreenNode {
    /// A visible node with no parents.
    pub fn new(tech: impl Into<TechId>) -> Self {
        Self {
            tech: tech.into(),
            prefers_any_parent: false,
            parents: Vec::new(),
            visible: true,
        }
    }

    /// Add a parent link to the given technology.
    pub fn parent(mut self, tech: impl Into<TechId>) -> Self {
        self.parents.push(ParentLink::to(tech));
        self
    }

    /// Add a dangling parent link, as found in defective authored trees.
    pub fn dangling_parent(mut self) -> Self {
        self.parents.push(ParentLink::dangling());
        self
    }

    /// Set the prefers-any-parent flag.
    pub fn prefers_any(mut self) -> Self {
        self.prefers_any_parent = true;
        self
    }
}

impl TreeNode for ScreenNode {
    fn tech_id(&self) -> &TechId {
        &self.tech
    }

    fn prefers_any_parent(&self) -> bool {
        self.prefers_any_parent
    }

    fn parent_links(&self) -> &[ParentLink] {
        &self.parents
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// A tree screen backed by a node vector.
#[derive(Debug, Clone, Default)]
pub struct ScreenTree {
    nodes: Vec<ScreenNode>,
}

impl ScreenTree {
    pub fn new(nodes: Vec<ScreenNode>) -> Self {
        Self { nodes }
    }

    /// Look up a node by technology key.
    pub fn node(&self, tech: &str) -> Option<&ScreenNode> {
        self.nodes.iter().find(|n| n.tech.as_str() == tech)
    }

    /// Visibility of the named node. Panics if the node does not exist,
    /// which in a test means the tree was built wrong.
    pub fn is_visible(&self, tech: &str) -> bool {
        self.node(tech)
            .unwrap_or_else(|| panic!("no node '{tech}' in tree"))
            .is_visible()
    }
}

impl TreeView for ScreenTree {
    type Node = ScreenNode;

    fn nodes_mut(&mut self) -> &mut [Self::Node] {
        &mut self.nodes
    }
}

/// A research-state store backed by a set of unlocked technologies.
#[derive(Debug, Clone, Default)]
pub struct ResearchStore {
    available: HashSet<TechId>,
}

impl ResearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a technology as researched.
    pub fn unlock(&mut self, tech: impl Into<TechId>) {
        self.available.insert(tech.into());
    }
}

impl ResearchOracle for ResearchStore {
    fn technology_state(&self, tech: &TechId) -> TechState {
        if self.available.contains(tech) {
            TechState::Available
        } else {
            TechState::Unavailable
        }
    }
}
