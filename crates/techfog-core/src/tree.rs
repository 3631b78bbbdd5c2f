//! Tree-side interfaces and the visibility refresh pass.
//!
//! The host owns the tree screen and the research-state store; this module
//! defines the read interfaces the core consumes ([`TreeView`],
//! [`TreeNode`], [`ResearchOracle`]) and [`refresh_tree`], the pass that
//! applies the policy decision to every not-yet-researched node.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::id::{TechId, TechState};
use crate::policy::{self, PolicySetting, Visibility};

// ---------------------------------------------------------------------------
// Research state oracle
// ---------------------------------------------------------------------------

/// Read interface to the host's research-state store.
pub trait ResearchOracle {
    /// Current state of the given technology.
    fn technology_state(&self, tech: &TechId) -> TechState;

    /// Whether the technology has been unlocked.
    fn is_researched(&self, tech: &TechId) -> bool {
        self.technology_state(tech).is_available()
    }
}

impl<O: ResearchOracle + ?Sized> ResearchOracle for &O {
    fn technology_state(&self, tech: &TechId) -> TechState {
        (**self).technology_state(tech)
    }
}

/// Shared-handle oracle, for hosts that keep the research store behind an
/// `Rc<RefCell<..>>` and mutate it elsewhere between refreshes.
impl<O: ResearchOracle> ResearchOracle for Rc<RefCell<O>> {
    fn technology_state(&self, tech: &TechId) -> TechState {
        self.borrow().technology_state(tech)
    }
}

// ---------------------------------------------------------------------------
// Nodes and parent links
// ---------------------------------------------------------------------------

/// Edge from a node to a candidate prerequisite node.
///
/// `target` is `None` when externally authored tree data references a node
/// that does not exist. Such dangling links are skipped by the decision,
/// never treated as "unresearched".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    pub target: Option<TechId>,
}

impl ParentLink {
    /// A link resolving to the given parent technology.
    pub fn to(tech: impl Into<TechId>) -> Self {
        Self {
            target: Some(tech.into()),
        }
    }

    /// A link whose target could not be resolved.
    pub fn dangling() -> Self {
        Self { target: None }
    }

    /// Whether the link resolves to a parent node.
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

/// One entry on the technology-tree screen. Owned by the host's tree view;
/// this crate reads its identity and parent links and toggles its
/// visibility flag, nothing more.
pub trait TreeNode {
    /// The technology this node represents.
    fn tech_id(&self) -> &TechId;

    /// Per-node override consulted when the global setting is
    /// [`PolicySetting::Default`].
    fn prefers_any_parent(&self) -> bool;

    /// Ordered parent links, dangling entries included.
    fn parent_links(&self) -> &[ParentLink];

    /// Current visibility on screen.
    fn is_visible(&self) -> bool;

    /// Show or hide the node on screen.
    fn set_visible(&mut self, visible: bool);
}

/// The tree currently shown on the technology screen.
pub trait TreeView {
    type Node: TreeNode;

    /// Every node in the tree.
    fn nodes_mut(&mut self) -> &mut [Self::Node];
}

// ---------------------------------------------------------------------------
// Refresh pass
// ---------------------------------------------------------------------------

/// Re-evaluate visibility for every node in `tree` whose technology is not
/// yet `Available`, applying the verdict to the node's visibility flag.
///
/// Already-researched technologies are left untouched: an unlocked node is
/// never hidden, whatever the policy says about its parents. An empty tree
/// is a no-op. Side effect only; runs to completion within the calling
/// event callback.
pub fn refresh_tree<T, O>(tree: &mut T, oracle: &O, setting: PolicySetting)
where
    T: TreeView + ?Sized,
    O: ResearchOracle + ?Sized,
{
    let mut pending = 0usize;
    let mut hidden = 0usize;
    for node in tree.nodes_mut() {
        if oracle.technology_state(node.tech_id()).is_available() {
            continue;
        }
        let verdict = policy::decide(
            node.parent_links(),
            node.prefers_any_parent(),
            setting,
            |tech| oracle.is_researched(tech),
        );
        node.set_visible(verdict == Visibility::Shown);
        pending += 1;
        if verdict == Visibility::Hidden {
            hidden += 1;
        }
    }
    log::debug!("visibility refresh: {pending} pending nodes, {hidden} hidden");
}
