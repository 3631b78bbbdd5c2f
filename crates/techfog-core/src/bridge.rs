//! Lifecycle event bridge.
//!
//! The host's tree screen reports three events: the tree was spawned
//! (shown), the tree was despawned (hidden), and a technology finished
//! researching. [`EventBridge`] is the state machine behind those
//! callbacks: it remembers which tree is currently on screen -- a weak
//! reference, since the host owns the tree and may destroy it at any time
//! -- and re-runs the visibility pass when a refresh is warranted.
//!
//! Malformed events degrade to no-ops rather than errors: a research event
//! with no tree on screen, a dead weak reference, or a non-successful
//! outcome all simply do nothing. Visibility is cosmetic; there is nothing
//! worth failing over.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::id::TechId;
use crate::policy::PolicySetting;
use crate::tree::{refresh_tree, ResearchOracle, TreeView};

/// Outcome the host reports alongside a technology-researched event.
/// Hosts with richer result codes report anything not successful as
/// `Failed`; only `Successful` triggers a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchOutcome {
    Successful,
    Failed,
}

/// Host-facing callback surface. The host registers one implementation
/// against its tree-screen events at startup; [`EventBridge`] is the
/// implementation this crate provides.
pub trait TreeScreenEvents<T> {
    /// The technology tree was spawned (the screen is now showing it).
    fn tree_spawned(&mut self, tree: &Rc<RefCell<T>>);

    /// The technology tree was despawned (the screen closed).
    fn tree_despawned(&mut self, tree: &Rc<RefCell<T>>);

    /// A research attempt on `subject` finished with `outcome`.
    fn technology_researched(&mut self, subject: &TechId, outcome: ResearchOutcome);
}

/// Tracks the tree currently on screen and refreshes it on relevant events.
///
/// States: no active tree, or one active tree held weakly. Initial state is
/// no active tree; there is no terminal state -- the bridge lives for the
/// process lifetime once registered. At most one tree is active at a time;
/// a new spawn replaces whatever was tracked before.
pub struct EventBridge<T, O> {
    oracle: O,
    setting: PolicySetting,
    active: Option<Weak<RefCell<T>>>,
}

impl<T, O> EventBridge<T, O>
where
    T: TreeView,
    O: ResearchOracle,
{
    /// Create a bridge over the given research oracle and the policy
    /// setting loaded at startup.
    pub fn new(oracle: O, setting: PolicySetting) -> Self {
        Self {
            oracle,
            setting,
            active: None,
        }
    }

    /// The policy setting this bridge applies.
    pub fn setting(&self) -> PolicySetting {
        self.setting
    }

    /// The research oracle this bridge consults.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Whether a spawned tree is currently tracked and still alive.
    pub fn has_active_tree(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Refresh the active tree, if there still is one.
    fn refresh_active(&self) {
        let Some(tree) = self.active.as_ref().and_then(Weak::upgrade) else {
            // No tree on screen, or the host destroyed it without a
            // despawn callback. Cosmetic update; nothing to do.
            return;
        };
        refresh_tree(&mut *tree.borrow_mut(), &self.oracle, self.setting);
    }
}

impl<T, O> TreeScreenEvents<T> for EventBridge<T, O>
where
    T: TreeView,
    O: ResearchOracle,
{
    fn tree_spawned(&mut self, tree: &Rc<RefCell<T>>) {
        log::debug!("tree spawned");
        self.active = Some(Rc::downgrade(tree));
        refresh_tree(&mut *tree.borrow_mut(), &self.oracle, self.setting);
    }

    fn tree_despawned(&mut self, _tree: &Rc<RefCell<T>>) {
        log::debug!("tree despawned");
        self.active = None;
    }

    fn technology_researched(&mut self, subject: &TechId, outcome: ResearchOutcome) {
        if outcome != ResearchOutcome::Successful {
            return;
        }
        log::trace!("technology researched: {subject}");
        self.refresh_active();
    }
}
