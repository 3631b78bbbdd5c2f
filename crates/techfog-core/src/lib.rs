//! Tech Fog -- prerequisite-based visibility for technology-tree screens.
//!
//! Hides tree nodes whose prerequisite technologies have not yet been
//! researched, so the player only sees the frontier of the tree rather than
//! its full shape. Which prerequisites must be met is governed by a
//! [`policy::PolicySetting`] loaded once at startup: `All` hides a node until
//! every parent is researched, `Any` reveals it as soon as one parent is,
//! and `Default` defers to each node's own prefers-any-parent flag.
//!
//! # Overview
//!
//! The host application owns the tree screen, the nodes on it, and the
//! research-state store. This crate consumes two read interfaces --
//! [`tree::TreeView`] for the node/parent graph and [`tree::ResearchOracle`]
//! for research state -- and produces one write effect: toggling each node's
//! visibility flag via [`tree::TreeNode::set_visible`].
//!
//! At startup the host registers an [`bridge::EventBridge`] against its
//! three tree-screen callbacks (see [`bridge::TreeScreenEvents`]). The
//! bridge tracks which tree is currently on screen and re-runs
//! [`tree::refresh_tree`] whenever the tree is shown or a technology is
//! successfully researched.
//!
//! # Degradation
//!
//! Visibility is purely cosmetic, so every anomaly degrades to "do nothing":
//! dangling parent links in externally authored trees are skipped, research
//! events with no live tree on screen are ignored, and unrecognized
//! configuration values fall back to the default policy.

pub mod bridge;
pub mod id;
pub mod policy;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
