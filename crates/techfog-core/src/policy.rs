//! The node-visibility decision.
//!
//! [`decide`] is a pure function from a node's parent links and the global
//! policy setting to a show/hide verdict. It holds no state and consults
//! research state only through the caller-supplied closure, which keeps it
//! testable in isolation from the host.

use serde::{Deserialize, Serialize};

use crate::id::TechId;
use crate::tree::ParentLink;

/// Global parent-visibility policy, loaded once from configuration at
/// startup and read by every decision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PolicySetting {
    /// A node is shown once any one of its parents is researched.
    Any,
    /// A node is shown only once all of its parents are researched.
    All,
    /// Defer to each node's own prefers-any-parent flag.
    #[default]
    Default,
}

impl PolicySetting {
    /// Parse a configuration value. Matching is case-insensitive;
    /// unrecognized input falls back to `Default`.
    pub fn parse_or_default(value: &str) -> Self {
        if value.eq_ignore_ascii_case("any") {
            PolicySetting::Any
        } else if value.eq_ignore_ascii_case("all") {
            PolicySetting::All
        } else {
            PolicySetting::Default
        }
    }

    /// Resolve the effective mode for one node. An explicit global `Any` or
    /// `All` overrides the node's flag; `Default` defers to it.
    pub fn effective_mode(self, prefers_any_parent: bool) -> ParentMode {
        match self {
            PolicySetting::Any => ParentMode::Any,
            PolicySetting::All => ParentMode::All,
            PolicySetting::Default if prefers_any_parent => ParentMode::Any,
            PolicySetting::Default => ParentMode::All,
        }
    }
}

/// The resolved per-node mode after combining the global setting with the
/// node's prefers-any-parent flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentMode {
    Any,
    All,
}

/// Verdict for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// Decide whether a node should be shown, given its parent links, its
/// prefers-any-parent flag, the global setting, and a predicate reporting
/// whether a parent technology is researched.
///
/// Links with no resolvable target come from defects in externally authored
/// tree data; they are skipped and contribute to neither fold, so a dangling
/// link never counts as "unresearched". They do count toward the `Any`
/// branch's non-empty guard, matching the raw link count the guard is
/// defined over.
///
/// Root nodes (no parent links) are always `Shown`: the `Any` branch is
/// guarded by the link count, and the `All` branch's conjunction over zero
/// parents is vacuously true. The asymmetry between the two guards is
/// intentional.
pub fn decide<F>(
    links: &[ParentLink],
    prefers_any_parent: bool,
    setting: PolicySetting,
    mut is_researched: F,
) -> Visibility
where
    F: FnMut(&TechId) -> bool,
{
    let mut all_parents_researched = true;
    let mut any_parent_researched = false;
    for link in links {
        let Some(target) = &link.target else {
            continue;
        };
        let researched = is_researched(target);
        all_parents_researched &= researched;
        any_parent_researched |= researched;
    }

    match setting.effective_mode(prefers_any_parent) {
        ParentMode::All if !all_parents_researched => Visibility::Hidden,
        ParentMode::Any if !links.is_empty() && !any_parent_researched => Visibility::Hidden,
        _ => Visibility::Shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(targets: &[&str]) -> Vec<ParentLink> {
        targets.iter().map(|t| ParentLink::to(*t)).collect()
    }

    /// Predicate over a fixed researched set.
    fn researched_in<'a>(set: &'a [&str]) -> impl FnMut(&TechId) -> bool + 'a {
        move |tech| set.contains(&tech.as_str())
    }

    // -----------------------------------------------------------------------
    // Root nodes
    // -----------------------------------------------------------------------

    #[test]
    fn no_parents_always_shown() {
        for setting in [
            PolicySetting::Any,
            PolicySetting::All,
            PolicySetting::Default,
        ] {
            for flag in [false, true] {
                let verdict = decide(&[], flag, setting, |_| false);
                assert_eq!(verdict, Visibility::Shown, "{setting:?} flag={flag}");
            }
        }
    }

    // -----------------------------------------------------------------------
    // All mode
    // -----------------------------------------------------------------------

    #[test]
    fn all_mode_hides_with_one_unresearched_parent() {
        let links = links(&["a", "b"]);
        let verdict = decide(&links, false, PolicySetting::All, researched_in(&["a"]));
        assert_eq!(verdict, Visibility::Hidden);
    }

    #[test]
    fn all_mode_shows_when_every_parent_researched() {
        let links = links(&["a", "b"]);
        let verdict = decide(&links, false, PolicySetting::All, researched_in(&["a", "b"]));
        assert_eq!(verdict, Visibility::Shown);
    }

    // -----------------------------------------------------------------------
    // Any mode
    // -----------------------------------------------------------------------

    #[test]
    fn any_mode_shows_with_one_researched_parent() {
        let links = links(&["a", "b"]);
        let verdict = decide(&links, false, PolicySetting::Any, researched_in(&["a"]));
        assert_eq!(verdict, Visibility::Shown);
    }

    #[test]
    fn any_mode_hides_when_no_parent_researched() {
        let links = links(&["a", "b"]);
        let verdict = decide(&links, false, PolicySetting::Any, researched_in(&[]));
        assert_eq!(verdict, Visibility::Hidden);
    }

    // -----------------------------------------------------------------------
    // Default mode defers to the node flag
    // -----------------------------------------------------------------------

    #[test]
    fn default_without_flag_behaves_as_all() {
        let links = links(&["a", "b"]);
        let verdict = decide(&links, false, PolicySetting::Default, researched_in(&["b"]));
        assert_eq!(verdict, Visibility::Hidden);
    }

    #[test]
    fn default_with_flag_behaves_as_any() {
        let links = links(&["a", "b"]);
        let verdict = decide(&links, true, PolicySetting::Default, researched_in(&["b"]));
        assert_eq!(verdict, Visibility::Shown);
    }

    #[test]
    fn explicit_setting_overrides_node_flag() {
        let links = links(&["a", "b"]);
        // Node prefers any, but the global All wins.
        let verdict = decide(&links, true, PolicySetting::All, researched_in(&["b"]));
        assert_eq!(verdict, Visibility::Hidden);
        // Node prefers all, but the global Any wins.
        let verdict = decide(&links, false, PolicySetting::Any, researched_in(&["b"]));
        assert_eq!(verdict, Visibility::Shown);
    }

    // -----------------------------------------------------------------------
    // Dangling links
    // -----------------------------------------------------------------------

    #[test]
    fn dangling_link_excluded_from_both_folds() {
        // The sole resolvable parent is researched, so the AND over the
        // resolvable set holds even though the dangling link resolves nothing.
        let links = vec![ParentLink::dangling(), ParentLink::to("a")];
        let verdict = decide(&links, false, PolicySetting::All, researched_in(&["a"]));
        assert_eq!(verdict, Visibility::Shown);
    }

    #[test]
    fn only_dangling_links_under_any_still_hidden() {
        // The non-empty guard counts raw links, so a node whose every link
        // is dangling has no researched parent and hides under Any.
        let links = vec![ParentLink::dangling()];
        let verdict = decide(&links, false, PolicySetting::Any, researched_in(&[]));
        assert_eq!(verdict, Visibility::Hidden);
    }

    #[test]
    fn only_dangling_links_under_all_shown() {
        // Vacuous AND over zero resolvable parents.
        let links = vec![ParentLink::dangling(), ParentLink::dangling()];
        let verdict = decide(&links, false, PolicySetting::All, researched_in(&[]));
        assert_eq!(verdict, Visibility::Shown);
    }

    // -----------------------------------------------------------------------
    // Configuration parsing
    // -----------------------------------------------------------------------

    #[test]
    fn parse_recognized_values() {
        assert_eq!(PolicySetting::parse_or_default("Any"), PolicySetting::Any);
        assert_eq!(PolicySetting::parse_or_default("ALL"), PolicySetting::All);
        assert_eq!(
            PolicySetting::parse_or_default("default"),
            PolicySetting::Default
        );
    }

    #[test]
    fn parse_unrecognized_falls_back_to_default() {
        assert_eq!(
            PolicySetting::parse_or_default("Some"),
            PolicySetting::Default
        );
        assert_eq!(PolicySetting::parse_or_default(""), PolicySetting::Default);
    }

    #[test]
    fn effective_mode_resolution() {
        assert_eq!(
            PolicySetting::Any.effective_mode(false),
            ParentMode::Any
        );
        assert_eq!(PolicySetting::All.effective_mode(true), ParentMode::All);
        assert_eq!(
            PolicySetting::Default.effective_mode(true),
            ParentMode::Any
        );
        assert_eq!(
            PolicySetting::Default.effective_mode(false),
            ParentMode::All
        );
    }
}
