//! Shared transition-table plumbing for lifecycle state machines.
//!
//! Each workflow status enum describes its transition table as static
//! adjacency slices. Validation is a pure lookup, so tables can be checked
//! mechanically by enumerating every `(from, to)` pair.

use std::fmt::{Debug, Display};

/// A finite set of lifecycle states with a static transition table.
pub trait LifecycleState: Copy + Eq + Debug + Display + 'static {
    /// Every state, in declaration order.
    const ALL: &'static [Self];

    /// States reachable from `self` in one transition.
    fn allowed_targets(self) -> &'static [Self];

    /// Returns true if the state is marked final.
    ///
    /// A final state is not necessarily terminal: it may still have
    /// a narrow set of outgoing edges.
    fn is_final(self) -> bool;

    /// Returns true if the state has no outgoing transitions.
    fn is_terminal(self) -> bool {
        self.allowed_targets().is_empty()
    }

    /// Returns true if `self -> target` appears in the transition table.
    ///
    /// Self-transitions are always rejected.
    fn can_transition_to(self, target: Self) -> bool {
        self != target && self.allowed_targets().contains(&target)
    }
}

/// Validates `from -> to`, building the caller's error on rejection.
pub fn validate_transition<S, E>(from: S, to: S, reject: impl FnOnce(S, S) -> E) -> Result<(), E>
where
    S: LifecycleState,
{
    if from.can_transition_to(to) {
        Ok(())
    } else {
        Err(reject(from, to))
    }
}

/// Iterates over every `(from, to)` pair of a state set, self pairs included.
pub fn all_pairs<S: LifecycleState>() -> impl Iterator<Item = (S, S)> {
    S::ALL
        .iter()
        .flat_map(|&from| S::ALL.iter().map(move |&to| (from, to)))
}

/// Iterates over the legal edges of a state set.
pub fn edges<S: LifecycleState>() -> impl Iterator<Item = (S, S)> {
    all_pairs::<S>().filter(|&(from, to)| from.can_transition_to(to))
}
