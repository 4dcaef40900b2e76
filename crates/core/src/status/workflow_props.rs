//! Property-based tests for StatusWorkflow.
//!
//! These tests drive the workflow through arbitrary transition requests and
//! check the outcome against the transition table.

use proptest::prelude::*;

use crate::status::error::IllegalStatusTransition;
use crate::status::types::EntityStatus;
use crate::status::workflow::StatusWorkflow;
use crate::transition::{LifecycleState, all_pairs};

/// Strategy for generating random EntityStatus values.
fn arb_status() -> impl Strategy<Value = EntityStatus> {
    prop_oneof![
        Just(EntityStatus::Draft),
        Just(EntityStatus::Pending),
        Just(EntityStatus::Active),
        Just(EntityStatus::Suspended),
        Just(EntityStatus::Archived),
        Just(EntityStatus::Deleted),
    ]
}

/// Strategy for generating actor names.
fn arb_actor() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Drives a fresh workflow along the shortest legal path to `status`.
fn workflow_in(status: EntityStatus) -> StatusWorkflow {
    let path: &[EntityStatus] = match status {
        EntityStatus::Draft => &[],
        EntityStatus::Pending => &[EntityStatus::Pending],
        EntityStatus::Active => &[EntityStatus::Pending, EntityStatus::Active],
        EntityStatus::Suspended => &[
            EntityStatus::Pending,
            EntityStatus::Active,
            EntityStatus::Suspended,
        ],
        EntityStatus::Archived => &[
            EntityStatus::Pending,
            EntityStatus::Active,
            EntityStatus::Archived,
        ],
        EntityStatus::Deleted => &[EntityStatus::Deleted],
    };

    let mut workflow = StatusWorkflow::new();
    for &step in path {
        workflow.transition_to(step, "setup").unwrap();
    }
    workflow
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A transition succeeds iff the target is in the allowed set of the current status.
    #[test]
    fn prop_transition_matches_table(
        from in arb_status(),
        to in arb_status(),
        actor in arb_actor()
    ) {
        let mut workflow = workflow_in(from);
        let before = workflow.clone();
        let result = workflow.transition_to(to, actor.clone());

        if from != to && from.allowed_targets().contains(&to) {
            let change = result.unwrap();
            prop_assert_eq!(change.from, from);
            prop_assert_eq!(workflow.status(), to);
            prop_assert_eq!(workflow.changed_by(), Some(actor.as_str()));
        } else {
            prop_assert_eq!(result, Err(IllegalStatusTransition { from, to }));
            prop_assert_eq!(workflow, before);
        }
    }

    /// Arbitrary request sequences never leave a terminal status.
    #[test]
    fn prop_terminal_states_are_absorbing(
        requests in prop::collection::vec(arb_status(), 1..20)
    ) {
        let mut workflow = StatusWorkflow::new();
        let mut reached_terminal = false;

        for target in requests {
            let was_terminal = workflow.status().is_terminal();
            let result = workflow.transition_to(target, "actor");
            if was_terminal {
                prop_assert!(result.is_err());
            }
            reached_terminal |= workflow.status().is_terminal();
            if reached_terminal {
                prop_assert!(workflow.status().is_final());
            }
        }
    }

    /// Change timestamps never move backwards across successful transitions.
    #[test]
    fn prop_changed_at_non_decreasing(
        requests in prop::collection::vec(arb_status(), 1..20)
    ) {
        let mut workflow = StatusWorkflow::new();
        let mut last = None;

        for target in requests {
            if workflow.transition_to(target, "actor").is_ok() {
                let at = workflow.changed_at();
                prop_assert!(at >= last);
                last = at;
            }
        }
    }
}

#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_every_pair_checked_mechanically() {
        for (from, to) in all_pairs::<EntityStatus>() {
            let mut workflow = workflow_in(from);
            let ok = workflow.transition_to(to, "actor").is_ok();
            assert_eq!(ok, from.can_transition_to(to), "{from} -> {to}");
        }
    }

    #[test]
    fn test_setup_paths_reach_requested_status() {
        for &status in EntityStatus::ALL {
            assert_eq!(workflow_in(status).status(), status);
        }
    }
}
