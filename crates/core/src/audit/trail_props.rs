//! Property-based tests for AuditTrail.

use proptest::prelude::*;

use crate::audit::error::AuditError;
use crate::audit::trail::AuditTrail;
use crate::audit::types::{ActorContext, OperationKind};

/// A lifecycle hook call, with or without an explicit actor.
#[derive(Debug, Clone)]
enum Hook {
    Create(Option<String>),
    Update(Option<String>),
    Delete(Option<String>),
}

impl Hook {
    fn kind(&self) -> OperationKind {
        match self {
            Self::Create(_) => OperationKind::Create,
            Self::Update(_) => OperationKind::Update,
            Self::Delete(_) => OperationKind::Delete,
        }
    }

    fn actor(&self) -> Option<ActorContext> {
        match self {
            Self::Create(a) | Self::Update(a) | Self::Delete(a) => {
                a.clone().map(ActorContext::named)
            }
        }
    }

    fn fire(&self, trail: &mut AuditTrail) -> Result<(), AuditError> {
        let actor = self.actor();
        let version = trail.version();
        match self {
            Self::Create(_) => trail.on_create(actor),
            Self::Update(_) => trail.on_update(actor, version).map(|_| ()),
            Self::Delete(_) => trail.on_delete(actor),
        }
    }
}

/// Strategy for an optional actor name.
fn arb_actor() -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.8, "[a-z]{1,10}")
}

/// Strategy for generating random hook calls.
fn arb_hook() -> impl Strategy<Value = Hook> {
    prop_oneof![
        arb_actor().prop_map(Hook::Create),
        arb_actor().prop_map(Hook::Update),
        arb_actor().prop_map(Hook::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Version never decreases, timestamps never step back, and the operation
    /// kind always reflects the last successful hook.
    #[test]
    fn prop_hooks_keep_trail_consistent(
        hooks in prop::collection::vec(arb_hook(), 1..25),
        system in any::<bool>()
    ) {
        let mut trail = if system {
            AuditTrail::for_system_operation()
        } else {
            AuditTrail::new()
        };
        let mut last_ok: Option<OperationKind> = None;

        for hook in hooks {
            let before = trail.clone();
            let result = hook.fire(&mut trail);

            if hook.actor().is_none() && !system {
                prop_assert_eq!(result, Err(AuditError::MissingActor { operation: hook.kind() }));
                prop_assert_eq!(&trail, &before);
                continue;
            }

            prop_assert!(result.is_ok());
            prop_assert!(trail.version() >= before.version());
            prop_assert!(trail.timestamp() >= before.timestamp());
            prop_assert_eq!(trail.operation_kind(), Some(hook.kind()));

            let expected_principal = hook.actor().map_or_else(
                || "SYSTEM".to_string(),
                |a| a.principal_name,
            );
            prop_assert_eq!(
                trail.actor().map(|a| a.principal_name.clone()),
                Some(expected_principal)
            );
            last_ok = Some(hook.kind());
        }

        prop_assert_eq!(trail.operation_kind(), last_ok);
    }

    /// Each successful update bumps the version by exactly one.
    #[test]
    fn prop_update_bumps_version_by_one(updates in 1u64..30) {
        let mut trail = AuditTrail::new();
        trail.on_create(Some(ActorContext::named("alice"))).unwrap();

        for n in 0..updates {
            let expected = trail.version();
            let check = trail.on_update(Some(ActorContext::named("alice")), expected).unwrap();
            prop_assert_eq!(check.next, expected + 1);
            prop_assert_eq!(trail.version(), n + 1);
        }
    }
}
