//! Property-based tests for update planning.

use proptest::prelude::*;

use super::{PropertyPatch, PropertyState, PropertyStatus, plan_update};

fn status_strategy() -> impl Strategy<Value = PropertyStatus> {
    prop::sample::select(PropertyStatus::ALL.to_vec())
}

#[allow(clippy::float_arithmetic)]
fn coordinate_strategy() -> impl Strategy<Value = Option<f64>> {
    prop::option::of((-9000i32..9000).prop_map(|v| f64::from(v) / 100.0))
}

fn state_strategy() -> impl Strategy<Value = PropertyState> {
    (
        "[a-z]{1,12}",
        prop::option::of("[a-z ]{0,20}"),
        0i64..10_000_000,
        "[a-z0-9 ]{1,20}",
        coordinate_strategy(),
        coordinate_strategy(),
        status_strategy(),
    )
        .prop_map(
            |(title, description, price, address, latitude, longitude, status)| PropertyState {
                title,
                description,
                price,
                address,
                latitude,
                longitude,
                status,
            },
        )
}

fn patch_strategy() -> impl Strategy<Value = PropertyPatch> {
    (
        prop::option::of("[a-z]{1,12}"),
        prop::option::of(prop::option::of("[a-z ]{0,20}")),
        prop::option::of(0i64..10_000_000),
        prop::option::of("[a-z0-9 ]{1,20}"),
        prop::option::of(coordinate_strategy()),
        prop::option::of(coordinate_strategy()),
        prop::option::of(status_strategy()),
    )
        .prop_map(
            |(title, description, price, address, latitude, longitude, status)| PropertyPatch {
                title,
                description,
                price,
                address,
                latitude,
                longitude,
                status,
            },
        )
}

fn provided_fields(patch: &PropertyPatch) -> usize {
    [
        patch.title.is_some(),
        patch.description.is_some(),
        patch.price.is_some(),
        patch.address.is_some(),
        patch.latitude.is_some(),
        patch.longitude.is_some(),
        patch.status.is_some(),
    ]
    .into_iter()
    .filter(|provided| *provided)
    .count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Never more changes than provided fields, and every change really differs.
    #[test]
    fn prop_changes_bounded_by_provided_fields(
        state in state_strategy(),
        patch in patch_strategy(),
    ) {
        let plan = plan_update(&state, &patch);
        prop_assert!(plan.changes.len() <= provided_fields(&patch));
        for change in &plan.changes {
            prop_assert_ne!(&change.old_value, &change.new_value);
        }
    }

    /// An empty patch plans nothing.
    #[test]
    fn prop_empty_patch_is_noop(state in state_strategy()) {
        let plan = plan_update(&state, &PropertyPatch::default());
        prop_assert!(plan.is_noop());
        prop_assert!(plan.status_transition.is_none());
        prop_assert_eq!(plan.next, state);
    }

    /// A transition is reported exactly when the status value moved.
    #[test]
    fn prop_transition_iff_status_changed(
        state in state_strategy(),
        patch in patch_strategy(),
    ) {
        let plan = plan_update(&state, &patch);
        let moved = plan.next.status != state.status;
        prop_assert_eq!(plan.status_transition.is_some(), moved);
        let audited = plan.changes.iter().any(|c| c.field == "status");
        prop_assert_eq!(audited, moved);
    }

    /// Re-applying the same patch to its own result changes nothing.
    #[test]
    fn prop_replay_is_noop(
        state in state_strategy(),
        patch in patch_strategy(),
    ) {
        let first = plan_update(&state, &patch);
        let second = plan_update(&first.next, &patch);
        prop_assert!(second.is_noop());
        prop_assert!(second.status_transition.is_none());
    }
}
