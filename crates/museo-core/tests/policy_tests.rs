mod common;

use common::{ctx, new_store, setup_two_floor_museum};
use museo_core::ops::tour_ops;
use museo_core::{ErrorKind, MuseoError, ReadOnlyPolicy, ReadWritePolicy, WritePolicy};

#[test]
fn test_read_only_policy_blocks_every_mutation() {
    let mut store = new_store();
    let (museum_id, upper, _) = setup_two_floor_museum(&mut store);
    let policy = ReadOnlyPolicy;
    let ctx = ctx("user-1");

    let result = tour_ops::create_tour(
        &mut store,
        &policy,
        &ctx,
        &museum_id,
        "Tour X",
        &[upper.clone()],
    );
    assert!(matches!(result, Err(MuseoError::WritesDisabled { .. })));

    let result = tour_ops::update_tour(&mut store, &policy, &ctx, "tour-1", "New Name");
    assert!(matches!(result, Err(MuseoError::WritesDisabled { .. })));

    let result = tour_ops::update_tour_sections(&mut store, &policy, &ctx, "tour-1", &[upper]);
    assert!(matches!(result, Err(MuseoError::WritesDisabled { .. })));

    let result = tour_ops::delete_tour(&mut store, &policy, &ctx, "tour-1");
    assert!(matches!(result, Err(MuseoError::WritesDisabled { .. })));

    assert!(store.list_tours().is_empty());
}

#[test]
fn test_policy_gate_runs_before_validation() {
    let mut store = new_store();
    // Blank name and unknown museum would otherwise fail validation,
    // but the policy denial must be reported first
    let result = tour_ops::create_tour(
        &mut store,
        &ReadOnlyPolicy,
        &ctx("user-1"),
        "ghost-museum",
        "",
        &[],
    );
    assert!(matches!(result, Err(MuseoError::WritesDisabled { .. })));
}

#[test]
fn test_writes_disabled_maps_to_unsupported_kind() {
    let err = ReadOnlyPolicy.check_write("create_tour").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(err.kind().code(), "ERR_UNSUPPORTED");
}

#[test]
fn test_read_write_policy_allows_everything() {
    assert!(ReadWritePolicy.check_write("create_tour").is_ok());
    assert!(ReadWritePolicy.check_write("delete_tour").is_ok());
}

#[test]
fn test_policies_work_through_trait_object() {
    let policies: Vec<Box<dyn WritePolicy>> = vec![Box::new(ReadWritePolicy), Box::new(ReadOnlyPolicy)];
    assert!(policies[0].check_write("update_tour").is_ok());
    assert!(policies[1].check_write("update_tour").is_err());
}
