//! gNB identity scenarios
//!
//! The integrator provides `fiveg_gnb_identity` and publishes the gNB name
//! together with the TAC from its own configuration.

use gnbint_charm::{CharmEvent, CharmHost, CharmTask, ModelState, ReconcileOutcome};
use gnbint_common::{IntegratorConfig, RelationMode, TacPolicy, UnitStatus, TAC_CONFIG_KEY};
use integration_tests::{init_test_logging, MockGnbSimulator, TestModel, TEST_APP_NAME};

fn identity_task(model: ModelState) -> CharmTask<ModelState> {
    CharmTask::new(IntegratorConfig::new(RelationMode::GnbIdentity), model)
}

fn expected_gnb_name() -> String {
    format!("whatever-gnb-{TEST_APP_NAME}")
}

/// Relates the simulator and delivers its identity request.
fn relate(task: &mut CharmTask<ModelState>, sim: &MockGnbSimulator) -> u32 {
    let id = sim.relate(task.host_mut());
    task.handle_event(CharmEvent::IdentityRequested(id)).unwrap();
    id
}

#[test]
fn test_given_default_config_then_status_is_active() {
    init_test_logging();
    let mut task = identity_task(TestModel::new().build());

    task.handle_event(CharmEvent::CollectUnitStatus).unwrap();

    assert_eq!(task.host().unit_status(), &UnitStatus::active(""));
}

#[test]
fn test_given_tac_when_relation_created_then_gnb_name_and_tac_are_published() {
    let mut task = identity_task(TestModel::new().with_tac("012").build());
    let sim = MockGnbSimulator::default();

    let id = relate(&mut task, &sim);

    assert_eq!(sim.identity(task.host(), id), Some((expected_gnb_name(), 18)));
}

#[test]
fn test_given_no_tac_when_relation_created_then_default_tac_is_published() {
    let mut task = identity_task(TestModel::new().build());
    let sim = MockGnbSimulator::default();

    let id = relate(&mut task, &sim);

    assert_eq!(sim.identity(task.host(), id), Some((expected_gnb_name(), 1)));
}

#[test]
fn test_given_no_tac_and_tac_required_then_nothing_published_and_blocked() {
    let config =
        IntegratorConfig::new(RelationMode::GnbIdentity).with_tac_policy(TacPolicy::Required);
    let mut task = CharmTask::new(config, TestModel::new().build());
    let sim = MockGnbSimulator::default();

    let id = relate(&mut task, &sim);

    assert_eq!(sim.identity(task.host(), id), None);
    assert_eq!(
        task.host().unit_status(),
        &UnitStatus::blocked("The following configurations are not valid: ['tac']")
    );
}

#[test]
fn test_given_tac_not_hexadecimal_when_config_changed_then_status_is_blocked() {
    let mut task = identity_task(TestModel::new().build());
    task.host_mut().set_config(TAC_CONFIG_KEY, "gg");

    task.handle_event(CharmEvent::ConfigChanged).unwrap();

    assert_eq!(
        task.host().unit_status(),
        &UnitStatus::blocked("The following configurations are not valid: ['tac']")
    );
}

#[test]
fn test_given_tac_not_hexadecimal_when_relation_created_then_identity_is_not_published() {
    let mut task = identity_task(TestModel::new().with_tac("gg").build());
    let sim = MockGnbSimulator::default();

    let id = sim.relate(task.host_mut());
    let outcome = task.handle_event(CharmEvent::IdentityRequested(id)).unwrap();

    assert!(matches!(outcome, Some(ReconcileOutcome::Skipped(_))));
    assert!(task.host().relation(id).unwrap().local_app_data().is_empty());
    assert!(task.host().unit_status().is_blocked());
}

#[test]
fn test_given_not_leader_when_relation_created_then_identity_is_not_published() {
    let mut task = identity_task(TestModel::new().not_leader().build());
    let sim = MockGnbSimulator::default();

    let id = sim.relate(task.host_mut());
    let outcome = task.handle_event(CharmEvent::IdentityRequested(id)).unwrap();

    assert_eq!(outcome, Some(ReconcileOutcome::NotLeader));
    assert_eq!(sim.identity(task.host(), id), None);
}

#[test]
fn test_given_relation_exists_when_tac_changed_then_new_tac_is_published() {
    let mut task = identity_task(TestModel::new().build());
    let sim = MockGnbSimulator::default();
    let id = relate(&mut task, &sim);
    assert_eq!(sim.identity(task.host(), id), Some((expected_gnb_name(), 1)));

    task.host_mut().set_config(TAC_CONFIG_KEY, "F");
    task.handle_event(CharmEvent::ConfigChanged).unwrap();

    assert_eq!(sim.identity(task.host(), id), Some((expected_gnb_name(), 15)));
    assert_eq!(task.host().unit_status(), &UnitStatus::active(""));
}

#[test]
fn test_given_no_relation_when_config_changed_then_nothing_is_published() {
    let mut task = identity_task(TestModel::new().build());
    task.host_mut().set_config(TAC_CONFIG_KEY, "12345");

    let outcome = task.handle_event(CharmEvent::ConfigChanged).unwrap();

    assert_eq!(outcome, Some(ReconcileOutcome::NoRelation));
    assert!(task.host().all_relations().is_empty());
}

#[test]
fn test_config_change_fans_out_to_every_relation() {
    let mut task = identity_task(TestModel::new().with_tac("a").build());
    let first = MockGnbSimulator::default();
    let second = MockGnbSimulator {
        app_name: "gnbsim-2".to_string(),
    };
    let first_id = first.relate(task.host_mut());
    let second_id = second.relate(task.host_mut());

    let outcome = task.handle_event(CharmEvent::ConfigChanged).unwrap();

    assert_eq!(
        outcome,
        Some(ReconcileOutcome::Published(vec![first_id, second_id]))
    );
    assert_eq!(first.identity(task.host(), first_id).map(|(_, t)| t), Some(10));
    assert_eq!(second.identity(task.host(), second_id).map(|(_, t)| t), Some(10));
}

#[test]
fn test_update_status_does_not_publish_in_identity_mode() {
    let mut task = identity_task(TestModel::new().build());
    let sim = MockGnbSimulator::default();
    let id = sim.relate(task.host_mut());

    let outcome = task.handle_event(CharmEvent::UpdateStatus).unwrap();

    assert_eq!(outcome, Some(ReconcileOutcome::Ignored));
    assert_eq!(sim.identity(task.host(), id), None);
}
