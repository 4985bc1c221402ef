//! Event task scenarios
//!
//! Events delivered through the task channel are handled serially and in
//! order, with the unit status recomputed after each.

use gnbint_charm::{
    CharmEvent, CharmHost, CharmTask, StatusReport, Task, TaskMessage, TaskState,
    DEFAULT_CHANNEL_CAPACITY, GNB_NAME_KEY,
};
use gnbint_common::{IntegratorConfig, PlmnConfig, RelationMode, TacPolicy, UnitStatus};
use integration_tests::{
    init_test_logging, local_value, MockCore, MockGnbSimulator, TestModel, TestResult,
};
use tokio::sync::mpsc;

#[tokio::test]
async fn test_core_gnb_event_sequence() -> TestResult {
    init_test_logging();
    let mut model = TestModel::new().build();
    let id = MockCore::new(2, vec![PlmnConfig::new("001", "01", 1)]).relate(&mut model)?;
    let mut task = CharmTask::new(IntegratorConfig::new(RelationMode::CoreGnb), model);

    let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);
    tx.send(TaskMessage::message(CharmEvent::CollectUnitStatus)).await?;
    tx.send(TaskMessage::message(CharmEvent::RelationChanged(id))).await?;
    tx.send(TaskMessage::shutdown()).await?;

    task.run(rx).await;

    assert_eq!(task.state(), TaskState::Stopped);
    assert_eq!(task.events_handled(), 2);
    assert!(task.host().unit_status().is_active());

    let report = StatusReport::from_host(task.config(), task.host());
    assert_eq!(report.relations.len(), 1);
    assert!(report.relations[0].local_app_data.contains_key(GNB_NAME_KEY));
    Ok(())
}

#[tokio::test]
async fn test_identity_event_sequence_with_config_fix() -> TestResult {
    let config =
        IntegratorConfig::new(RelationMode::GnbIdentity).with_tac_policy(TacPolicy::Required);
    let mut model = TestModel::new().with_tac("zz").build();
    let sim = MockGnbSimulator::default();
    let id = sim.relate(&mut model);
    let mut task = CharmTask::new(config, model);

    task.handle_event(CharmEvent::IdentityRequested(id))?;
    assert!(task.host().unit_status().is_blocked());
    assert_eq!(sim.identity(task.host(), id), None);

    task.host_mut().set_config("tac", "0x1F");
    let (tx, rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);
    tx.send(TaskMessage::message(CharmEvent::ConfigChanged)).await?;
    drop(tx);
    task.run(rx).await;

    assert_eq!(sim.identity(task.host(), id).map(|(_, tac)| tac), Some(31));
    assert_eq!(task.host().unit_status(), &UnitStatus::active(""));
    assert!(local_value(task.host(), id, GNB_NAME_KEY).is_some());
    Ok(())
}
