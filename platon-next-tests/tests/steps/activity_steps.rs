use cucumber::{given, then, when};
use platon_next_core::{ActivityEvent, ActivitySession, ActivitySnapshot, NavigationCommand};
use platon_next_tests::ActivityWorld;

// ===== Given Steps =====

#[given(expr = "an activity with groups {string}")]
async fn activity_with_groups(world: &mut ActivityWorld, layout: String) {
    world.start(&layout);
}

#[given(expr = "{string} was played with grade {int}")]
async fn exercise_was_played(world: &mut ActivityWorld, exercise_id: String, grade: i64) {
    let event = world
        .execute(NavigationCommand::RecordAttempt {
            exercise_id: exercise_id.clone(),
            grade,
        })
        .clone();

    assert_eq!(
        event,
        ActivityEvent::AttemptRecorded { exercise_id, grade },
        "Recording the attempt failed"
    );
}

#[given("the activity was stopped")]
async fn activity_was_stopped(world: &mut ActivityWorld) {
    world.execute(NavigationCommand::StopActivity);
    assert!(world.session().is_terminated());
}

// ===== When Steps =====

#[when("the activity is saved and restored")]
async fn saved_and_restored(world: &mut ActivityWorld) {
    let json = world
        .take_session()
        .into_snapshot()
        .to_json_pretty()
        .expect("Snapshot should serialize");

    let snapshot = ActivitySnapshot::from_json(&json).expect("Snapshot should parse");
    let session =
        ActivitySession::from_snapshot(snapshot.clone()).expect("Snapshot should be valid");

    world.snapshot = Some(snapshot);
    world.replace_session(session);
}

// ===== Then Steps =====

#[then(expr = "the runtime is asked to switch to {string}")]
async fn runtime_switches_to(world: &mut ActivityWorld, expected: String) {
    match world.last_event() {
        ActivityEvent::TransitionRequested { exercise_id, .. } => {
            assert_eq!(exercise_id, &expected);
        }
        other => panic!("Expected TransitionRequested, got {:?}", other),
    }
}

#[then("the current exercise keeps running")]
async fn current_keeps_running(world: &mut ActivityWorld) {
    assert!(
        matches!(world.last_event(), ActivityEvent::Continued { .. }),
        "Expected Continued, got {:?}",
        world.last_event()
    );
}

#[then(expr = "the command fails with {string}")]
async fn command_fails_with(world: &mut ActivityWorld, reason: String) {
    assert!(world.last_command_failed(), "Command should have failed");
    assert_eq!(world.last_error_message(), Some(reason.as_str()));
}

#[then(expr = "the pending exercise is {string}")]
async fn pending_exercise_is(world: &mut ActivityWorld, expected: String) {
    assert_eq!(world.session().next_exercise_id(), Some(expected.as_str()));
}

#[then("there is no pending exercise")]
async fn no_pending_exercise(world: &mut ActivityWorld) {
    assert_eq!(world.session().next_exercise_id(), None);
    assert_eq!(world.session().next_exercise_params(), None);
}

#[then("the activity is terminated")]
async fn activity_is_terminated(world: &mut ActivityWorld) {
    assert!(world.session().is_terminated());
}

#[then("the activity is not terminated")]
async fn activity_is_not_terminated(world: &mut ActivityWorld) {
    assert!(!world.session().is_terminated());
}

#[then(expr = "the previous exercise is {string}")]
async fn previous_exercise_is(world: &mut ActivityWorld, expected: String) {
    assert_eq!(world.session().previous_exercise_id(), Some(expected.as_str()));
}

#[then(expr = "{string} has {int} attempts")]
async fn exercise_has_attempts(world: &mut ActivityWorld, exercise_id: String, attempts: u32) {
    assert_eq!(
        world.session().exercise_attempts(&exercise_id).unwrap(),
        attempts
    );
}

#[then(expr = "the activity has {int} group(s)")]
async fn activity_has_groups(world: &mut ActivityWorld, count: i64) {
    assert_eq!(world.session().groups_count(), count);
}

#[then(expr = "the snapshot has a group {string} with {int} exercise(s)")]
async fn snapshot_has_group(world: &mut ActivityWorld, key: String, count: usize) {
    let snapshot = world.snapshot.as_ref().expect("No snapshot taken");
    let group = snapshot
        .exercise_groups
        .get(&key)
        .unwrap_or_else(|| panic!("Snapshot has no group '{}'", key));

    assert_eq!(group.exercises.len(), count);
}
