use cucumber::{then, when};
use platon_next_core::{ActivityEvent, ActivityLoop, NavigationCommand, SessionConfig};
use platon_next_tests::ActivityWorld;

fn run_queue(world: &mut ActivityWorld, commands: Vec<NavigationCommand>) {
    let mut activity = ActivityLoop::new(world.take_session(), &SessionConfig::default());

    for command in commands {
        activity.submit(command).expect("Queue should accept the command");
    }
    activity.run_to_completion();

    world.loop_events = activity.drain_events();
    world.replace_session(activity.into_session());
}

// ===== When Steps =====

#[when(expr = "I queue a record of {string} with grade {int}, a next command and a stop command")]
async fn queue_record_next_stop(world: &mut ActivityWorld, exercise_id: String, grade: i64) {
    run_queue(
        world,
        vec![
            NavigationCommand::RecordAttempt { exercise_id, grade },
            NavigationCommand::PlayNextUnplayed { wrap: false },
            NavigationCommand::StopActivity,
        ],
    );
}

#[when("I queue an invalid group command and a stop command")]
async fn queue_invalid_then_stop(world: &mut ActivityWorld) {
    run_queue(
        world,
        vec![
            NavigationCommand::PlayAnyFromGroup { group_nb: 5 },
            NavigationCommand::StopActivity,
        ],
    );
}

// ===== Then Steps =====

#[then(expr = "{int} events are emitted")]
async fn events_emitted(world: &mut ActivityWorld, count: usize) {
    assert_eq!(world.loop_events.len(), count, "{:?}", world.loop_events);
}

#[then(expr = "the last emitted event switches to {string}")]
async fn last_event_switches_to(world: &mut ActivityWorld, expected: String) {
    match world.loop_events.last() {
        Some(ActivityEvent::TransitionRequested { exercise_id, .. }) => {
            assert_eq!(exercise_id, &expected);
        }
        other => panic!("Expected TransitionRequested, got {:?}", other),
    }
}
