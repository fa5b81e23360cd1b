use cucumber::{given, then, when};
use platon_next_core::{hash_params, ActivityEvent, NavigationCommand};
use platon_next_tests::ActivityWorld;
use serde_json::{Map, Value};

fn params(raw: &str) -> Map<String, Value> {
    match serde_json::from_str(raw).expect("Params should be JSON") {
        Value::Object(map) => map,
        other => panic!("Params should be an object, got {}", other),
    }
}

fn generated_id(world: &ActivityWorld) -> String {
    world
        .session()
        .generated_exercises()
        .values()
        .last()
        .cloned()
        .expect("Nothing generated yet")
}

// ===== Given Steps =====

#[given(expr = "{string} was generated with params {string}")]
async fn was_generated(world: &mut ActivityWorld, exercise_id: String, raw: String) {
    generate(world, exercise_id, raw).await;
    assert!(world.last_event().stops_execution());
}

#[given(expr = "the generated exercise was played with grade {int}")]
async fn generated_was_played(world: &mut ActivityWorld, grade: i64) {
    let exercise_id = generated_id(world);
    world
        .session_mut()
        .record_attempt(&exercise_id, grade)
        .expect("Generated exercise should have meta");
}

// ===== When Steps =====

#[when(expr = "I generate {string} with params {string}")]
async fn generate(world: &mut ActivityWorld, exercise_id: String, raw: String) {
    world.execute(NavigationCommand::GenerateAndPlay {
        exercise_id,
        params: Some(params(&raw)),
    });
}

#[when(expr = "I hash {string} with params {string}")]
async fn hash(world: &mut ActivityWorld, exercise_id: String, raw: String) {
    world.hashes.push(hash_params(&params(&raw), &exercise_id));
}

// ===== Then Steps =====

#[then(expr = "the runtime is asked to play {string} with params {string}")]
async fn asked_to_play_with(world: &mut ActivityWorld, template: String, raw: String) {
    let expected = params(&raw);
    match world.last_event() {
        ActivityEvent::TransitionRequested {
            exercise_id,
            params,
        } => {
            assert_eq!(exercise_id, &template);
            assert_eq!(params, &expected);
        }
        other => panic!("Expected TransitionRequested, got {:?}", other),
    }

    let hash = hash_params(&expected, &template);
    assert_eq!(
        world.session().generated_exercises().get(&hash),
        Some(&template)
    );
}

#[then(expr = "{int} exercise(s) has/have been generated")]
async fn generated_count(world: &mut ActivityWorld, count: usize) {
    assert_eq!(world.session().generated_exercises().len(), count);
    assert_eq!(world.session().groups().generated().len(), count);
}

#[then("the generated exercise is reported as played")]
async fn generated_reported_played(world: &mut ActivityWorld) {
    let expected = generated_id(world);
    assert_eq!(
        world.last_event(),
        &ActivityEvent::GeneratedExercisePlayed {
            exercise_id: expected
        }
    );
}

#[then("both hashes are equal")]
async fn hashes_equal(world: &mut ActivityWorld) {
    assert_eq!(world.hashes.len(), 2);
    assert_eq!(world.hashes[0], world.hashes[1]);
}
