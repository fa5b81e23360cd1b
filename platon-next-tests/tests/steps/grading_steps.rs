use cucumber::{then, when};
use platon_next_core::{ActivityEvent, GradeStrategy, NavigationCommand};
use platon_next_tests::ActivityWorld;

// ===== When Steps =====

#[when(expr = "I compute the activity grade with the {string} strategy")]
async fn compute_activity_grade(world: &mut ActivityWorld, strategy: String) {
    let strategy: GradeStrategy = strategy.parse().expect("Unknown strategy");
    world.execute(NavigationCommand::SetActivityGrade { strategy });
}

// ===== Then Steps =====

#[then(expr = "the activity grade is {int}")]
async fn activity_grade_is(world: &mut ActivityWorld, expected: u8) {
    assert_eq!(
        world.last_event(),
        &ActivityEvent::ActivityGraded { grade: expected }
    );
    assert_eq!(world.session().activity_grade(), Some(expected));
}

#[then(expr = "the best grade of {string} is {int}")]
async fn best_grade_is(world: &mut ActivityWorld, exercise_id: String, expected: i64) {
    assert_eq!(
        world.session().exercise_best_grade(&exercise_id).unwrap(),
        Some(expected)
    );
}

#[then("not every exercise has been played")]
async fn not_all_played(world: &mut ActivityWorld) {
    assert!(!world.session().is_all_exercises_played());
    assert!(world.session().is_one_exercise_played());
}
