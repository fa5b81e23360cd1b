use cucumber::when;
use platon_next_core::NavigationCommand;
use platon_next_tests::ActivityWorld;

// ===== When Steps =====

#[when("I play the first unplayed exercise")]
async fn play_first_unplayed(world: &mut ActivityWorld) {
    world.execute(NavigationCommand::PlayFirstUnplayed);
}

#[when("I play the next unplayed exercise")]
async fn play_next_unplayed(world: &mut ActivityWorld) {
    world.execute(NavigationCommand::PlayNextUnplayed { wrap: false });
}

#[when("I play the next unplayed exercise with looping")]
async fn play_next_unplayed_looping(world: &mut ActivityWorld) {
    world.execute(NavigationCommand::PlayNextUnplayed { wrap: true });
}

#[when(expr = "I play {string} if it was never played")]
async fn play_if_unplayed(world: &mut ActivityWorld, exercise_id: String) {
    world.execute(NavigationCommand::PlayIfUnplayed {
        exercise_id,
        params: None,
    });
}

#[when("I replay the previous exercise if unplayed")]
async fn play_previous_if_unplayed(world: &mut ActivityWorld) {
    world.execute(NavigationCommand::PlayPreviousIfUnplayed);
}

#[when(expr = "I play any exercise from group {int}")]
async fn play_any_from_group(world: &mut ActivityWorld, group_nb: i64) {
    world.execute(NavigationCommand::PlayAnyFromGroup { group_nb });
}

#[when(expr = "I play all exercises from group {int}")]
async fn play_all_from_group(world: &mut ActivityWorld, group_nb: i64) {
    world.execute(NavigationCommand::PlayAllFromGroup {
        group_nb,
        random_order: false,
    });
}

#[when("I stop the activity")]
async fn stop_activity(world: &mut ActivityWorld) {
    world.execute(NavigationCommand::StopActivity);
}
