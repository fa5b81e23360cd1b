use cucumber::{given, then, when};
use platon_next_core::feedback::{CategoryUpdate, FeedbackUpdate};
use platon_next_core::{FeedbackCategory, FeedbackEntry, FeedbackItem, FeedbackType, FoldableFeedback};
use platon_next_tests::ActivityWorld;

/// Most recent top-level item, categories skipped
fn last_item(world: &ActivityWorld) -> &FeedbackItem {
    world
        .feedback
        .entries()
        .iter()
        .rev()
        .find_map(|entry| match entry {
            FeedbackEntry::Item(item) => Some(item),
            FeedbackEntry::Category(_) => None,
        })
        .expect("No feedback item")
}

// ===== Given Steps =====

#[given("an empty feedback")]
async fn empty_feedback(world: &mut ActivityWorld) {
    world.feedback = FoldableFeedback::new();
}

// ===== When Steps =====

#[when(expr = "I add a feedback {string} whose output has {int} characters")]
async fn add_feedback(world: &mut ActivityWorld, name: String, length: usize) {
    world
        .feedback
        .add_feedback(FeedbackItem::new(name).with_obtained("x".repeat(length)));
}

#[when(expr = "I mark the last feedback as {string}")]
async fn mark_last_feedback(world: &mut ActivityWorld, feedback_type: String) {
    let feedback_type: FeedbackType =
        serde_json::from_value(serde_json::Value::String(feedback_type))
            .expect("Unknown feedback type");

    let updated = world.feedback.add_to_last_feedback(FeedbackUpdate {
        feedback_type: Some(feedback_type),
        ..Default::default()
    });
    assert!(updated);
}

#[when(expr = "I add a category {string}")]
async fn add_category(world: &mut ActivityWorld, name: String) {
    world.feedback.add_category(FeedbackCategory::new(name));
}

#[when(expr = "I append {int} feedbacks to the last category")]
async fn append_to_category(world: &mut ActivityWorld, count: usize) {
    let feedbacks = (0..count)
        .map(|i| FeedbackItem::new(format!("nested {}", i)).into())
        .collect();

    assert!(world
        .feedback
        .add_to_last_category(CategoryUpdate::default(), feedbacks));
}

// ===== Then Steps =====

#[then(expr = "the last feedback output has {int} characters")]
async fn last_output_length(world: &mut ActivityWorld, length: usize) {
    assert_eq!(last_item(world).obtained.chars().count(), length);
}

#[then(expr = "the last feedback has type {string}")]
async fn last_feedback_type(world: &mut ActivityWorld, expected: String) {
    assert_eq!(last_item(world).feedback_type.to_string(), expected);
}

#[then(expr = "the last category is {string} with {int} feedbacks")]
async fn last_category_is(world: &mut ActivityWorld, name: String, count: usize) {
    let category = world.feedback.last_category().expect("No category");
    assert_eq!(category.name, name);
    assert_eq!(category.feedbacks.len(), count);
}

#[then(expr = "the feedback has {int} entries")]
async fn feedback_entries(world: &mut ActivityWorld, count: usize) {
    assert_eq!(world.feedback.len(), count);
}
