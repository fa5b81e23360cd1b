mod activity_loop_steps;
mod activity_steps;
mod feedback_steps;
mod generation_steps;
mod grading_steps;
mod logging_steps;
mod navigation_steps;
