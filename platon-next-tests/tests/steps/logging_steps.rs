use cucumber::{given, then, when};
use platon_log::{FileLog, LogBuffer};
use platon_next_tests::ActivityWorld;
use std::thread;

// ===== Given Steps =====

#[given("an empty log buffer")]
async fn empty_log_buffer(world: &mut ActivityWorld) {
    world.log_buffer = LogBuffer::new();
}

#[given("a file log without timestamps")]
async fn file_log_without_timestamps(world: &mut ActivityWorld) {
    let dir = tempfile::TempDir::new().expect("Temp dir");
    let log = FileLog::new(dir.path().join(".log")).without_timestamp();
    world.file_log = Some((dir, log));
}

// ===== When Steps =====

#[when(expr = "{int} threads each log {int} messages")]
async fn threads_log(world: &mut ActivityWorld, threads: usize, messages: usize) {
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let buffer = world.log_buffer.clone();
            thread::spawn(move || {
                for i in 0..messages {
                    buffer.log(format!("thread {} message {}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Writer thread panicked");
    }
}

#[when(expr = "I log the debug value {string} of {int} and {int}")]
async fn log_debug_value(world: &mut ActivityWorld, name: String, first: i64, second: i64) {
    world
        .file_log()
        .log_debug(&name, &vec![first, second])
        .expect("Log write");
}

#[when(expr = "I log the message {string}")]
async fn log_message(world: &mut ActivityWorld, message: String) {
    world.file_log().log(&message).expect("Log write");
}

#[when("I clear the file log")]
async fn clear_file_log(world: &mut ActivityWorld) {
    world.file_log().clear().expect("Log clear");
}

// ===== Then Steps =====

#[then(expr = "the log buffer holds {int} messages")]
async fn buffer_holds(world: &mut ActivityWorld, count: usize) {
    assert_eq!(world.log_buffer.count(), count);
}

#[then(expr = "the file log reads {string}")]
async fn file_log_reads(world: &mut ActivityWorld, expected: String) {
    let contents = world.file_log().contents().expect("Log read");
    assert_eq!(contents, Some(format!("{}\n", expected)));
}

#[then("the file log is empty")]
async fn file_log_is_empty(world: &mut ActivityWorld) {
    assert_eq!(world.file_log().contents().expect("Log read"), Some(String::new()));
}
