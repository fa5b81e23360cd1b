use crate::LogSink;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Forwards tracing events into a `LogSink`
///
/// Lines look like `INFO platon_next_core::domain::session: Activity terminated`,
/// extra fields appended as `key=value`.
pub struct BufferLayer {
    sink: Box<dyn LogSink>,
    with_target: bool,
}

impl BufferLayer {
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            with_target: true,
        }
    }

    pub fn without_target(mut self) -> Self {
        self.with_target = false;
        self
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S> Layer<S> for BufferLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = if self.with_target {
            format!(
                "{} {}: {}{}",
                metadata.level(),
                metadata.target(),
                visitor.message,
                visitor.fields
            )
        } else {
            format!("{} {}{}", metadata.level(), visitor.message, visitor.fields)
        };

        // Nowhere left to report a failing sink
        let _ = self.sink.write(&line);
    }
}
