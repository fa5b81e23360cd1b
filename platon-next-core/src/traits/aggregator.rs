use crate::domain::ActivitySession;

/// Strategy turning the exercises' grades into the activity grade
///
/// Implementations only read the session. The result is validated by
/// `ActivitySession::set_activity_grade` and must lie in `[0, 100]`.
pub trait GradeAggregator {
    fn aggregate(&self, session: &ActivitySession) -> i64;

    /// Name used in logs
    fn name(&self) -> &str {
        "custom"
    }
}

/// Any plain function or closure over the session is a strategy
impl<F> GradeAggregator for F
where
    F: Fn(&ActivitySession) -> i64,
{
    fn aggregate(&self, session: &ActivitySession) -> i64 {
        self(session)
    }
}
