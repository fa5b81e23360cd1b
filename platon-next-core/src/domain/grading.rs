use crate::domain::ActivitySession;
use crate::traits::GradeAggregator;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Floor of the mean of the last grade of every played exercise (0 if none)
#[derive(Debug, Clone, Copy, Default)]
pub struct AverageGrade;

impl GradeAggregator for AverageGrade {
    fn aggregate(&self, session: &ActivitySession) -> i64 {
        let grades = session.played_last_grades();
        if grades.is_empty() {
            return 0;
        }
        // Snapshot grades are unbounded, sum in i128
        let sum: i128 = grades.iter().map(|&grade| i128::from(grade)).sum();
        let mean = sum.div_euclid(grades.len() as i128);

        // A mean lies between the smallest and largest grade
        i64::try_from(mean).unwrap_or(if mean < 0 { i64::MIN } else { i64::MAX })
    }

    fn name(&self) -> &str {
        "average"
    }
}

/// Best last grade among played exercises (0 if none)
#[derive(Debug, Clone, Copy, Default)]
pub struct BestGrade;

impl GradeAggregator for BestGrade {
    fn aggregate(&self, session: &ActivitySession) -> i64 {
        session.played_last_grades().into_iter().max().unwrap_or(0)
    }

    fn name(&self) -> &str {
        "best"
    }
}

/// Built-in strategies, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GradeStrategy {
    Average,
    Best,
}

impl GradeAggregator for GradeStrategy {
    fn aggregate(&self, session: &ActivitySession) -> i64 {
        match self {
            GradeStrategy::Average => AverageGrade.aggregate(session),
            GradeStrategy::Best => BestGrade.aggregate(session),
        }
    }

    fn name(&self) -> &str {
        match self {
            GradeStrategy::Average => "average",
            GradeStrategy::Best => "best",
        }
    }
}

impl fmt::Display for GradeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradeStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" | "avg" => Ok(GradeStrategy::Average),
            "best" | "max" => Ok(GradeStrategy::Best),
            other => Err(format!("unknown grade strategy '{}'", other)),
        }
    }
}
