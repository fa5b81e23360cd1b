mod aggregator;

pub use aggregator::GradeAggregator;
