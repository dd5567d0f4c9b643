mod heuristic;

pub use heuristic::{LineClassifier, LineCounts};
