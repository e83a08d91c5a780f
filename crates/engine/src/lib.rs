pub mod analyzer;
pub mod graph;
pub mod scoring;
pub mod suggestion;

pub use analyzer::{analyze_tasks, TaskAnalysis};
pub use graph::DependencyGraph;
pub use suggestion::{suggest_top_tasks, SuggestionSet, DEFAULT_SUGGESTION_COUNT};
