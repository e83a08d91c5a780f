//! Taskrank — 任务优先级分析引擎
//!
//! Pure, stateless scoring over a caller-supplied task batch: four
//! sub-scores (urgency, importance, effort, dependency standing) combined
//! through a named weighting strategy, guarded by a dependency-cycle check.
//! The engine performs no I/O and owns no state between calls; transport
//! and presentation live with the caller.
//!
//! # 使用示例
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskrank::{analyze_tasks, Strategy, Task};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
//! let tasks = vec![
//!     Task::new(1, "Ship release notes", today)
//!         .with_importance(9)
//!         .with_hours(1.5),
//!     Task::new(2, "Refactor billing", today + chrono::Duration::days(14))
//!         .with_importance(6)
//!         .with_hours(16.0)
//!         .with_dependencies(vec![1]),
//! ];
//!
//! let analysis = analyze_tasks(&tasks, Strategy::SmartBalance, today).unwrap();
//! assert_eq!(analysis.tasks[0].task.id, 1);
//! ```

use chrono::Utc;

pub use taskrank_domain::{
    AnalyzerError, AnalyzerResult, PriorityLevel, ScoreBreakdown, ScoredTask, Strategy,
    StrategyWeights, Suggestion, Task,
};
pub use taskrank_engine::{
    analyze_tasks, suggest_top_tasks, DependencyGraph, SuggestionSet, TaskAnalysis,
    DEFAULT_SUGGESTION_COUNT,
};

/// `analyze_tasks` against the current UTC date, captured once for the whole
/// batch.
pub fn analyze(tasks: &[Task], strategy: Strategy) -> AnalyzerResult<TaskAnalysis> {
    analyze_tasks(tasks, strategy, Utc::now().date_naive())
}

/// Top-3 suggestions against the current UTC date.
pub fn suggest(tasks: &[Task], strategy: Strategy) -> AnalyzerResult<SuggestionSet> {
    suggest_top_tasks(
        tasks,
        strategy,
        Utc::now().date_naive(),
        DEFAULT_SUGGESTION_COUNT,
    )
}
