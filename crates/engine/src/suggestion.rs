//! Suggestion selector
//!
//! Narrows an analysis down to the top-N tasks and attaches a short
//! human-readable reason per pick, derived from whichever factors dominate
//! its score.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use taskrank_domain::entities::{ScoredTask, Suggestion, Task};
use taskrank_domain::errors::AnalyzerResult;
use taskrank_domain::strategy::Strategy;

use crate::analyzer;

pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// 推荐结果：简短的提示语加上带理由的头部任务
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub strategy: Strategy,
    pub message: String,
    pub suggestions: Vec<Suggestion>,
}

/// Run the composer and keep the `count` highest-scoring tasks, each with a
/// reason string. Fails exactly the way `analyze_tasks` fails.
pub fn suggest_top_tasks(
    tasks: &[Task],
    strategy: Strategy,
    today: NaiveDate,
    count: usize,
) -> AnalyzerResult<SuggestionSet> {
    let analysis = analyzer::analyze_tasks(tasks, strategy, today)?;

    let suggestions: Vec<Suggestion> = analysis
        .tasks
        .into_iter()
        .take(count)
        .map(|scored| {
            let reason = build_reason(&scored, strategy, today);
            Suggestion { task: scored, reason }
        })
        .collect();

    debug!(
        "Selected {} suggestions with strategy {}",
        suggestions.len(),
        strategy
    );

    Ok(SuggestionSet {
        strategy,
        message: format!(
            "Here are your top {} recommended tasks for today",
            suggestions.len()
        ),
        suggestions,
    })
}

/// Compose the reason from the task's most extreme factors: deadline
/// pressure first, then importance, effort and blocking impact, plus one
/// strategy-specific clause.
fn build_reason(scored: &ScoredTask, strategy: Strategy, today: NaiveDate) -> String {
    let task = &scored.task;
    let days_until = task.due_date.signed_duration_since(today).num_days();

    let mut reasons: Vec<String> = Vec::new();
    if days_until < 0 {
        reasons.push(format!("overdue by {} day(s)", days_until.unsigned_abs()));
    } else if days_until == 0 {
        reasons.push("due today".to_string());
    } else if days_until <= 3 {
        reasons.push(format!("due in {days_until} day(s)"));
    }
    if task.importance >= 8 {
        reasons.push("high importance".to_string());
    }
    if task.estimated_hours <= 2.0 {
        reasons.push("quick win".to_string());
    }
    if scored.score_breakdown.dependencies > 70.0 {
        reasons.push("blocks other tasks".to_string());
    }
    match strategy {
        Strategy::FastestWins if task.estimated_hours <= 1.0 => {
            reasons.push("fast to complete".to_string());
        }
        Strategy::HighImpact if task.importance >= 8 => {
            reasons.push("maximum impact".to_string());
        }
        Strategy::DeadlineDriven if days_until <= 2 => {
            reasons.push("urgent deadline".to_string());
        }
        _ => {}
    }
    if reasons.is_empty() {
        reasons.push("balanced priority across all factors".to_string());
    }

    format!("Recommended because: {}", reasons.join(", "))
}
