//! Priority composer
//!
//! Validates a batch, checks the dependency graph, computes the four
//! sub-scores per task and combines them with the strategy weights into a
//! ranked, explained result set.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use taskrank_domain::entities::{PriorityLevel, ScoreBreakdown, ScoredTask, Task};
use taskrank_domain::errors::AnalyzerResult;
use taskrank_domain::strategy::Strategy;
use taskrank_domain::validation;

use crate::graph::DependencyGraph;
use crate::scoring;

/// 一次分析调用的完整结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskAnalysis {
    pub strategy: Strategy,
    pub total_tasks: usize,
    /// 按总分降序排列，分数相同时按任务 ID 升序
    pub tasks: Vec<ScoredTask>,
}

/// Score and rank a batch of tasks.
///
/// `today` is captured once by the caller and threaded through every urgency
/// calculation so all tasks in the batch are scored against the same clock.
/// All-or-nothing: a validation failure or a dependency cycle rejects the
/// whole batch and no task is scored.
pub fn analyze_tasks(
    tasks: &[Task],
    strategy: Strategy,
    today: NaiveDate,
) -> AnalyzerResult<TaskAnalysis> {
    validation::validate_batch(tasks)?;

    let graph = DependencyGraph::build(tasks);
    graph.ensure_acyclic()?;

    let weights = strategy.weights();
    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|task| {
            let urgency = scoring::urgency_score(task.due_date, today);
            let importance = scoring::importance_score(task.importance);
            let effort = scoring::effort_score(task.estimated_hours);
            let dependencies = scoring::dependency_score(
                graph.blocker_count(task.id),
                !task.dependencies.is_empty(),
            );

            let priority_score = scoring::round2(
                urgency * weights.urgency
                    + importance * weights.importance
                    + effort * weights.effort
                    + dependencies * weights.dependencies,
            );

            ScoredTask {
                task: task.clone(),
                priority_score,
                priority_level: PriorityLevel::from_score(priority_score),
                score_breakdown: ScoreBreakdown {
                    urgency: scoring::round2(urgency),
                    importance: scoring::round2(importance),
                    effort: scoring::round2(effort),
                    dependencies: scoring::round2(dependencies),
                    weights,
                },
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.priority_score
            .partial_cmp(&a.priority_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.task.id.cmp(&b.task.id))
    });

    debug!(
        "Analyzed {} tasks with strategy {}",
        scored.len(),
        strategy
    );

    Ok(TaskAnalysis {
        strategy,
        total_tasks: scored.len(),
        tasks: scored,
    })
}
