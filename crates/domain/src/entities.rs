use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::strategy::StrategyWeights;

/// 待分析的任务
///
/// 一个分析批次内的任务单元，由调用方提供，引擎不持有任何跨调用状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub due_date: NaiveDate,   // 截止日期，YYYY-MM-DD
    pub estimated_hours: f64,  // 预估工时，最小 0.1
    pub importance: i32,       // 重要度 1-10
    #[serde(default)]
    pub dependencies: Vec<i64>, // 前置任务 ID；批次外的 ID 被容忍但不产生影响
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            estimated_hours: 1.0,
            importance: 5,
            dependencies: Vec::new(),
        }
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<i64>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// 优先级等级
///
/// 由加权总分按固定阈值映射得到：>=80 Critical，>=65 High，>=45 Medium，其余 Low。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            PriorityLevel::Critical
        } else if score >= 65.0 {
            PriorityLevel::High
        } else if score >= 45.0 {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Critical",
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 加权前的四项子分数以及本次应用的权重
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
    pub weights: StrategyWeights,
}

/// 打分后的任务：原始字段加上总分、等级和子分数明细
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority_score: f64,
    pub priority_level: PriorityLevel,
    pub score_breakdown: ScoreBreakdown,
}

/// 推荐条目：打分结果附带一条可读的推荐理由
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(flatten)]
    pub task: ScoredTask,
    pub reason: String,
}
