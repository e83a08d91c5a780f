use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AnalyzerError;

/// 优先级策略：四项子分数上的固定权重向量
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    SmartBalance,
    FastestWins,
    HighImpact,
    DeadlineDriven,
}

/// 各子分数的权重，总和为 1.0
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StrategyWeights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SmartBalance,
        Strategy::FastestWins,
        Strategy::HighImpact,
        Strategy::DeadlineDriven,
    ];

    /// Resolve a caller-supplied strategy name, falling back to
    /// `SmartBalance` when the name is not recognized.
    ///
    /// Strategy names arrive as free text from the caller; the engine stays
    /// total over that input instead of erroring on a bad string. Callers
    /// that want strict rejection use `str::parse::<Strategy>` instead.
    pub fn from_name(name: &str) -> Strategy {
        match Self::parse_name(name) {
            Some(strategy) => strategy,
            None => {
                warn!("Unknown strategy '{}', falling back to smart_balance", name);
                Strategy::SmartBalance
            }
        }
    }

    fn parse_name(name: &str) -> Option<Strategy> {
        match name {
            "smart_balance" => Some(Strategy::SmartBalance),
            "fastest_wins" => Some(Strategy::FastestWins),
            "high_impact" => Some(Strategy::HighImpact),
            "deadline_driven" => Some(Strategy::DeadlineDriven),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::SmartBalance => "smart_balance",
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
        }
    }

    pub fn weights(&self) -> StrategyWeights {
        match self {
            Strategy::SmartBalance => StrategyWeights {
                urgency: 0.35,
                importance: 0.30,
                effort: 0.15,
                dependencies: 0.20,
            },
            Strategy::FastestWins => StrategyWeights {
                urgency: 0.20,
                importance: 0.20,
                effort: 0.50,
                dependencies: 0.10,
            },
            Strategy::HighImpact => StrategyWeights {
                urgency: 0.15,
                importance: 0.60,
                effort: 0.10,
                dependencies: 0.15,
            },
            Strategy::DeadlineDriven => StrategyWeights {
                urgency: 0.60,
                importance: 0.20,
                effort: 0.05,
                dependencies: 0.15,
            },
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::SmartBalance
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = AnalyzerError;

    /// Strict form of strategy resolution: unknown names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s).ok_or_else(|| AnalyzerError::unknown_strategy(s))
    }
}

impl StrategyWeights {
    pub fn sum(&self) -> f64 {
        self.urgency + self.importance + self.effort + self.dependencies
    }
}
