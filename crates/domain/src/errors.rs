use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyzerError {
    #[error("数据验证失败: {0}")]
    Validation(String),
    #[error("检测到循环依赖: {path}")]
    CircularDependency { cycle: Vec<i64>, path: String },
    #[error("未知的策略名称: {name}")]
    UnknownStrategy { name: String },
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl AnalyzerError {
    pub fn validation_error<S: Into<String>>(msg: S) -> Self {
        Self::Validation(msg.into())
    }
    pub fn unknown_strategy<S: Into<String>>(name: S) -> Self {
        Self::UnknownStrategy { name: name.into() }
    }
    /// 调用方修正输入后可以重试的错误
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalyzerError::Validation(_) | AnalyzerError::UnknownStrategy { .. }
        )
    }
    pub fn user_message(&self) -> &str {
        match self {
            AnalyzerError::Validation(_) => "输入数据验证失败",
            AnalyzerError::CircularDependency { .. } => "任务之间存在循环依赖",
            AnalyzerError::UnknownStrategy { .. } => "不支持的优先级策略",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_detail() {
        let err = AnalyzerError::validation_error("importance out of range");
        assert!(err.to_string().contains("importance out of range"));
    }

    #[test]
    fn test_circular_dependency_carries_cycle() {
        let err = AnalyzerError::CircularDependency {
            cycle: vec![1, 2],
            path: "\"A\" (#1) -> \"B\" (#2) -> \"A\" (#1)".to_string(),
        };
        match err {
            AnalyzerError::CircularDependency { cycle, .. } => assert_eq!(cycle, vec![1, 2]),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(AnalyzerError::validation_error("x").is_recoverable());
        assert!(AnalyzerError::unknown_strategy("x").is_recoverable());
        let cycle = AnalyzerError::CircularDependency {
            cycle: vec![1],
            path: String::new(),
        };
        assert!(!cycle.is_recoverable());
    }
}
