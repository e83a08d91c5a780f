pub mod entities;
pub mod errors;
pub mod strategy;
pub mod validation;

pub use entities::*;
pub use errors::{AnalyzerError, AnalyzerResult};
pub use strategy::{Strategy, StrategyWeights};
