mod debt;
mod ids;
mod results;
mod strategy;

pub use debt::Debt;
pub use ids::DebtId;
pub use results::{PayoffEvent, PayoffResult, StrategyComparison};
pub use strategy::Strategy;
