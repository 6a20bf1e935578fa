//! Debt-payoff simulation library
//!
//! This crate is the computational core of a personal-finance dashboard. It
//! simulates month-by-month amortization of a set of debts under two
//! allocation strategies:
//! - **Snowball** — every extra dollar goes to the smallest balance first
//! - **Avalanche** — every extra dollar goes to the highest interest rate first
//!
//! and reports months to payoff, total interest paid, a per-debt payoff
//! schedule, and a comparison of the two strategies.
//!
//! The engine is pure: it performs no I/O, holds no state between calls, and
//! owns no formatting — the surrounding dashboard renders the plain numbers it
//! returns.
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic plan setup:
//!
//! ```ignore
//! use debtplan_core::config::PlanBuilder;
//! use debtplan_core::model::Strategy;
//! use debtplan_core::simulation::{compare, simulate};
//!
//! let config = PlanBuilder::new()
//!     .debt("Chase Card", 1_200.0, 35.0, 18.99)
//!     .debt("Medical Bill", 1_800.0, 50.0, 0.0)
//!     .debt("Car Loan", 3_450.0, 120.0, 12.5)
//!     .extra_payment(350.0)
//!     .build(Strategy::Avalanche);
//!
//! let result = simulate(&config)?;
//! println!("debt free in {} months", result.months_to_payoff);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod simulation;
pub mod simulation_state;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ComparisonConfig, PlanBuilder, SimulationConfig};
pub use model::{Debt, DebtId, PayoffEvent, PayoffResult, Strategy, StrategyComparison};
pub use simulation::{MAX_MONTHS, compare, simulate};
