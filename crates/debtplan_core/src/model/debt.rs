//! Debt records consumed by the simulation
//!
//! The shape matches the dashboard's CRUD records directly: a label, an
//! outstanding balance, a contractual minimum payment, and an annual
//! percentage rate. No normalization is expected of the caller beyond
//! supplying non-negative numbers.

use serde::{Deserialize, Serialize};

use super::ids::DebtId;

/// One outstanding debt, immutable for the life of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: DebtId,
    /// Display label; never read by the algorithm.
    pub name: String,
    /// Outstanding principal.
    pub balance: f64,
    /// Contractual payment due every month regardless of strategy.
    pub minimum_payment: f64,
    /// Annual percentage rate, as a percentage (e.g. `18.99`).
    pub interest_rate: f64,
}

impl Debt {
    /// Monthly compounding approximation: APR / 12, as a fraction.
    #[inline]
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// A debt that enters the simulation at or below zero is already settled.
    /// It is skipped for payments and produces no payoff event.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.balance <= 0.0
    }
}
