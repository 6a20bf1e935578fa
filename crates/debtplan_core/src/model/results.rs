//! Simulation results
//!
//! Contains the output types from running simulations: the per-strategy
//! payoff projection and the two-strategy comparison. All values are plain
//! numbers; currency and date formatting belong to the caller.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ids::DebtId;
use super::strategy::Strategy;
use crate::date_math::add_months;

/// A debt reaching zero during a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayoffEvent {
    /// 1-based month index in which the balance hit zero.
    pub month: u32,
    pub debt_id: DebtId,
    /// The debt's ORIGINAL input balance, for display on the progress
    /// timeline — not the balance at the start of the payoff month.
    pub balance_at_start: f64,
}

/// Complete projection from a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffResult {
    pub strategy: Strategy,
    /// Month index at which the loop stopped, 0..=360.
    pub months_to_payoff: u32,
    /// Interest accrued across all debts and all months.
    pub total_interest_paid: f64,
    /// Payoff events ordered by month ascending, at most one per input debt.
    pub payoff_schedule: Vec<PayoffEvent>,
    /// False when the 360-month safety cap was hit with a balance still open.
    /// `months_to_payoff == 360` alone is ambiguous — a genuine 30-year
    /// payoff also stops there.
    pub converged: bool,
    /// Per-debt balances when the loop stopped; all zero when `converged`.
    pub ending_balances: FxHashMap<DebtId, f64>,
}

impl PayoffResult {
    /// Project the debt-free date from a caller-supplied "today".
    ///
    /// Pure function of `months_to_payoff` plus the clock; the engine itself
    /// never reads the system time.
    pub fn projected_payoff_date(&self, today: jiff::civil::Date) -> jiff::civil::Date {
        add_months(today, self.months_to_payoff)
    }

    /// The month a given debt paid off during this run, if it did.
    pub fn payoff_month(&self, debt_id: DebtId) -> Option<u32> {
        self.payoff_schedule
            .iter()
            .find(|e| e.debt_id == debt_id)
            .map(|e| e.month)
    }

    /// Remaining balance for a debt when the loop stopped.
    pub fn ending_balance(&self, debt_id: DebtId) -> f64 {
        self.ending_balances.get(&debt_id).copied().unwrap_or(0.0)
    }
}

/// Side-by-side projection of both strategies over the same debt snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub snowball: PayoffResult,
    pub avalanche: PayoffResult,
    /// `snowball.total_interest_paid - avalanche.total_interest_paid`.
    /// Positive means avalanche saved money; under this model it is never
    /// negative beyond float noise.
    pub interest_savings: f64,
    /// `snowball.months_to_payoff - avalanche.months_to_payoff`. May be zero
    /// or negative — the fixed-order cascade is a heuristic, not an exact
    /// optimizer.
    pub months_savings: i64,
}

impl StrategyComparison {
    pub fn new(snowball: PayoffResult, avalanche: PayoffResult) -> Self {
        let interest_savings = snowball.total_interest_paid - avalanche.total_interest_paid;
        let months_savings =
            i64::from(snowball.months_to_payoff) - i64::from(avalanche.months_to_payoff);
        Self {
            snowball,
            avalanche,
            interest_savings,
            months_savings,
        }
    }

    /// The strategy the dashboard highlights: avalanche whenever it saves
    /// interest, snowball otherwise.
    pub fn recommended(&self) -> Strategy {
        if self.interest_savings > 0.0 {
            Strategy::Avalanche
        } else {
            Strategy::Snowball
        }
    }
}
