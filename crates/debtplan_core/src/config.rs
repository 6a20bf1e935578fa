//! Simulation configuration and the fluent plan builder.
//!
//! The main configuration type is [`SimulationConfig`]: the debt snapshot,
//! the extra monthly payment, and the strategy to run. [`ComparisonConfig`]
//! is the same snapshot without a fixed strategy, for side-by-side runs.
//!
//! # Builder DSL
//!
//! ```ignore
//! use debtplan_core::config::PlanBuilder;
//! use debtplan_core::model::Strategy;
//!
//! let config = PlanBuilder::new()
//!     .debt("Chase Card", 1_200.0, 35.0, 18.99)
//!     .debt("Medical Bill", 1_800.0, 50.0, 0.0)
//!     .extra_payment(350.0)
//!     .build(Strategy::Snowball);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InputField, InvalidInputError};
use crate::model::{Debt, DebtId, Strategy};

/// Complete configuration for a single-strategy simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Input order is irrelevant to the projection; the engine re-sorts
    /// internally. It does break ties, so it is part of the deterministic
    /// contract.
    pub debts: Vec<Debt>,
    /// Amount available beyond all minimum payments, constant for the run.
    #[serde(default)]
    pub extra_monthly_payment: f64,
    pub strategy: Strategy,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_inputs(&self.debts, self.extra_monthly_payment)
    }
}

/// Inputs for a two-strategy comparison: the same debt snapshot and budget,
/// with the strategy left open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonConfig {
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub extra_monthly_payment: f64,
}

impl ComparisonConfig {
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        validate_inputs(&self.debts, self.extra_monthly_payment)
    }
}

pub(crate) fn validate_inputs(debts: &[Debt], extra: f64) -> Result<(), InvalidInputError> {
    check(extra, InputField::ExtraMonthlyPayment, None)?;
    for debt in debts {
        check(debt.balance, InputField::Balance, Some(debt.id))?;
        check(debt.minimum_payment, InputField::MinimumPayment, Some(debt.id))?;
        check(debt.interest_rate, InputField::InterestRate, Some(debt.id))?;
    }
    Ok(())
}

fn check(value: f64, field: InputField, debt_id: Option<DebtId>) -> Result<(), InvalidInputError> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFinite { field, debt_id });
    }
    if value < 0.0 {
        return Err(InvalidInputError::Negative {
            field,
            debt_id,
            value,
        });
    }
    Ok(())
}

/// Builder for creating plans with automatic `DebtId` assignment.
pub struct PlanBuilder {
    debts: Vec<Debt>,
    extra_monthly_payment: f64,
    next_debt_id: u16,
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanBuilder {
    /// Create a new plan builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            debts: Vec::new(),
            extra_monthly_payment: 0.0,
            next_debt_id: 0,
        }
    }

    /// Add a debt; IDs are assigned sequentially in insertion order.
    #[must_use]
    pub fn debt(
        mut self,
        name: impl Into<String>,
        balance: f64,
        minimum_payment: f64,
        interest_rate: f64,
    ) -> Self {
        let id = DebtId(self.next_debt_id);
        self.next_debt_id += 1;
        self.debts.push(Debt {
            id,
            name: name.into(),
            balance,
            minimum_payment,
            interest_rate,
        });
        self
    }

    /// Set the extra monthly payment budget.
    #[must_use]
    pub fn extra_payment(mut self, amount: f64) -> Self {
        self.extra_monthly_payment = amount;
        self
    }

    /// Finish as a single-strategy configuration.
    pub fn build(self, strategy: Strategy) -> SimulationConfig {
        SimulationConfig {
            debts: self.debts,
            extra_monthly_payment: self.extra_monthly_payment,
            strategy,
        }
    }

    /// Finish as a two-strategy comparison configuration.
    pub fn build_comparison(self) -> ComparisonConfig {
        ComparisonConfig {
            debts: self.debts,
            extra_monthly_payment: self.extra_monthly_payment,
        }
    }
}
