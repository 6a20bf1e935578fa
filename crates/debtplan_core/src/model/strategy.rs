//! Payoff allocation strategies
//!
//! A strategy is nothing more than an ordering over the input debts: the
//! extra-payment cascade walks that order each month and funds the first debt
//! still carrying a balance.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::debt::Debt;

/// How the extra monthly payment picks its target debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Smallest balance first.
    Snowball,
    /// Highest interest rate first.
    Avalanche,
}

impl Strategy {
    /// Indices into `debts` in this strategy's payoff order.
    ///
    /// The sort is stable, so debts with equal balances (snowball) or equal
    /// rates (avalanche) keep their input order. The order is computed once
    /// per run and held fixed as balances change month to month — a
    /// deliberate simplification matching the dashboard's behavior, not a
    /// dynamic re-targeting toward the currently smallest/highest-rate debt.
    pub fn payoff_order(self, debts: &[Debt]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..debts.len()).collect();
        match self {
            Strategy::Snowball => {
                order.sort_by(|&a, &b| debts[a].balance.total_cmp(&debts[b].balance));
            }
            Strategy::Avalanche => {
                order.sort_by(|&a, &b| debts[b].interest_rate.total_cmp(&debts[a].interest_rate));
            }
        }
        order
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Snowball => write!(f, "snowball"),
            Strategy::Avalanche => write!(f, "avalanche"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DebtId;

    fn debt(id: u16, balance: f64, rate: f64) -> Debt {
        Debt {
            id: DebtId(id),
            name: format!("debt {id}"),
            balance,
            minimum_payment: 25.0,
            interest_rate: rate,
        }
    }

    #[test]
    fn test_snowball_sorts_ascending_by_balance() {
        let debts = [debt(0, 500.0, 5.0), debt(1, 100.0, 1.0), debt(2, 300.0, 9.0)];
        assert_eq!(Strategy::Snowball.payoff_order(&debts), vec![1, 2, 0]);
    }

    #[test]
    fn test_avalanche_sorts_descending_by_rate() {
        let debts = [debt(0, 500.0, 5.0), debt(1, 100.0, 1.0), debt(2, 300.0, 9.0)];
        assert_eq!(Strategy::Avalanche.payoff_order(&debts), vec![2, 0, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = [debt(0, 250.0, 12.0), debt(1, 250.0, 12.0), debt(2, 250.0, 12.0)];
        assert_eq!(Strategy::Snowball.payoff_order(&debts), vec![0, 1, 2]);
        assert_eq!(Strategy::Avalanche.payoff_order(&debts), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(Strategy::Snowball.payoff_order(&[]).is_empty());
    }
}
