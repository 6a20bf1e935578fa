//! Per-run working state for the amortization loop.
//!
//! Each simulated month is a pure transition: [`MonthlyState::advance`]
//! returns a fresh snapshot instead of mutating in place, so a single month
//! can be unit-tested in isolation and two comparison runs can never alias
//! each other's balances.

use crate::model::{Debt, Strategy};

/// One debt's working balance inside a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebtBalance {
    /// Index into the input debt slice (input order).
    pub debt_index: usize,
    pub remaining: f64,
}

/// Working state for a single simulated month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyState {
    /// 0 before the first transition, then the 1-based month index.
    pub month: u32,
    /// Working balances, held in the run's fixed strategy order.
    pub balances: Vec<DebtBalance>,
    /// Interest accrued across all debts and months so far.
    pub total_interest: f64,
    /// Positions (into `balances`) that hit zero during the latest
    /// transition. Debts entering at zero never appear here.
    pub paid_off: Vec<usize>,
}

impl MonthlyState {
    /// Initial state for a run: balances copied from the input debts and
    /// arranged in the strategy's payoff order.
    pub fn for_run(debts: &[Debt], strategy: Strategy) -> Self {
        let balances = strategy
            .payoff_order(debts)
            .into_iter()
            .map(|i| DebtBalance {
                debt_index: i,
                remaining: debts[i].balance,
            })
            .collect();
        Self {
            month: 0,
            balances,
            total_interest: 0.0,
            paid_off: Vec::new(),
        }
    }

    /// Every balance retired?
    pub fn all_paid(&self) -> bool {
        self.balances.iter().all(|b| b.remaining <= 0.0)
    }

    /// Advance one month: interest accrual and minimum payments on every open
    /// debt, then the whole extra payment to the first open debt in strategy
    /// order — never split across several debts in the same month.
    pub fn advance(&self, debts: &[Debt], extra_monthly_payment: f64) -> MonthlyState {
        let mut next = MonthlyState {
            month: self.month + 1,
            balances: self.balances.clone(),
            total_interest: self.total_interest,
            paid_off: Vec::new(),
        };

        // Accrual and minimum payments apply to every open debt regardless
        // of strategy order. A minimum payment below the month's interest
        // leaves the balance larger than it started.
        for entry in &mut next.balances {
            if entry.remaining <= 0.0 {
                continue;
            }
            let debt = &debts[entry.debt_index];
            let interest = entry.remaining * debt.monthly_rate();
            next.total_interest += interest;
            let principal = debt.minimum_payment - interest;
            entry.remaining = (entry.remaining - principal).max(0.0);
        }

        // Extra-payment cascade: one target debt per month.
        if extra_monthly_payment > 0.0
            && let Some(target) = next.balances.iter_mut().find(|b| b.remaining > 0.0)
        {
            target.remaining = (target.remaining - extra_monthly_payment).max(0.0);
        }

        // Positive at the start of the month, zero at the end: paid off.
        for (pos, (before, after)) in self.balances.iter().zip(&next.balances).enumerate() {
            if before.remaining > 0.0 && after.remaining <= 0.0 {
                next.paid_off.push(pos);
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DebtId;

    fn debt(id: u16, balance: f64, minimum_payment: f64, interest_rate: f64) -> Debt {
        Debt {
            id: DebtId(id),
            name: format!("debt {id}"),
            balance,
            minimum_payment,
            interest_rate,
        }
    }

    #[test]
    fn test_single_month_interest_and_principal() {
        // 12% APR = 1% per month on a 1,000 balance: 10 of interest, so a
        // 100 minimum retires 90 of principal.
        let debts = [debt(0, 1_000.0, 100.0, 12.0)];
        let state = MonthlyState::for_run(&debts, Strategy::Snowball);
        let next = state.advance(&debts, 0.0);

        assert_eq!(next.month, 1);
        assert!((next.total_interest - 10.0).abs() < 1e-9);
        assert!((next.balances[0].remaining - 910.0).abs() < 1e-9);
        assert!(next.paid_off.is_empty());
    }

    #[test]
    fn test_advance_does_not_mutate_previous_snapshot() {
        let debts = [debt(0, 1_000.0, 100.0, 12.0)];
        let state = MonthlyState::for_run(&debts, Strategy::Snowball);
        let before = state.clone();
        let _ = state.advance(&debts, 50.0);
        assert_eq!(state, before);
    }

    #[test]
    fn test_extra_payment_hits_only_first_open_debt() {
        let debts = [
            debt(0, 100.0, 10.0, 0.0),
            debt(1, 1_000.0, 10.0, 0.0),
        ];
        // Snowball order: debt 0 then debt 1. Extra of 500 covers debt 0
        // with room to spare, but the remainder must not spill to debt 1.
        let state = MonthlyState::for_run(&debts, Strategy::Snowball);
        let next = state.advance(&debts, 500.0);

        assert_eq!(next.balances[0].remaining, 0.0);
        assert!((next.balances[1].remaining - 990.0).abs() < 1e-9);
        assert_eq!(next.paid_off, vec![0]);
    }

    #[test]
    fn test_cascade_skips_settled_debts() {
        let debts = [
            debt(0, 0.0, 10.0, 0.0),
            debt(1, 300.0, 10.0, 0.0),
        ];
        let state = MonthlyState::for_run(&debts, Strategy::Snowball);
        let next = state.advance(&debts, 40.0);

        // Settled debt pays nothing and is not a payoff event; the open debt
        // absorbs minimum plus extra.
        assert_eq!(next.balances[0].remaining, 0.0);
        assert!((next.balances[1].remaining - 250.0).abs() < 1e-9);
        assert!(next.paid_off.is_empty());
        assert_eq!(next.total_interest, 0.0);
    }

    #[test]
    fn test_minimum_below_interest_grows_balance() {
        // 30% APR on 10,000 is 250 per month; a 50 minimum falls short by
        // 200, so the balance climbs.
        let debts = [debt(0, 10_000.0, 50.0, 30.0)];
        let state = MonthlyState::for_run(&debts, Strategy::Snowball);
        let next = state.advance(&debts, 0.0);

        assert!((next.total_interest - 250.0).abs() < 1e-9);
        assert!((next.balances[0].remaining - 10_200.0).abs() < 1e-9);
    }

    #[test]
    fn test_overpayment_clamps_at_zero() {
        let debts = [debt(0, 30.0, 100.0, 0.0)];
        let state = MonthlyState::for_run(&debts, Strategy::Snowball);
        let next = state.advance(&debts, 0.0);

        assert_eq!(next.balances[0].remaining, 0.0);
        assert_eq!(next.paid_off, vec![0]);
        assert!(next.all_paid());
    }
}
