//! The amortization loop and the strategy comparator.

use rustc_hash::FxHashMap;

use crate::config::{ComparisonConfig, SimulationConfig};
use crate::error::InvalidInputError;
use crate::model::{Debt, PayoffEvent, PayoffResult, Strategy, StrategyComparison};
use crate::simulation_state::MonthlyState;

/// Safety cap on the projection horizon: 30 years of simulated months.
///
/// A result with `months_to_payoff == MAX_MONTHS` and `converged == false`
/// means the plan never retires some balance (typically a minimum payment
/// below that debt's monthly interest), as opposed to a genuine 30-year
/// payoff, which converges at the cap.
pub const MAX_MONTHS: u32 = 360;

/// Run one strategy over the debt snapshot.
///
/// Total over its domain: an empty debt list yields the zero result and
/// non-convergence is reported through the result, never raised. The only
/// error is an invalid input (negative or non-finite number).
pub fn simulate(config: &SimulationConfig) -> Result<PayoffResult, InvalidInputError> {
    config.validate()?;
    Ok(run(&config.debts, config.extra_monthly_payment, config.strategy))
}

/// Run both strategies over the same snapshot and report the savings of
/// avalanche over snowball.
///
/// The two runs never share working state. With the `parallel` feature they
/// execute on rayon's pool; results are identical either way.
pub fn compare(config: &ComparisonConfig) -> Result<StrategyComparison, InvalidInputError> {
    config.validate()?;

    #[cfg(feature = "parallel")]
    let (snowball, avalanche) = rayon::join(
        || run(&config.debts, config.extra_monthly_payment, Strategy::Snowball),
        || run(&config.debts, config.extra_monthly_payment, Strategy::Avalanche),
    );

    #[cfg(not(feature = "parallel"))]
    let (snowball, avalanche) = (
        run(&config.debts, config.extra_monthly_payment, Strategy::Snowball),
        run(&config.debts, config.extra_monthly_payment, Strategy::Avalanche),
    );

    Ok(StrategyComparison::new(snowball, avalanche))
}

/// Shared iteration loop; inputs are pre-validated.
fn run(debts: &[Debt], extra_monthly_payment: f64, strategy: Strategy) -> PayoffResult {
    // The loop's termination condition is vacuously true on an empty list;
    // return the zero result before touching any ordering or indexing.
    if debts.is_empty() {
        return PayoffResult {
            strategy,
            months_to_payoff: 0,
            total_interest_paid: 0.0,
            payoff_schedule: Vec::new(),
            converged: true,
            ending_balances: FxHashMap::default(),
        };
    }

    let mut state = MonthlyState::for_run(debts, strategy);
    let mut payoff_schedule = Vec::new();

    while !state.all_paid() && state.month < MAX_MONTHS {
        state = state.advance(debts, extra_monthly_payment);

        for &pos in &state.paid_off {
            let debt = &debts[state.balances[pos].debt_index];
            payoff_schedule.push(PayoffEvent {
                month: state.month,
                debt_id: debt.id,
                // Original input balance, for the progress timeline.
                balance_at_start: debt.balance,
            });
        }
    }

    let converged = state.all_paid();
    let ending_balances = state
        .balances
        .iter()
        .map(|b| (debts[b.debt_index].id, b.remaining))
        .collect();

    PayoffResult {
        strategy,
        months_to_payoff: state.month,
        total_interest_paid: state.total_interest,
        payoff_schedule,
        converged,
        ending_balances,
    }
}
