//! Unique identifiers for simulation entities
//!
//! Debts are referenced by a dedicated ID type rather than their position in
//! the input list, so results stay meaningful after the engine re-sorts
//! internally.

use serde::{Deserialize, Serialize};

/// Unique identifier for a Debt within a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DebtId(pub u16);
