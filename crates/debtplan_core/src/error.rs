use std::fmt;

use crate::model::DebtId;

/// Input fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Balance,
    MinimumPayment,
    InterestRate,
    ExtraMonthlyPayment,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Balance => write!(f, "balance"),
            InputField::MinimumPayment => write!(f, "minimum payment"),
            InputField::InterestRate => write!(f, "interest rate"),
            InputField::ExtraMonthlyPayment => write!(f, "extra monthly payment"),
        }
    }
}

/// Errors raised when simulation inputs fail validation.
///
/// A negative balance or rate indicates caller-side corruption, not a valid
/// degenerate case, so the engine rejects it instead of clamping.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    Negative {
        field: InputField,
        debt_id: Option<DebtId>,
        value: f64,
    },
    NonFinite {
        field: InputField,
        debt_id: Option<DebtId>,
    },
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputError::Negative {
                field,
                debt_id: Some(id),
                value,
            } => {
                write!(f, "debt {id:?}: {field} is negative ({value})")
            }
            InvalidInputError::Negative {
                field,
                debt_id: None,
                value,
            } => {
                write!(f, "{field} is negative ({value})")
            }
            InvalidInputError::NonFinite {
                field,
                debt_id: Some(id),
            } => {
                write!(f, "debt {id:?}: {field} is not a finite number")
            }
            InvalidInputError::NonFinite {
                field,
                debt_id: None,
            } => {
                write!(f, "{field} is not a finite number")
            }
        }
    }
}

impl std::error::Error for InvalidInputError {}

pub type Result<T> = std::result::Result<T, InvalidInputError>;
