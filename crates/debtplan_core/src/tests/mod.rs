//! Integration tests for the debt-payoff engine
//!
//! Tests are organized by topic:
//! - `basic` - zero-debt input, schedule mechanics, validation, wire shape
//! - `strategies` - snowball/avalanche ordering, tie-breaks, determinism
//! - `comparison` - two-strategy comparison and randomized properties
//! - `convergence` - the 360-month safety cap and non-convergent plans
