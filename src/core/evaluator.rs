//! Left fold of a step ledger into a signed second count.
//!
//! Each step's operator is the one waiting for the *next* value: the fold
//! starts from 0 with a pending `+`, applies the pending operator to the
//! running total and the current value, then takes the current step's
//! operator (or `+` when absent) as the new pending one. Multiply and divide
//! read their operand as hours, so `× 01:00:00` leaves the total unchanged.
//! A zero divisor is skipped. Accumulation is in `f64`; the total is
//! truncated toward zero once, at the end.

use super::ledger::StepLedger;
use crate::models::operator::Operator;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn fold(ledger: &StepLedger) -> i64 {
    let mut total = 0.0_f64;
    let mut pending = Operator::Add;

    for step in ledger {
        total = apply(pending, total, step.value as f64);
        pending = step.operator.unwrap_or(Operator::Add);
    }

    total.trunc() as i64
}

fn apply(op: Operator, total: f64, value: f64) -> f64 {
    match op {
        Operator::Add => total + value,
        Operator::Subtract => total - value,
        Operator::Multiply => total * (value / SECONDS_PER_HOUR),
        Operator::Divide => {
            if value != 0.0 {
                total / (value / SECONDS_PER_HOUR)
            } else {
                total
            }
        }
    }
}
