//! Ordered record of the steps that make up the running expression.

use super::codec;
use crate::errors::{AppError, AppResult};
use crate::models::operator::Operator;
use crate::models::step::CalculationStep;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepLedger {
    steps: Vec<CalculationStep>,
}

impl StepLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_steps(steps: Vec<CalculationStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[CalculationStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&CalculationStep> {
        self.steps.last()
    }

    /// True when the last step has no operator, i.e. the expression was
    /// closed by `=` (or restored from such a ledger).
    pub fn is_finalized(&self) -> bool {
        self.last().is_some_and(CalculationStep::is_pending)
    }

    pub fn commit_value(&mut self, value: i64, operator: Option<Operator>) {
        self.steps.push(CalculationStep::new(value, operator));
    }

    /// Rewrite the pending last step in place. Returns false when the ledger
    /// does not end with a pending step.
    pub(crate) fn rewrite_pending(&mut self, value: i64, operator: Option<Operator>) -> bool {
        match self.steps.last_mut() {
            Some(step) if step.is_pending() => {
                step.value = value;
                step.operator = operator;
                true
            }
            _ => false,
        }
    }

    /// Rewrite the last step in place whatever its operator. Returns false
    /// on an empty ledger.
    pub(crate) fn rewrite_last(&mut self, value: i64, operator: Option<Operator>) -> bool {
        match self.steps.last_mut() {
            Some(step) => {
                step.value = value;
                step.operator = operator;
                true
            }
            None => false,
        }
    }

    /// Attach an operator to the pending last step so the expression
    /// continues from its running total.
    pub(crate) fn reopen(&mut self, operator: Operator) -> bool {
        match self.steps.last_mut() {
            Some(step) if step.is_pending() => {
                step.operator = Some(operator);
                true
            }
            _ => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<CalculationStep> {
        if index < self.steps.len() {
            Some(self.steps.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }

    /// One display string per step: `01:00:00 +`, or just `01:00:00` for the
    /// pending step.
    pub fn trace_parts(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| match step.operator {
                Some(op) => format!("{} {}", codec::format(step.value), op.symbol()),
                None => codec::format(step.value),
            })
            .collect()
    }

    pub fn trace(&self) -> String {
        self.trace_parts().join(" ")
    }

    /// JSON text stored alongside a history entry.
    pub fn encode(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw).map_err(|e| AppError::RestoreFailure(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a StepLedger {
    type Item = &'a CalculationStep;
    type IntoIter = std::slice::Iter<'a, CalculationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
