use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// A committed value plus the operator that will combine it with whatever
/// follows. `operator == None` marks the pending (final) step of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    #[serde(rename = "valueSeconds")]
    pub value: i64,
    #[serde(default)]
    pub operator: Option<Operator>,
}

impl CalculationStep {
    pub fn new(value: i64, operator: Option<Operator>) -> Self {
        Self { value, operator }
    }

    pub fn is_pending(&self) -> bool {
        self.operator.is_none()
    }
}
