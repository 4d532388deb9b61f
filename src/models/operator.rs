use serde::{Deserialize, Serialize};

/// Binary operator carried by a calculation step.
///
/// Serialized with the same symbols shown on the keypad so that a stored
/// ledger reads `{"valueSeconds": 3600, "operator": "×"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Keypad symbol → operator. Only the four keypad symbols are accepted.
    pub fn from_symbol(s: &str) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == s)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
