use super::operator::Operator;

/// One key press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Operator(Operator),
    Clear,
    Backspace,
    Percent,
    Evaluate,
}

impl Key {
    /// Map a keypad symbol to a key. The accepted set is closed:
    /// `0`-`9`, `+ - × ÷`, `C`, `⌫`, `%`, `=`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "C" => Some(Key::Clear),
            "⌫" => Some(Key::Backspace),
            "%" => Some(Key::Percent),
            "=" => Some(Key::Evaluate),
            _ => {
                if let Some(op) = Operator::from_symbol(s) {
                    return Some(Key::Operator(op));
                }
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| Key::Digit(d as u8)),
                    _ => None,
                }
            }
        }
    }

    pub fn symbol(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Clear => "C".to_string(),
            Key::Backspace => "⌫".to_string(),
            Key::Percent => "%".to_string(),
            Key::Evaluate => "=".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_keypad_symbols() {
        assert_eq!(Key::from_symbol("7"), Some(Key::Digit(7)));
        assert_eq!(Key::from_symbol("0"), Some(Key::Digit(0)));
        assert_eq!(Key::from_symbol("×"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_symbol("⌫"), Some(Key::Backspace));
        assert_eq!(Key::from_symbol("="), Some(Key::Evaluate));
        assert_eq!(Key::from_symbol("12"), None);
        assert_eq!(Key::from_symbol("c"), None);
        assert_eq!(Key::from_symbol("x"), None);
        assert_eq!(Key::from_symbol(""), None);
        assert_eq!(Key::from_symbol("."), None);
    }

    #[test]
    fn symbol_round_trips() {
        for s in ["3", "+", "-", "×", "÷", "C", "⌫", "%", "="] {
            assert_eq!(Key::from_symbol(s).map(|k| k.symbol()), Some(s.to_string()));
        }
    }
}
