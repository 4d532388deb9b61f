use super::codec::{self, BUFFER_DIGITS};

/// Canonical value of an empty buffer.
pub const EMPTY: &str = "0";

/// Digits currently being typed, HHMMSS right-aligned.
///
/// Key entry never grows the buffer past six digits. A leading `-` (and more
/// than six digits) only appear when a computed value is loaded back in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self {
            value: EMPTY.to_string(),
        }
    }
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value == EMPTY
    }

    pub fn digit_count(&self) -> usize {
        self.value.chars().filter(|c| c.is_ascii_digit()).count()
    }

    pub fn seconds(&self) -> i64 {
        codec::parse(&self.value)
    }

    /// `HH:MM:SS` rendering for the primary display.
    pub fn display(&self) -> String {
        codec::format(self.seconds())
    }

    pub fn append_digit(&mut self, digit: u8) {
        if digit > 9 || self.digit_count() >= BUFFER_DIGITS {
            return;
        }
        if self.is_empty() {
            self.value = digit.to_string();
        } else {
            self.value.push(char::from(b'0' + digit));
        }
    }

    pub fn backspace(&mut self) {
        if self.is_empty() {
            return;
        }
        self.value.pop();
        if self.value.is_empty() || self.value == "-" {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.value = EMPTY.to_string();
    }

    /// Replace the buffer with 1% of its value, rounded to whole seconds.
    pub fn percent(&mut self) {
        let hundredth = (self.seconds() as f64 * 0.01).round() as i64;
        self.load(hundredth);
    }

    /// Load a computed value in compact form.
    pub fn load(&mut self, seconds: i64) {
        self.value = codec::format_compact(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(digits: &str) -> InputBuffer {
        let mut b = InputBuffer::new();
        for c in digits.chars() {
            b.append_digit(c.to_digit(10).unwrap() as u8);
        }
        b
    }

    #[test]
    fn first_digit_replaces_placeholder() {
        let b = typed("7");
        assert_eq!(b.as_str(), "7");
        assert_eq!(b.display(), "00:00:07");
    }

    #[test]
    fn leading_zero_keystroke_stays_canonical() {
        let b = typed("00");
        assert_eq!(b.as_str(), "0");
    }

    #[test]
    fn seventh_digit_is_ignored() {
        let b = typed("1234567");
        assert_eq!(b.as_str(), "123456");
        assert_eq!(b.digit_count(), 6);
        assert_eq!(b.display(), "12:34:56");
    }

    #[test]
    fn backspace_and_clear() {
        let mut b = typed("12");
        b.backspace();
        assert_eq!(b.as_str(), "1");
        b.backspace();
        assert_eq!(b.as_str(), "0");
        b.backspace();
        assert_eq!(b.as_str(), "0");

        let mut b = typed("4321");
        b.clear();
        assert!(b.is_empty());
    }

    #[test]
    fn backspace_on_negative_value() {
        let mut b = InputBuffer::new();
        b.load(-5);
        assert_eq!(b.as_str(), "-000005");
        for _ in 0..6 {
            b.backspace();
        }
        assert_eq!(b.as_str(), "0");
    }

    #[test]
    fn loaded_value_blocks_further_digits() {
        let mut b = InputBuffer::new();
        b.load(5400);
        b.append_digit(9);
        assert_eq!(b.as_str(), "013000");
    }

    #[test]
    fn percent_rounds_to_whole_seconds() {
        // 10:00:00 → 36000s → 360s
        let mut b = typed("100000");
        b.percent();
        assert_eq!(b.seconds(), 360);
        assert_eq!(b.as_str(), "000600");

        // 00:01:15 → 75s → 0.75 → 1
        let mut b = typed("115");
        b.percent();
        assert_eq!(b.seconds(), 1);

        let mut b = InputBuffer::new();
        b.load(-150);
        b.percent();
        assert_eq!(b.seconds(), -2);
    }
}
