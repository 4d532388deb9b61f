//! Turns command-line / REPL text into keypad symbols.
//!
//! Whitespace separates tokens; inside a token every character is one key
//! press, so `13000` types five digits and `100+200=` is a whole calculation.
//! A few ASCII aliases stand in for keys that are awkward to type.

/// Whole-token aliases.
fn word_alias(token: &str) -> Option<&'static str> {
    match token.to_ascii_lowercase().as_str() {
        "bs" | "back" | "del" => Some("⌫"),
        "ac" | "clear" => Some("C"),
        _ => None,
    }
}

/// Single-character aliases. `:` is dropped so `01:30:00` types `013000`.
fn char_alias(c: char) -> Option<String> {
    match c {
        ':' => None,
        '*' | 'x' | 'X' => Some("×".to_string()),
        '/' => Some("÷".to_string()),
        'c' => Some("C".to_string()),
        '<' => Some("⌫".to_string()),
        other => Some(other.to_string()),
    }
}

pub fn tokenize(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    for token in input.split_whitespace() {
        if let Some(sym) = word_alias(token) {
            out.push(sym.to_string());
            continue;
        }
        out.extend(token.chars().filter_map(char_alias));
    }
    out
}
