use crate::utils::colors;
use serde::{Deserialize, Serialize};

/// Color tag attached to a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    #[default]
    Blue,
    Red,
    Orange,
    Purple,
    Teal,
    Green,
    Magenta,
}

impl ColorTag {
    pub const ALL: [ColorTag; 7] = [
        ColorTag::Blue,
        ColorTag::Red,
        ColorTag::Orange,
        ColorTag::Purple,
        ColorTag::Teal,
        ColorTag::Green,
        ColorTag::Magenta,
    ];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ColorTag::Blue => "blue",
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Purple => "purple",
            ColorTag::Teal => "teal",
            ColorTag::Green => "green",
            ColorTag::Magenta => "magenta",
        }
    }

    /// Case-insensitive lookup; `None` for names outside the palette.
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        ColorTag::ALL.into_iter().find(|c| c.to_db_str() == lower)
    }

    /// Stored tags that are no longer in the palette render as blue.
    pub fn from_db_str(s: &str) -> Self {
        Self::from_name(s).unwrap_or_default()
    }

    pub fn ansi(&self) -> &'static str {
        match self {
            ColorTag::Blue => colors::BLUE,
            ColorTag::Red => colors::RED,
            ColorTag::Orange => colors::ORANGE,
            ColorTag::Purple => colors::PURPLE,
            ColorTag::Teal => colors::CYAN,
            ColorTag::Green => colors::GREEN,
            ColorTag::Magenta => colors::MAGENTA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(ColorTag::from_name("Teal"), Some(ColorTag::Teal));
        assert_eq!(ColorTag::from_name(" MAGENTA "), Some(ColorTag::Magenta));
        assert_eq!(ColorTag::from_name("beige"), None);
    }

    #[test]
    fn unknown_db_value_falls_back_to_blue() {
        assert_eq!(ColorTag::from_db_str("chartreuse"), ColorTag::Blue);
        assert_eq!(ColorTag::from_db_str("red"), ColorTag::Red);
    }
}
