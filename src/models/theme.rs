use crate::utils::colors;
use serde::{Deserialize, Serialize};

/// Named color schemes for the terminal front end. Each one is just an
/// accent color applied to operators and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Orange,
    #[default]
    Blue,
    Red,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Orange, Theme::Blue, Theme::Red];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Orange => "Orange",
            Theme::Blue => "Blue",
            Theme::Red => "Red",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Theme::Orange => colors::ORANGE,
            Theme::Blue => colors::BLUE,
            Theme::Red => colors::RED,
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
    }

    /// Wrap `s` in the accent color.
    pub fn paint(&self, s: &str) -> String {
        format!("{}{}{}", self.accent(), s, colors::RESET)
    }
}
