//! The canonical 1X2 outcome enum and the quote-label normalizer.

use std::fmt;

/// One of the three possible full-time results of a football match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Home win ("1").
    Home,
    /// Draw ("X").
    Draw,
    /// Away win ("2").
    Away,
}

impl Outcome {
    /// All outcomes in market column order.
    pub const ALL: [Outcome; 3] = [Outcome::Home, Outcome::Draw, Outcome::Away];

    /// Normalize a free-text quote label to a canonical outcome.
    ///
    /// Providers label 1X2 quotes inconsistently; both word and column forms
    /// are accepted, case-insensitively: `home`/`1`, `draw`/`x`, `away`/`2`.
    /// Any other label is unrecognized and yields `None`.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "home" | "1" => Some(Outcome::Home),
            "draw" | "x" => Some(Outcome::Draw),
            "away" | "2" => Some(Outcome::Away),
            _ => None,
        }
    }

    /// Market column header for this outcome: "1", "X" or "2".
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Outcome::Home => "1",
            Outcome::Draw => "X",
            Outcome::Away => "2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Home => "Home",
            Outcome::Draw => "Draw",
            Outcome::Away => "Away",
        };
        write!(f, "{name}")
    }
}
