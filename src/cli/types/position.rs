//! Football position labels and element-type mapping.

use serde::{Serialize, Serializer};
use std::fmt;

/// Positions a Fantasy Premier League player can be registered at.
///
/// The FPL API encodes positions as an `element_type` code. The mapping is
/// fixed and total: any code outside `1..=4` resolves to [`Position::Unknown`]
/// rather than failing, so one odd player never breaks a whole squad.
///
/// # Examples
///
/// ```rust
/// use fpl_hub::Position;
///
/// assert_eq!(Position::from_element_type(4), Position::FWD);
/// assert_eq!(Position::from_element_type(9).to_string(), "Unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    GKP,
    DEF,
    MID,
    FWD,
    Unknown,
}

impl Position {
    /// Resolve an upstream `element_type` code.
    pub fn from_element_type(code: i64) -> Self {
        match code {
            1 => Position::GKP,
            2 => Position::DEF,
            3 => Position::MID,
            4 => Position::FWD,
            _ => Position::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Position::GKP => "GKP",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
            Position::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
