use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a city location. Dense index, cheap to copy and compare.
///
/// Locations are contiguous: a graph with `n` locations uses exactly the
/// indices `0..n`. The order-entry surface addresses the first 26 locations
/// by uppercase letter (`'A'` is location 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

impl LocationId {
    /// Map an uppercase address letter to its location. `None` for anything
    /// outside `'A'..='Z'`.
    pub fn from_letter(letter: char) -> Option<LocationId> {
        letter
            .is_ascii_uppercase()
            .then(|| LocationId(letter as u32 - 'A' as u32))
    }

    /// The address letter for this location, if it is within `'A'..='Z'`.
    /// Letters are an input convenience, not a cap on city size.
    pub fn letter(self) -> Option<char> {
        (self.0 < 26).then(|| char::from(b'A' + self.0 as u8))
    }

    /// The dense index used to address per-location tables.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Renders the address letter when one exists, the raw index otherwise.
impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{letter}"),
            None => write!(f, "#{}", self.0),
        }
    }
}
