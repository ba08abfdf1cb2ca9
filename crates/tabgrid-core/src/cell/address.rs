//! Coordinates and column labels

use crate::error::{Error, Result};
use crate::MINIMUM;
use std::fmt;
use std::str::FromStr;

/// A 1-based row or column index
pub type Axis = u32;

const BASE: u64 = 26;

/// A cell coordinate (e.g., row 3, column 2 is "B3")
///
/// Both axes are 1-based. Construction performs no validation: reads
/// outside the grid return nothing and writes grow the grid to fit, so
/// the only coordinate a write rejects is one with a zero axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Row index (1-based)
    pub row: Axis,
    /// Column index (1-based, A=1, B=2, ..., Z=26, AA=27)
    pub col: Axis,
}

impl Coordinate {
    /// Create a new coordinate
    pub const fn new(row: Axis, col: Axis) -> Self {
        Self { row, col }
    }

    /// Create a coordinate from a column label and a row index
    ///
    /// The label is resolved leniently with [`column_index`].
    pub fn from_label(col: &str, row: Axis) -> Self {
        Self::new(row, column_index(col))
    }

    /// Parse a coordinate from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use tabgrid_core::Coordinate;
    ///
    /// let c = Coordinate::parse("A1").unwrap();
    /// assert_eq!((c.row, c.col), (1, 1));
    ///
    /// let c = Coordinate::parse("ab12").unwrap();
    /// assert_eq!((c.row, c.col), (12, 28));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let col = parse_column_label(letters)?;
        let row: Axis = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row < MINIMUM {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self { row, col })
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", column_label(self.col), self.row)
    }
}

impl From<(Axis, Axis)> for Coordinate {
    fn from((row, col): (Axis, Axis)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert a column label to its 1-based index (A = 1, Z = 26, AA = 27, etc.)
///
/// Letters are read as a bijective base-26 numeral, case-insensitively.
/// Characters that are not ASCII letters are skipped. A label with no
/// letters at all resolves to [`MINIMUM`]; use [`parse_column_label`] to
/// reject such labels instead.
///
/// Case does not change the result, so `"az"` resolves like `"AZ"` to 52,
/// not to 26.
///
/// ```
/// use tabgrid_core::column_index;
///
/// assert_eq!(column_index("A"), 1);
/// assert_eq!(column_index("z"), 26);
/// assert_eq!(column_index("AA"), 27);
/// assert_eq!(column_index("az"), 52);
/// assert_eq!(column_index(""), 1);
/// ```
pub fn column_index(label: &str) -> Axis {
    letters_value(label).unwrap_or(MINIMUM)
}

/// Convert a column label to its 1-based index, rejecting malformed labels
///
/// Unlike [`column_index`], any character outside A-Z/a-z is an error, as
/// is an empty label or one that overflows [`Axis`].
pub fn parse_column_label(label: &str) -> Result<Axis> {
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidColumnLabel(label.to_string()));
    }
    letters_value(label).ok_or_else(|| Error::InvalidColumnLabel(label.to_string()))
}

/// Convert a 1-based column index to its label (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Index 0 has no label and yields an empty string.
pub fn column_label(col: Axis) -> String {
    let mut letters = Vec::new();
    let mut n = u64::from(col);

    while n > 0 {
        n -= 1;
        letters.push((n % BASE) as u8 + b'A');
        n /= BASE;
    }

    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Bijective base-26 value of the ASCII letters in `label`, least significant last.
///
/// Returns `None` when there are no letters or the value does not fit in [`Axis`].
fn letters_value(label: &str) -> Option<Axis> {
    let mut sum: u64 = 0;
    let mut power: u64 = 1;
    let mut seen = false;

    for ch in label.chars().rev() {
        if !ch.is_ascii_alphabetic() {
            continue;
        }
        let digit = u64::from(ch.to_ascii_uppercase() as u8 - b'A') + 1;
        sum = sum.checked_add(digit.checked_mul(power)?)?;
        power = power.checked_mul(BASE)?;
        seen = true;

        if sum > u64::from(Axis::MAX) {
            return None;
        }
    }

    if seen {
        Axis::try_from(sum).ok()
    } else {
        None
    }
}
