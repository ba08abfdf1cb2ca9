//! Cell value types

use std::fmt;

/// Represents the value stored in a cell
///
/// A cell with no value at all is modelled one level up, as a [`Cell`](super::Cell)
/// holding `None`. An empty [`CellValue::Text`] is a real value and is kept
/// distinct from that absence, even though both render as `""`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Text, rendered verbatim
    Text(String),

    /// Whole number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// Boolean, rendered numerically as `1` / `0`
    Boolean(bool),

    /// Any other value, kept as its debug description
    Other(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Capture an arbitrary value through its `Debug` description
    ///
    /// ```
    /// use tabgrid_core::CellValue;
    ///
    /// let v = CellValue::describe(&(1, 'x'));
    /// assert_eq!(v.render(), "(1, 'x')");
    /// ```
    pub fn describe<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        CellValue::Other(format!("{:?}", value))
    }

    /// Render the value as it appears in serialized output
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Check if the value is numeric (integer or float)
    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a float (integers are widened)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CellValue::Integer(n) => Some(*n as f64),
            CellValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Text(_) => "text",
            CellValue::Integer(_) => "integer",
            CellValue::Float(_) => "float",
            CellValue::Boolean(_) => "boolean",
            CellValue::Other(_) => "other",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{}", n),
            // `{}` on f64 is the shortest round-trip form: 2.0 -> "2", 0.1 -> "0.1"
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => f.write_str(if *b { "1" } else { "0" }),
            CellValue::Other(s) => f.write_str(s),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        CellValue::Float(f64::from(n))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&String> for CellValue {
    fn from(s: &String) -> Self {
        CellValue::text(s.as_str())
    }
}

impl From<char> for CellValue {
    fn from(c: char) -> Self {
        CellValue::Text(c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Integer(42));
        assert_eq!(CellValue::from(7u8), CellValue::Integer(7));
        assert_eq!(CellValue::from(3.25), CellValue::Float(3.25));
        assert_eq!(CellValue::from(true), CellValue::Boolean(true));
        assert_eq!(CellValue::from('x'), CellValue::text("x"));

        let s = CellValue::from("hello");
        assert_eq!(s.as_text(), Some("hello"));
    }

    #[test]
    fn test_render_numbers() {
        assert_eq!(CellValue::Integer(5).render(), "5");
        assert_eq!(CellValue::Integer(-12).render(), "-12");
        assert_eq!(CellValue::Float(3.5).render(), "3.5");
        assert_eq!(CellValue::Float(2.0).render(), "2");
        assert_eq!(CellValue::Float(0.1).render(), "0.1");
    }

    #[test]
    fn test_render_text_verbatim() {
        // No escaping of delimiters
        assert_eq!(CellValue::text("a\tb").render(), "a\tb");
        assert_eq!(CellValue::text("say \"hi\"").render(), "say \"hi\"");
        assert_eq!(CellValue::text("").render(), "");
    }

    #[test]
    fn test_render_boolean_and_other() {
        assert_eq!(CellValue::Boolean(true).render(), "1");
        assert_eq!(CellValue::Boolean(false).render(), "0");
        assert_eq!(CellValue::describe(&Some(3)).render(), "Some(3)");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(CellValue::Integer(4).as_float(), Some(4.0));
        assert_eq!(CellValue::Float(4.5).as_integer(), None);
        assert!(CellValue::Float(1.0).is_number());
        assert!(!CellValue::text("1").is_number());
        assert_eq!(CellValue::Boolean(false).as_bool(), Some(false));
        assert_eq!(CellValue::text("x").type_name(), "text");
    }
}
