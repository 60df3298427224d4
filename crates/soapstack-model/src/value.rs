//! Field value kinds supported by the envelope encoder.

use std::borrow::Cow;
use std::fmt;

/// A field value, drawn from the closed set of kinds the encoder can
/// render as XML character data.
///
/// Rendering conventions:
///
/// - Integers: plain base-10 digit sequences
/// - Strings: verbatim, with NO XML escaping (a value containing `<`
///   or `&` produces malformed XML; this is a documented limitation
///   of the wire format this crate reproduces)
/// - Booleans: lowercase `true`/`false`
/// - Floats: Rust's shortest decimal representation
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Signed integer.
    Int(i64),
    /// Character data.
    Str(String),
    /// Boolean.
    Bool(bool),
    /// Floating-point number.
    Float(f64),
}

impl FieldValue {
    /// Whether this value is the zero value for its kind.
    ///
    /// Zero values are what the `omitempty` modifier suppresses:
    /// `0`, the empty string, `false`, and `0.0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::Str(s) => s.is_empty(),
            Self::Bool(b) => !b,
            #[allow(clippy::float_cmp)]
            Self::Float(f) => *f == 0.0,
        }
    }

    /// Render this value as XML character data.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(v) => Cow::Owned(v.to_string()),
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Float(f) => Cow::Owned(f.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// Conversion into a [`FieldValue`].
///
/// The set of implementations closes the contract at compile time: a
/// record field whose type has no `ToFieldValue` impl fails to compile
/// instead of being stringified by best effort.
pub trait ToFieldValue {
    /// Convert a borrowed value into its [`FieldValue`] representation.
    fn to_field_value(&self) -> FieldValue;
}

macro_rules! impl_to_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )+
    };
}

impl_to_int!(i8, i16, i32, i64, u8, u16, u32);

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(f64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.to_owned())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.clone())
    }
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_detect_zero_values() {
        assert!(FieldValue::Int(0).is_empty());
        assert!(FieldValue::Str(String::new()).is_empty());
        assert!(FieldValue::Bool(false).is_empty());
        assert!(FieldValue::Float(0.0).is_empty());

        assert!(!FieldValue::Int(-1).is_empty());
        assert!(!FieldValue::Str(" ".to_owned()).is_empty());
        assert!(!FieldValue::Bool(true).is_empty());
        assert!(!FieldValue::Float(0.5).is_empty());
    }

    #[test]
    fn test_should_render_integers_as_base10() {
        assert_eq!(FieldValue::Int(30).as_text(), "30");
        assert_eq!(FieldValue::Int(-7).as_text(), "-7");
    }

    #[test]
    fn test_should_render_strings_verbatim() {
        // No escaping by design: character data passes through untouched.
        assert_eq!(FieldValue::Str("a<b&c".to_owned()).as_text(), "a<b&c");
    }

    #[test]
    fn test_should_render_booleans_lowercase() {
        assert_eq!(FieldValue::Bool(true).as_text(), "true");
        assert_eq!(FieldValue::Bool(false).as_text(), "false");
    }

    #[test]
    fn test_should_convert_supported_types() {
        assert_eq!(42_i32.to_field_value(), FieldValue::Int(42));
        assert_eq!(7_u16.to_field_value(), FieldValue::Int(7));
        assert_eq!("hi".to_field_value(), FieldValue::Str("hi".to_owned()));
        assert_eq!(true.to_field_value(), FieldValue::Bool(true));
        assert_eq!(1.5_f64.to_field_value(), FieldValue::Float(1.5));
    }
}
