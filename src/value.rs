use std::borrow::Cow;
use std::fmt;

/// Convenience alias for float conversions.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Dynamic cell value. [`Value::Null`] marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    UInt(u32),
    Float(f32),
    Double(f64),
    Bool(bool),
    Str(String),
    Null,
}

/// Enumerates the underlying type stored in a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Long,
    UInt,
    Float,
    Double,
    Bool,
    Str,
    Null,
}

/// Raised when a value cannot be interpreted as a floating-point number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert {kind} value '{repr}' to float")]
pub struct ConversionError {
    pub kind: ValueKind,
    pub repr: String,
}

impl ConversionError {
    pub fn new(kind: ValueKind, repr: impl Into<String>) -> Self {
        Self {
            kind,
            repr: repr.into(),
        }
    }
}

impl Value {
    /// Returns the [`ValueKind`] describing the contained value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Long(_) => ValueKind::Long,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
            Value::Bool(_) => ValueKind::Bool,
            Value::Str(_) => ValueKind::Str,
            Value::Null => ValueKind::Null,
        }
    }

    /// Returns a human readable label for the contained value.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// `Null` or a floating-point NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Float(v) => v.is_nan(),
            Value::Double(v) => v.is_nan(),
            _ => false,
        }
    }

    /// Interprets the value as an `f64`.
    ///
    /// Numbers widen, booleans map to `1.0`/`0.0` and strings are parsed after
    /// trimming whitespace. `Null` and unparseable strings are rejected.
    pub fn to_f64(&self) -> ConversionResult<f64> {
        match self {
            Value::Int(v) => Ok(f64::from(*v)),
            Value::Long(v) => Ok(*v as f64),
            Value::UInt(v) => Ok(f64::from(*v)),
            Value::Float(v) => Ok(f64::from(*v)),
            Value::Double(v) => Ok(*v),
            Value::Bool(v) => Ok(if *v { 1.0 } else { 0.0 }),
            Value::Str(s) => parse_float(s),
            Value::Null => Err(ConversionError::new(ValueKind::Null, "null")),
        }
    }
}

pub(crate) fn parse_float(text: &str) -> ConversionResult<f64> {
    let parsed = strip_digit_separators(text.trim()).and_then(|digits| digits.parse::<f64>().ok());
    log::trace!("parse '{}' as float: {:?}", text, parsed);
    parsed.ok_or_else(|| ConversionError::new(ValueKind::Str, text))
}

/// Drops `_` digit separators. `None` unless every `_` sits between two digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let separated = bytes.iter().enumerate().all(|(idx, &b)| {
        b != b'_'
            || (idx > 0
                && bytes[idx - 1].is_ascii_digit()
                && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit))
    });
    separated.then(|| Cow::Owned(text.replace('_', "")))
}

impl ValueKind {
    /// Returns a lower-case name for the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Bool => "bool",
            ValueKind::Str => "str",
            ValueKind::Null => "null",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::UInt(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{:.2}", v),
            Value::Double(v) => write!(f, "{:.4}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::Null => write!(f, "null"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_from!(Int, i32);
impl_from!(Long, i64);
impl_from!(UInt, u32);
impl_from!(Float, f32);
impl_from!(Double, f64);
impl_from!(Bool, bool);
impl_from!(Str, String);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_try_from_value {
    ($ty:ty, $variant:ident) => {
        impl TryFrom<Value> for $ty {
            type Error = Value;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                if let Value::$variant(inner) = value {
                    Ok(inner)
                } else {
                    Err(value)
                }
            }
        }
    };
}

impl_try_from_value!(i32, Int);
impl_try_from_value!(i64, Long);
impl_try_from_value!(u32, UInt);
impl_try_from_value!(f32, Float);
impl_try_from_value!(f64, Double);
impl_try_from_value!(bool, Bool);
impl_try_from_value!(String, Str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_trims_whitespace() {
        assert_eq!(parse_float("  12.5\n"), Ok(12.5));
        assert_eq!(parse_float("-1e3"), Ok(-1000.0));
    }

    #[test]
    fn parse_float_accepts_digit_separators() {
        assert_eq!(parse_float("1_000"), Ok(1000.0));
        assert_eq!(parse_float(" 1_000.2_5 "), Ok(1000.25));
        assert!(parse_float("_1000").is_err());
        assert!(parse_float("1000_").is_err());
        assert!(parse_float("1__000").is_err());
        assert!(parse_float("1_.5").is_err());
    }

    #[test]
    fn nan_counts_as_missing() {
        assert!(Value::Double(f64::NAN).is_missing());
        assert!(Value::Float(f32::NAN).is_missing());
        assert!(Value::Null.is_missing());
        assert!(!Value::Double(0.0).is_missing());
        assert!(!Value::Str("NaN".into()).is_missing());
    }

    #[test]
    fn parse_float_keeps_original_text_in_error() {
        let err = parse_float(" abc ").unwrap_err();
        assert_eq!(err.kind, ValueKind::Str);
        assert_eq!(err.repr, " abc ");
    }
}
