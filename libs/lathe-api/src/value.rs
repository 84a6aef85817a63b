use std::fmt;

use crate::schema::DataType;

/// A cell after schema-directed coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Boolean(bool),
    Text(String),
}

/// Natural type of a [`Value`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Text,
}

impl Value {
    /// Parse `text` as the declared column type.
    ///
    /// Returns `None` when the text is not valid for a numeric or boolean
    /// type. Text columns never fail.
    pub fn parse(data_type: DataType, text: &str) -> Option<Self> {
        Some(match data_type {
            DataType::Int32 => Self::Int32(text.parse().ok()?),
            DataType::Int64 => Self::Int64(text.parse().ok()?),
            DataType::Float32 => Self::Float32(text.parse().ok()?),
            DataType::Float64 => Self::Float64(text.parse().ok()?),
            DataType::Boolean => Self::Boolean(parse_bool(text)?),
            DataType::Utf8 => Self::Text(text.to_string()),
        })
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int32(_) => ValueKind::Int32,
            Self::Int64(_) => ValueKind::Int64,
            Self::Float32(_) => ValueKind::Float32,
            Self::Float64(_) => ValueKind::Float64,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Text(_) => ValueKind::Text,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Case-insensitive `true` / `false`.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Typed accessor targets
// ---------------------------------------------------------------------------

/// Target of a primitive accessor: how to parse a present cell and what to
/// return for an absent one.
pub(crate) trait FromCell: Sized {
    const TARGET: &'static str;

    fn zero() -> Self;

    fn parse_cell(text: &str) -> Option<Self>;
}

macro_rules! numeric_from_cell {
    ($($ty:ty),*) => {
        $(
            impl FromCell for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn zero() -> Self {
                    0 as $ty
                }

                fn parse_cell(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

numeric_from_cell!(i8, i16, i32, i64, f32, f64);

impl FromCell for bool {
    const TARGET: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn parse_cell(text: &str) -> Option<Self> {
        parse_bool(text)
    }
}

/// Target of the type-directed object accessor.
///
/// Conversion is exact: a value converts only into the Rust type of its
/// own kind, so an `Int32` cell read as `i64` is a cast error.
pub trait FromValue: Sized {
    const TARGET: &'static str;

    /// Returns the value back unchanged when it is of another kind.
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! exact_from_value {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl FromValue for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

exact_from_value!(
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    bool => Boolean,
    String => Text
);

impl FromValue for Value {
    const TARGET: &'static str = "Value";

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}
