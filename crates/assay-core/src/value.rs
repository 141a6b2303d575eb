//! Dynamic values compared by the predicate library.
//!
//! Predicates work over a small script-like value model: two empty
//! sentinels (`undefined` and `null`), loose truthiness, a NaN-carrying
//! number type, and two flavours of equality. Loose equality coerces
//! between variants; strict equality never does.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// String-keyed record used by the structural predicates.
pub type Record = BTreeMap<String, Value>;

static UNDEFINED: Value = Value::Undefined;

/// A dynamically typed value.
///
/// `PartialEq` is strict equality: same variant, equal payload, with
/// IEEE semantics for numbers (`NaN != NaN`, `0 == -0`).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The "no value" sentinel.
    #[default]
    Undefined,
    /// The null sentinel.
    Null,
    /// Boolean.
    Bool(bool),
    /// IEEE-754 double.
    Number(f64),
    /// String.
    String(String),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Key-value record.
    Object(Record),
}

impl Value {
    /// Builds an array value.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds an object value.
    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Loose truthiness.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy.
    /// Empty arrays and objects are truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }

    /// Returns true for `undefined` and `null`.
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Numeric coercion.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::String(s) => parse_number(s),
            Self::Array(_) | Self::Object(_) => parse_number(&self.to_string()),
        }
    }

    /// Strict equality: no coercion between variants.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Loose equality with coercion between variants.
    #[must_use]
    pub fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_nullish() || b.is_nullish() => a.is_nullish() && b.is_nullish(),
            (Self::Number(a), Self::String(_)) => *a == other.to_number(),
            (Self::String(_), Self::Number(b)) => self.to_number() == *b,
            (Self::Bool(_), _) => Self::Number(self.to_number()).loose_eq(other),
            (_, Self::Bool(_)) => self.loose_eq(&Self::Number(other.to_number())),
            (Self::Array(_) | Self::Object(_), Self::Number(_) | Self::String(_)) => {
                Self::String(self.to_string()).loose_eq(other)
            }
            (Self::Number(_) | Self::String(_), Self::Array(_) | Self::Object(_)) => {
                self.loose_eq(&Self::String(other.to_string()))
            }
            _ => self.strict_eq(other),
        }
    }

    /// Relational comparison.
    ///
    /// Two strings compare lexicographically; anything else is compared
    /// numerically. `None` means the operands are unordered (a NaN was
    /// involved) and every relation is false.
    #[must_use]
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.to_primitive(), other.to_primitive());
        if let (Self::String(x), Self::String(y)) = (&a, &b) {
            return Some(x.cmp(y));
        }
        a.to_number().partial_cmp(&b.to_number())
    }

    /// Returns the elements of an array value.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the fields of an object value.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Record> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Property lookup; missing keys and non-objects yield `undefined`.
    #[must_use]
    pub fn property(&self, key: &str) -> &Self {
        self.as_object()
            .and_then(|fields| fields.get(key))
            .unwrap_or(&UNDEFINED)
    }

    /// Converts to JSON.
    ///
    /// Returns `None` for a top-level `undefined` or any non-finite number.
    /// Nested `undefined` becomes `null` inside arrays and is dropped from
    /// objects.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        use serde_json::Value as Json;
        match self {
            Self::Undefined => None,
            Self::Null => Some(Json::Null),
            Self::Bool(b) => Some(Json::Bool(*b)),
            Self::Number(n) => number_to_json(*n),
            Self::String(s) => Some(Json::String(s.clone())),
            Self::Array(items) => items
                .iter()
                .map(|item| match item {
                    Self::Undefined => Some(Json::Null),
                    other => other.to_json(),
                })
                .collect::<Option<Vec<_>>>()
                .map(Json::Array),
            Self::Object(fields) => {
                let mut map = serde_json::Map::new();
                for (key, value) in fields {
                    if matches!(value, Self::Undefined) {
                        continue;
                    }
                    map.insert(key.clone(), value.to_json()?);
                }
                Some(Json::Object(map))
            }
        }
    }

    fn to_primitive(&self) -> Self {
        match self {
            Self::Array(_) | Self::Object(_) => Self::String(self.to_string()),
            other => other.clone(),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust's float parser also accepts "inf" and "nan", which must stay NaN here.
        t if t
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) =>
        {
            t.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

fn number_to_json(n: f64) -> Option<serde_json::Value> {
    // Integral values within the exactly-representable range encode as integers.
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Some(serde_json::Value::from(n as i64))
    } else {
        serde_json::Number::from_f64(n).map(serde_json::Value::Number)
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form carries an explicit sign: 1e+21, 1.5e-7.
        let text = format!("{n:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
            _ => f.write_str(&text),
        }
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => fmt_number(*n, f),
            Self::String(s) => f.write_str(s),
            Self::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nullish() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
        }
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::array(items)
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::array(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<Record> for Value {
    fn from(fields: Record) -> Self {
        Self::Object(fields)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::array(items),
            Json::Object(fields) => Self::object(fields),
        }
    }
}
