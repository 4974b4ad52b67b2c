/// Typed link parameters
///
/// A closed value type replaces a loose key/value bag: every parameter is a
/// scalar, a list of scalars, or explicitly unset. Insertion order is kept
/// because it decides the order of the generated query string.
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{}", value),
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Float(value) => write_float(f, *value),
            Scalar::String(value) => f.write_str(value),
        }
    }
}

/// Writes a float the way browsers stringify numbers
///
/// `NaN`, `Infinity` and `-Infinity` for non-finite values; exponent form
/// (`1e+21`, `1.5e-7`) outside `[1e-6, 1e21)`; plain decimals otherwise.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }

    if value == 0.0 {
        // -0.0 included
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{:e}", value);
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&exponent_form),
        };
    }

    write!(f, "{}", value)
}

/// Value bound to a parameter name
///
/// `Null` marks a parameter that was passed without a value. It is treated
/// exactly like a missing key: optional groups are dropped and the key is
/// left out of the query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

macro_rules! param_from {
    ($($ty:ty => |$value:ident| $scalar:expr),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from($value: $ty) -> Self {
                    $scalar
                }
            }

            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

param_from! {
    i8 => |value| Scalar::Integer(value.into()),
    i16 => |value| Scalar::Integer(value.into()),
    i32 => |value| Scalar::Integer(value.into()),
    i64 => |value| Scalar::Integer(value),
    u8 => |value| Scalar::Integer(value.into()),
    u16 => |value| Scalar::Integer(value.into()),
    u32 => |value| Scalar::Integer(value.into()),
    f32 => |value| Scalar::Float(value.into()),
    f64 => |value| Scalar::Float(value),
    bool => |value| Scalar::Bool(value),
    &str => |value| Scalar::String(value.to_string()),
    String => |value| Scalar::String(value),
    &String => |value| Scalar::String(value.clone()),
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        ParamValue::Scalar(value)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

/// Ordered parameter map passed to `link()`
///
/// # Examples
///
/// ```
/// use rhtmx_links::{LinkParams, ParamValue};
///
/// let params = LinkParams::new()
///     .with("lang", "rust")
///     .with("page", 2)
///     .with("tags", vec!["a", "b"]);
///
/// assert_eq!(params.len(), 3);
/// assert!(params.is_present("lang"));
/// assert!(matches!(params.get("tags"), Some(ParamValue::List(_))));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkParams(IndexMap<String, ParamValue>);

impl LinkParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter (builder style)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a parameter, keeping the original position if it already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Returns the value only if it is bound to something other than `Null`
    pub fn get_present(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.get_present(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LinkParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
