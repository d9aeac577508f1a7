use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Some kind of value a script can pass into or read back out of the shim.
///
/// Scripts written against the real visualization API hand primitives numbers,
/// booleans, strings, vectors, and lists of any of those; everything they pass
/// has to be representable here so a construction call never fails on shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Str(String),
    Vector(Vector),
    List(Vec<Value>),
}
impl Value {
    /// Coerce to a float the way the scripted language's `float()` does:
    /// numbers pass through, booleans map to 0/1, strings are parsed.
    /// Vectors and lists have no numeric reading.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self { Some(*b) } else { None }
    }
    pub const fn as_vector(&self) -> Option<Vector> {
        if let Self::Vector(v) = self { Some(*v) } else { None }
    }
    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(s) = self { Some(s.as_str()) } else { None }
    }
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Vector(_) => "vector",
            Self::List(_) => "list",
        }
    }
}
macro_rules! impl_from_number {
    () => {};
    ($ty:ty $(, $rest:ty)*) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Self::Number(v as f64)
            }
        }
        impl_from_number!($($rest),*);
    };
}
impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}
impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
