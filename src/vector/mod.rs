//! The vector algebra behind the scripted `vector` type.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;


/// A failed attempt to build a vector from script-supplied arguments.
///
/// This is the shim's only error condition. It propagates to whatever runs
/// the script, since misusing the vector constructor is grade-relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("a vector needs exactly 3 components")]
    Arity { given: usize },
    #[error("component {index} ({kind}) can't be coerced to a float")]
    Coerce { index: usize, kind: &'static str },
}

/// An immutable three-component double-precision vector.
///
/// Every operation returns a new value; nothing mutates in place. Equality is
/// exact component-wise float equality with no tolerance, matching the
/// library being stood in for (rounding fragility included).
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vector {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
    /// Build a vector the way the scripted constructor does: exactly three
    /// numeric components, or a single existing vector to copy. Any other
    /// shape is a [`VectorError`].
    pub fn from_args(args: &[Value]) -> Result<Self, VectorError> {
        match args {
            [Value::Vector(v)] => Ok(*v),
            [x, y, z] => {
                let mut out = [0.0; 3];
                for (index, arg) in [x, y, z].into_iter().enumerate() {
                    out[index] = arg.as_number().ok_or(VectorError::Coerce {
                        index,
                        kind: arg.kind(),
                    })?;
                }
                let [x, y, z] = out;
                Ok(Self { x, y, z })
            }
            _ => Err(VectorError::Arity { given: args.len() }),
        }
    }
    pub const fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
    pub const fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
    pub const fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
    /// Scale every component. Operand order doesn't matter to the scripted
    /// API, so both [`Mul`] directions funnel here.
    pub const fn scale(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
    pub const fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
    pub const fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    /// Right-handed cross product.
    pub const fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
    /// Squared magnitude, computed directly rather than by squaring
    /// [`mag`](Self::mag) so the result isn't rounded twice.
    pub const fn mag2(self) -> f64 {
        self.dot(self)
    }
    pub fn mag(self) -> f64 {
        self.mag2().sqrt()
    }
    /// Unit vector in the same direction.
    ///
    /// The zero vector has no direction; this divides by a zero magnitude and
    /// the components come out NaN, which propagates like any other float.
    pub fn hat(self) -> Self {
        self.div(self.mag())
    }
    /// Other spelling of [`hat`](Self::hat); the scripted API has both.
    pub fn norm(self) -> Self {
        self.hat()
    }
}
impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Self) -> Self::Output {
        self.add(rhs)
    }
}
impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output {
        self.sub(rhs)
    }
}
impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Self::Output {
        self.neg()
    }
}
impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
impl Mul<Vector> for f64 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Self::Output {
        rhs.scale(self)
    }
}
impl Div<f64> for Vector {
    type Output = Vector;
    fn div(self, rhs: f64) -> Self::Output {
        self.div(rhs)
    }
}
/// `<x, y, z>` with each component at six significant digits, exactly as the
/// real library prints. Snapshot-based grading compares against this form.
impl Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {}, {}>",
            fmt_g6(self.x),
            fmt_g6(self.y),
            fmt_g6(self.z)
        )
    }
}

// General format at six significant digits: trailing zeros stripped,
// exponent notation outside [1e-4, 1e6) with a sign and at least two
// exponent digits ("1e+06", "1.5e-05").
fn fmt_g6(v: f64) -> String {
    if v == 0.0 {
        return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
    }
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let sci = format!("{v:.5e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        unreachable!("{{:e}} always contains an exponent")
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if !(-4..6).contains(&exp) {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
    } else {
        let prec = (5 - exp).max(0) as usize;
        let fixed = format!("{v:.prec$}");
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }
}

/// Free-function spellings of the vector operations. The scripted API exposes
/// both `v.mag()` and `mag(v)`; these resolve to the same code as the methods.
pub const fn dot(a: Vector, b: Vector) -> f64 {
    a.dot(b)
}
pub const fn cross(a: Vector, b: Vector) -> Vector {
    a.cross(b)
}
pub fn mag(v: Vector) -> f64 {
    v.mag()
}
pub const fn mag2(v: Vector) -> f64 {
    v.mag2()
}
pub fn hat(v: Vector) -> Vector {
    v.hat()
}
pub fn norm(v: Vector) -> Vector {
    v.hat()
}
