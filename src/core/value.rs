/*!
 * Element Values
 * Heterogeneous element type with shared nested-sequence handles
 */

use crate::core::errors::{ListError, ListResult};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a nested sequence.
///
/// Cloning the handle aliases the underlying storage; `Value::fresh_copy`
/// breaks the alias one level deep.
pub type ListHandle = Arc<RwLock<Vec<Value>>>;

/// Complex number participating in summation but not ordering
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    #[must_use]
    pub fn div(self, other: Self) -> Self {
        let denom = other.re * other.re + other.im * other.im;
        Self::new(
            (self.re * other.re + self.im * other.im) / denom,
            (self.im * other.re - self.re * other.im) / denom,
        )
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "({}{}i)", self.re, self.im)
        } else {
            write!(f, "({}+{}i)", self.re, self.im)
        }
    }
}

/// Heterogeneous element value
///
/// `List` is a shared handle: `clone` aliases the nested storage, which is
/// exactly the pitfall the container's defensive copy pass guards against.
/// `Null` is the designated absence sentinel.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Complex(Complex),
    Str(String),
    List(ListHandle),
}

impl Value {
    /// Build a nested list value with a fresh handle
    #[must_use]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items)))
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Numeric values participate in elementwise arithmetic and averaging
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::Complex(_))
    }

    /// Numeric zero check, used to reject zero divisors
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::Complex(c) => c.is_zero(),
            _ => false,
        }
    }

    /// Type label for error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Complex(_) => "complex",
            Value::Str(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// One-level defensive copy.
    ///
    /// For a `List` value this reseats the element behind a fresh handle over
    /// a cloned element vector, breaking aliasing with the argument. Elements
    /// of the nested list are cloned as values, so lists nested deeper than
    /// one level keep their shared handles (not specially copied).
    #[must_use]
    pub fn fresh_copy(&self) -> Value {
        match self {
            Value::List(handle) => Value::list(handle.read().clone()),
            other => other.clone(),
        }
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    fn as_complex(&self) -> Option<Complex> {
        match self {
            Value::Int(i) => Some(Complex::new(*i as f64, 0.0)),
            Value::Float(f) => Some(Complex::new(*f, 0.0)),
            Value::Complex(c) => Some(*c),
            _ => None,
        }
    }

    fn non_numeric(&self, other: &Value) -> ListError {
        let offender = if self.is_numeric() { other } else { self };
        ListError::NonNumeric(offender.type_name().to_string())
    }

    /// Elementwise addition with numeric promotion (int stays int, any float
    /// promotes to float, any complex promotes to complex)
    pub fn try_add(&self, other: &Value) -> ListResult<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                match (self.as_complex(), other.as_complex()) {
                    (Some(a), Some(b)) => Ok(Value::Complex(a.add(b))),
                    _ => Err(self.non_numeric(other)),
                }
            }
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Ok(Value::Float(a + b)),
                _ => Err(self.non_numeric(other)),
            },
        }
    }

    /// Elementwise subtraction, same promotion rules as `try_add`
    pub fn try_sub(&self, other: &Value) -> ListResult<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_sub(*b))),
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                match (self.as_complex(), other.as_complex()) {
                    (Some(a), Some(b)) => Ok(Value::Complex(a.sub(b))),
                    _ => Err(self.non_numeric(other)),
                }
            }
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Ok(Value::Float(a - b)),
                _ => Err(self.non_numeric(other)),
            },
        }
    }

    /// Elementwise multiplication, same promotion rules as `try_add`
    pub fn try_mul(&self, other: &Value) -> ListResult<Value> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_mul(*b))),
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                match (self.as_complex(), other.as_complex()) {
                    (Some(a), Some(b)) => Ok(Value::Complex(a.mul(b))),
                    _ => Err(self.non_numeric(other)),
                }
            }
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Ok(Value::Float(a * b)),
                _ => Err(self.non_numeric(other)),
            },
        }
    }

    /// True division: integer operands still divide into a float
    pub fn try_div(&self, other: &Value) -> ListResult<Value> {
        if other.is_zero() {
            return Err(ListError::DivideByZero);
        }
        match (self, other) {
            (Value::Complex(_), _) | (_, Value::Complex(_)) => {
                match (self.as_complex(), other.as_complex()) {
                    (Some(a), Some(b)) => Ok(Value::Complex(a.div(b))),
                    _ => Err(self.non_numeric(other)),
                }
            }
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => Ok(Value::Float(a / b)),
                _ => Err(self.non_numeric(other)),
            },
        }
    }

    /// Natural ordering where one exists.
    ///
    /// Int and float compare across types; bools compare with bools and
    /// strings with strings. Complex, null, and list values are unordered,
    /// as is any cross-type pair.
    #[must_use]
    pub fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                (*a as f64) == *b
            }
            (Value::Complex(a), Value::Complex(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                // Alias check first: also avoids locking the same handle twice
                Arc::ptr_eq(a, b) || *a.read() == *b.read()
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Complex> for Value {
    fn from(v: Complex) -> Self {
        Value::Complex(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::list(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Complex(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
            Value::List(handle) => {
                write!(f, "[")?;
                for (i, item) in handle.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
