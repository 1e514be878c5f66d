//! Component values at the accessor boundary.
//!
//! Accessors hand back `Value`s; the synthesized methods compare, hash,
//! and render them with the boxed-value semantics of the surrounding
//! class-file world: all NaNs are equal to each other, positive and
//! negative zero are distinct, `null` hashes to 0 and renders as the
//! literal text `null`.

use std::fmt;
use std::sync::Arc;

/// Delegation point for reference-typed components: the component's own
/// equality, hash, and string conversion.
pub trait StructuralObject: Send + Sync {
    fn object_eq(&self, other: &dyn StructuralObject) -> bool;
    fn object_hash(&self) -> i32;
    fn render(&self) -> String;
}

/// A dynamically-typed component value.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Char(u16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(Arc<str>),
    Obj(Arc<dyn StructuralObject>),
}

/// Canonical bit pattern for a float, collapsing every NaN to one value
/// while keeping `+0.0` and `-0.0` distinct.
fn float_bits(v: f32) -> u32 {
    if v.is_nan() { 0x7fc0_0000 } else { v.to_bits() }
}

fn double_bits(v: f64) -> u64 {
    if v.is_nan() {
        0x7ff8_0000_0000_0000
    } else {
        v.to_bits()
    }
}

/// 31-fold hash over UTF-16 code units, wrapping i32 arithmetic.
fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32))
}

impl Value {
    /// Null-safe component equality.
    ///
    /// Both null is equal, exactly one null is unequal; primitives
    /// compare by value with boxed floating-point semantics; references
    /// delegate to their own equality. Components of different runtime
    /// kinds are never equal.
    pub fn component_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_bits(*a) == float_bits(*b),
            (Value::Double(a), Value::Double(b)) => double_bits(*a) == double_bits(*b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Obj(a), Value::Obj(b)) => a.object_eq(b.as_ref()),
            _ => false,
        }
    }

    /// Component hash, consistent with [`Value::component_eq`]: equal
    /// components hash equal. Each primitive kind uses its natural
    /// 32-bit hash; `Null` hashes to 0.
    pub fn component_hash(&self) -> i32 {
        match self {
            Value::Null => 0,
            Value::Bool(v) => {
                if *v {
                    1231
                } else {
                    1237
                }
            }
            Value::Byte(v) => i32::from(*v),
            Value::Short(v) => i32::from(*v),
            Value::Char(v) => i32::from(*v),
            Value::Int(v) => *v,
            Value::Long(v) => {
                let u = *v as u64;
                (u ^ (u >> 32)) as i32
            }
            Value::Float(v) => float_bits(*v) as i32,
            Value::Double(v) => {
                let bits = double_bits(*v);
                (bits ^ (bits >> 32)) as i32
            }
            Value::Str(s) => string_hash(s),
            Value::Obj(o) => o.object_hash(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Char(v) => {
                let c = char::from_u32(u32::from(*v)).unwrap_or(char::REPLACEMENT_CHARACTER);
                write!(f, "{c}")
            }
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Str(s) => f.write_str(s),
            Value::Obj(o) => f.write_str(&o.render()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("Null"),
            Value::Bool(v) => write!(f, "Bool({v})"),
            Value::Byte(v) => write!(f, "Byte({v})"),
            Value::Short(v) => write!(f, "Short({v})"),
            Value::Char(v) => write!(f, "Char({v})"),
            Value::Int(v) => write!(f, "Int({v})"),
            Value::Long(v) => write!(f, "Long({v})"),
            Value::Float(v) => write!(f, "Float({v})"),
            Value::Double(v) => write!(f, "Double({v})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Obj(o) => write!(f, "Obj({})", o.render()),
        }
    }
}
