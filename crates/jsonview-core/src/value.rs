//! The boundary between cursors and the underlying JSON engine.
//!
//! Documents are stored as `serde_json::Value` trees. A location that does not
//! exist is modelled as `None`, so the content of any location is an
//! `Option<Value>`: `None` is Missing, `Some(Value::Null)` is Null. Everything
//! in this module operates on that representation and never fails: coercion
//! misses fall back to the caller's default.

use serde_json::{Map, Number, Value};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Marker for "no value here".
///
/// Writing `Missing` to an object field removes the field, writing it to an
/// array slot removes the element. See [`Cursor::set`](crate::Cursor::set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Missing;

/// Conversion of native values into the content of a document location.
///
/// Returning `None` requests erasure of the target location.
pub trait IntoJson {
    fn into_json(self) -> Option<Value>;
}

impl IntoJson for Value {
    fn into_json(self) -> Option<Value> {
        Some(self)
    }
}

impl IntoJson for &Value {
    fn into_json(self) -> Option<Value> {
        Some(self.clone())
    }
}

impl IntoJson for Option<Value> {
    fn into_json(self) -> Option<Value> {
        self
    }
}

impl IntoJson for Missing {
    fn into_json(self) -> Option<Value> {
        None
    }
}

impl IntoJson for () {
    fn into_json(self) -> Option<Value> {
        Some(Value::Null)
    }
}

impl IntoJson for Vec<Value> {
    fn into_json(self) -> Option<Value> {
        Some(Value::Array(self))
    }
}

impl IntoJson for Map<String, Value> {
    fn into_json(self) -> Option<Value> {
        Some(Value::Object(self))
    }
}

macro_rules! into_json_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoJson for $ty {
                fn into_json(self) -> Option<Value> {
                    Some(Value::from(self))
                }
            }
        )*
    };
}

into_json_via_from!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, &str,
);

/// A number pulled out of a document for arithmetic.
///
/// Integers stay integers as long as the arithmetic does not overflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Coerce a location into a number. Numbers are taken as-is, strings are
    /// parsed, everything else is a coercion miss.
    pub(crate) fn coerce(value: Option<&Value>) -> Option<Num> {
        match value? {
            Value::Number(n) => Some(Num::from_number(n)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .map(Num::Int)
                    .or_else(|_| s.parse::<f64>().map(Num::Float))
                    .ok()
            }
            _ => None,
        }
    }

    fn from_number(n: &Number) -> Num {
        match n.as_i64() {
            Some(i) => Num::Int(i),
            None => Num::Float(n.as_f64().unwrap_or(0.0)),
        }
    }

    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Num::Int(i) => i as f64,
            Num::Float(f) => f,
        }
    }

    pub(crate) fn add(self, other: Num) -> Num {
        match (self, other) {
            (Num::Int(a), Num::Int(b)) => a
                .checked_add(b)
                .map(Num::Int)
                .unwrap_or(Num::Float(a as f64 + b as f64)),
            (a, b) => Num::Float(a.as_f64() + b.as_f64()),
        }
    }

    pub(crate) fn mul(self, other: Num) -> Num {
        match (self, other) {
            (Num::Int(a), Num::Int(b)) => a
                .checked_mul(b)
                .map(Num::Int)
                .unwrap_or(Num::Float(a as f64 * b as f64)),
            (a, b) => Num::Float(a.as_f64() * b.as_f64()),
        }
    }

    pub(crate) fn into_value(self) -> Value {
        match self {
            Num::Int(i) => Value::from(i),
            // Non-finite results have no JSON form and become null.
            Num::Float(f) => Value::from(f),
        }
    }
}

pub(crate) fn as_number(value: Option<&Value>, default: f64) -> f64 {
    Num::coerce(value).map(Num::as_f64).unwrap_or(default)
}

pub(crate) fn as_long(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().map(|f| f as i64).unwrap_or(default)),
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

pub(crate) fn as_int(value: Option<&Value>, default: i32) -> i32 {
    match value {
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i as i32,
            None => n.as_f64().map(|f| f as i32).unwrap_or(default),
        },
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

pub(crate) fn as_string(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

pub(crate) fn as_bool(value: Option<&Value>, default: bool) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        _ => default,
    }
}

/// `true` for empty arrays, empty objects, empty strings and every other
/// non-string scalar, Null and Missing.
pub(crate) fn is_empty(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Array(arr)) => arr.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::String(s)) => s.is_empty(),
        _ => true,
    }
}

/// Feed a location's content into `state` so that structurally equal
/// documents hash identically.
///
/// Object entries are combined with a commutative sum because `Value`
/// equality ignores key order.
pub(crate) fn hash_content<H: Hasher>(value: Option<&Value>, state: &mut H) {
    match value {
        None => 0u8.hash(state),
        Some(v) => hash_value(v, state),
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => 1u8.hash(state),
        Value::Bool(b) => {
            2u8.hash(state);
            b.hash(state);
        }
        Value::Number(n) => {
            3u8.hash(state);
            hash_number(n, state);
        }
        Value::String(s) => {
            4u8.hash(state);
            s.hash(state);
        }
        Value::Array(arr) => {
            5u8.hash(state);
            arr.len().hash(state);
            for item in arr {
                hash_value(item, state);
            }
        }
        Value::Object(map) => {
            6u8.hash(state);
            map.len().hash(state);
            let combined = map.iter().fold(0u64, |acc, (key, item)| {
                let mut entry = DefaultHasher::new();
                key.hash(&mut entry);
                hash_value(item, &mut entry);
                acc.wrapping_add(entry.finish())
            });
            combined.hash(state);
        }
    }
}

fn hash_number<H: Hasher>(n: &Number, state: &mut H) {
    if let Some(u) = n.as_u64() {
        (0u8, u).hash(state);
    } else if let Some(i) = n.as_i64() {
        (1u8, i).hash(state);
    } else {
        let f = n.as_f64().unwrap_or(0.0);
        // 0.0 and -0.0 compare equal.
        let f = if f == 0.0 { 0.0 } else { f };
        (2u8, f.to_bits()).hash(state);
    }
}
