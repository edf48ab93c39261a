use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A value held in one slot of a [`Row`](crate::Row).
///
/// Unlike SQL, `Value` has total equality and ordering so that rows can be
/// used as set members and map keys. Floats compare by [`f64::total_cmp`]
/// after folding `-0.0` into `0.0` and every NaN into a single NaN, which
/// makes `NaN == NaN`. Values of different variants are never equal and
/// order by variant: `Null < Bool < Int64 < Float64 < Text < Bytes`.
///
/// # Example
///
/// ```
/// use db_row::Value;
///
/// assert_eq!(Value::from(42), Value::Int64(42));
/// assert_eq!(Value::from("Alice"), Value::Text("Alice".to_string()));
/// assert_eq!(Value::from(None::<i64>), Value::Null);
/// assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Absence of data.
    Null,

    /// A boolean value.
    Bool(bool),

    /// A 64-bit signed integer.
    Int64(i64),

    /// A 64-bit floating point number.
    Float64(f64),

    /// A UTF-8 text string.
    Text(String),

    /// Raw binary data.
    Bytes(Vec<u8>),
}

/// Folds the float encodings that should be indistinguishable as row values.
fn canonical_f64(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl Value {
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int64(_) => 2,
            Value::Float64(_) => 3,
            Value::Text(_) => 4,
            Value::Bytes(_) => 5,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(f) => Some(*f),
            Value::Int64(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float64(a), Value::Float64(b)) => {
                canonical_f64(*a).total_cmp(&canonical_f64(*b))
            }
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int64(i) => i.hash(state),
            Value::Float64(f) => canonical_f64(*f).to_bits().hash(state),
            Value::Text(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int64(i) => write!(f, "{}", i),
            Value::Float64(fl) => write!(f, "{}", fl),
            Value::Text(s) => write!(f, "{}", s),
            Value::Bytes(bytes) => {
                write!(f, "x'")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "'")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int64(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_float_equality_is_total() {
        assert_eq!(Value::Float64(f64::NAN), Value::Float64(f64::NAN));
        assert_eq!(Value::Float64(-f64::NAN), Value::Float64(f64::NAN));
        assert_eq!(Value::Float64(0.0), Value::Float64(-0.0));
        assert_ne!(Value::Float64(1.0), Value::Float64(2.0));
    }

    #[test]
    fn test_equal_values_hash_together() {
        let mut set = HashSet::new();
        set.insert(Value::Float64(f64::NAN));
        set.insert(Value::Float64(-0.0));
        set.insert(Value::Float64(0.0));
        set.insert(Value::Float64(f64::NAN));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_different_variants_are_not_equal() {
        assert_ne!(Value::Int64(1), Value::Float64(1.0));
        assert_ne!(Value::Text("1".to_string()), Value::Int64(1));
        assert_ne!(Value::Null, Value::Bool(false));
    }

    #[test]
    fn test_ordering_across_variants() {
        let mut values = vec![
            Value::Bytes(vec![1]),
            Value::Text("a".to_string()),
            Value::Float64(0.5),
            Value::Int64(7),
            Value::Bool(true),
            Value::Null,
        ];
        values.sort();

        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::Int64(7),
                Value::Float64(0.5),
                Value::Text("a".to_string()),
                Value::Bytes(vec![1]),
            ]
        );
    }

    #[test]
    fn test_ordering_within_variant() {
        assert!(Value::Int64(-1) < Value::Int64(3));
        assert!(Value::Float64(1.5) < Value::Float64(f64::NAN));
        assert!(Value::Text("abc".to_string()) < Value::Text("abd".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "NULL");
        assert_eq!(Value::Int64(-4).to_string(), "-4");
        assert_eq!(Value::Float64(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("Alice".to_string()).to_string(), "Alice");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bytes(vec![0x0a, 0xff]).to_string(), "x'0aff'");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(5i32), Value::Int64(5));
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(&b"ab"[..]), Value::Bytes(vec![b'a', b'b']));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int64(3).as_i64(), Some(3));
        assert_eq!(Value::Int64(3).as_f64(), Some(3.0));
        assert_eq!(Value::Text("t".to_string()).as_str(), Some("t"));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Bytes(vec![1]).as_bytes(), Some(&[1u8][..]));
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.as_i64(), None);
    }
}
