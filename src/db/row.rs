use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, Index, RangeBounds},
};

use tracing::trace;

use super::schema::Schema;
use crate::{Result, RowError, Value};

/// An immutable result row: a fixed tuple of values addressed by position or
/// by field name.
///
/// The row owns its values and shares its [`Schema`] with every other row
/// built from the same schema. Nothing about a row can change once it has
/// been constructed.
///
/// # Example
///
/// ```
/// use db_row::{Row, Value};
///
/// let row = Row::from_fields(["id", "name"], [Value::from(1), Value::from("Alice")])?;
///
/// assert_eq!(row.get_by_index(0)?, &Value::Int64(1));
/// assert_eq!(row.get_by_index(-1)?, &Value::from("Alice"));
/// assert_eq!(row.get_by_name("name")?, &Value::from("Alice"));
/// assert_eq!(row.len(), 2);
/// assert_eq!(row.to_string(), "(id=1, name=Alice)");
/// # Ok::<(), db_row::RowError>(())
/// ```
#[derive(Clone)]
pub struct Row {
    schema: Schema,
    values: Box<[Value]>,
}

/// Maps a possibly negative index onto `[0, len)`.
fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok()?;
    let pos = if index < 0 { index + len } else { index };
    (0..len).contains(&pos).then_some(pos as usize)
}

/// Resolves a negative slice bound against `len` without clamping.
fn resolve_bound(bound: isize, len: usize) -> isize {
    let len = len as isize;
    if bound < 0 { bound.saturating_add(len) } else { bound }
}

impl Row {
    /// Creates a row over `schema`.
    ///
    /// Fails with [`RowError::SchemaMismatch`] when `values` does not hold
    /// exactly one value per field.
    pub fn new(schema: Schema, values: Vec<Value>) -> Result<Self> {
        if schema.len() != values.len() {
            trace!(
                expected = schema.len(),
                actual = values.len(),
                "rejected row with mismatched value count"
            );
            return Err(RowError::SchemaMismatch {
                expected: schema.len(),
                actual: values.len(),
            });
        }

        Ok(Self {
            schema,
            values: values.into_boxed_slice(),
        })
    }

    /// Creates a row from field names and values, building a fresh schema.
    ///
    /// Prefer [`Schema::row`] when producing many rows with the same fields,
    /// so that they share one schema.
    pub fn from_fields<N, S, I, V>(names: N, values: I) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Schema::new(names).row(values)
    }

    /// Gets the value at `index`, counting from the end when negative.
    pub fn get_by_index(&self, index: isize) -> Result<&Value> {
        normalize_index(index, self.values.len())
            .map(|pos| &self.values[pos])
            .ok_or(RowError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Gets the value of the first field named exactly `name`.
    pub fn get_by_name(&self, name: &str) -> Result<&Value> {
        self.field(name).ok_or_else(|| RowError::UnknownField(name.to_owned()))
    }

    /// Gets a reference to the value at the given column index.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Gets the value of the first field named exactly `name`, if any.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.schema.position(name).map(|pos| &self.values[pos])
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.schema.contains(name)
    }

    /// Finds the first position of a field by name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.schema.position(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in field order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.values.to_vec()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values.into_vec()
    }

    /// The field names, shared with every row of the same schema.
    pub fn field_names(&self) -> &[String] {
        self.schema.fields()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Iterates `(field name, value)` pairs in field order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.schema
            .fields()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    /// Copies the row into a map keyed by field name.
    ///
    /// When a name repeats, the value at its first position is kept.
    pub fn to_map(&self) -> BTreeMap<String, Value> {
        let mut map = BTreeMap::new();
        for (name, value) in self.items() {
            map.entry(name.to_owned()).or_insert_with(|| value.clone());
        }
        map
    }

    /// Tuple-style slicing: negative bounds count from the end, out of range
    /// bounds are clamped, and an inverted range is empty.
    ///
    /// ```
    /// use db_row::{Row, Value};
    ///
    /// let row = Row::from_fields(["a", "b", "c"], [1, 2, 3])?;
    /// assert_eq!(row.slice(1..), &[Value::Int64(2), Value::Int64(3)]);
    /// assert_eq!(row.slice(..-1), &[Value::Int64(1), Value::Int64(2)]);
    /// assert!(row.slice(5..).is_empty());
    /// # Ok::<(), db_row::RowError>(())
    /// ```
    pub fn slice<R: RangeBounds<isize>>(&self, range: R) -> &[Value] {
        let len = self.values.len();

        let start = match range.start_bound() {
            Bound::Included(&s) => resolve_bound(s, len),
            Bound::Excluded(&s) => resolve_bound(s, len).saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => resolve_bound(e, len).saturating_add(1),
            Bound::Excluded(&e) => resolve_bound(e, len),
            Bound::Unbounded => len as isize,
        };

        let start = start.clamp(0, len as isize) as usize;
        let end = end.clamp(0, len as isize) as usize;
        if start >= end {
            &[]
        } else {
            &self.values[start..end]
        }
    }
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.schema == other.schema
    }
}

impl Eq for Row {}

/// Only the values are hashed; rows that are equal have equal values.
impl Hash for Row {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl Ord for Row {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values
            .cmp(&other.values)
            .then_with(|| self.field_names().cmp(other.field_names()))
    }
}

impl PartialOrd for Row {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("fields", &self.field_names())
            .field("values", &self.values)
            .finish()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (name, value)) in self.items().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for Row {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl Index<&str> for Row {
    type Output = Value;

    fn index(&self, name: &str) -> &Value {
        match self.field(name) {
            Some(value) => value,
            None => panic!("unknown field: {name}"),
        }
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_values().into_iter()
    }
}
