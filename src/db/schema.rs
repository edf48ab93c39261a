use std::{
    collections::HashMap,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use tracing::debug;

use super::row::Row;
use crate::{Result, Value};

/// The ordered field names shared by every row produced together.
///
/// A schema is cheap to clone: clones share the same name list, so a query
/// producing many rows pays for its field names once. Name lookup goes
/// through an index built at construction; when a name appears more than
/// once the first position wins.
#[derive(Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

#[derive(Debug)]
struct SchemaInner {
    fields: Box<[String]>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Creates a schema from an ordered list of field names.
    ///
    /// Duplicate names are accepted.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Box<[String]> = names.into_iter().map(Into::into).collect();

        let mut index = HashMap::with_capacity(fields.len());
        let mut duplicates = Vec::new();
        for (pos, name) in fields.iter().enumerate() {
            if index.contains_key(name) {
                duplicates.push(name.as_str());
            } else {
                index.insert(name.clone(), pos);
            }
        }

        if !duplicates.is_empty() {
            debug!(
                ?duplicates,
                "schema has duplicate field names, lookups resolve to the first occurrence"
            );
        }

        Self {
            inner: Arc::new(SchemaInner { fields, index }),
        }
    }

    /// Returns the field names in order.
    pub fn fields(&self) -> &[String] {
        &self.inner.fields
    }

    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Finds the first position of a field by exact, case-sensitive name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.inner.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.index.contains_key(name)
    }

    /// Returns true if both schemas share the same storage.
    pub fn ptr_eq(&self, other: &Schema) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Builds a row over this schema.
    ///
    /// Fails with [`RowError::SchemaMismatch`](crate::RowError::SchemaMismatch)
    /// when the number of values differs from the number of fields.
    pub fn row<I, V>(&self, values: I) -> Result<Row>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Row::new(self.clone(), values.into_iter().map(Into::into).collect())
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.fields() == other.fields()
    }
}

impl Eq for Schema {}

impl Hash for Schema {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields().hash(state);
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Schema").field(&self.fields()).finish()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.fields().join(", "))
    }
}

impl<S: Into<String>> FromIterator<S> for Schema {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Schema::new(iter)
    }
}

impl From<Vec<String>> for Schema {
    fn from(names: Vec<String>) -> Self {
        Schema::new(names)
    }
}

impl From<&[&str]> for Schema {
    fn from(names: &[&str]) -> Self {
        Schema::new(names.iter().copied())
    }
}
