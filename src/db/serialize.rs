//! `serde` support for [`Schema`] and [`Row`].
//!
//! A schema serializes as its list of field names. A row serializes as
//! `{ "fields": [...], "values": [...] }` and is rebuilt through
//! [`Row::new`] on the way back in, so mismatched lengths are rejected.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use super::{row::Row, schema::Schema};
use crate::Value;

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.fields())
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(Schema::new)
    }
}

#[derive(Serialize)]
struct RowRef<'a> {
    fields: &'a Schema,
    values: &'a [Value],
}

#[derive(Deserialize)]
struct RowRepr {
    fields: Schema,
    values: Vec<Value>,
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RowRef {
            fields: self.schema(),
            values: self.values(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Row {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RowRepr::deserialize(deserializer)?;
        Row::new(repr.fields, repr.values).map_err(D::Error::custom)
    }
}
