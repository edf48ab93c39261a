pub mod row;
pub mod schema;
#[cfg(feature = "serde")]
mod serialize;
