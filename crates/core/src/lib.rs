//! Tessera Core - Core types for the Tessera in-memory store.
//!
//! This crate provides the foundational types shared by every layer:
//!
//! - `Value`: Dynamically typed field values (Null, Boolean, Int64, Float64, String, Array, Object)
//! - `DataType`: The kind of a `Value`
//! - `Record`: A field map with a system-assigned identifier
//! - `IdSequence`: Per-table monotonically increasing identifier generator
//! - `Error`: Error types for store operations
//!
//! # Example
//!
//! ```rust
//! use tessera_core::{Fields, IdSequence, Record, Value, ID_FIELD};
//!
//! let mut model = Fields::new();
//! model.insert("active".into(), Value::from(true));
//!
//! let mut datum = Fields::new();
//! datum.insert("name".into(), Value::from("Alice"));
//!
//! let mut ids = IdSequence::new();
//! let record = Record::new(ids.next_id(), &model, &datum);
//!
//! assert_eq!(record.id(), 1);
//! assert_eq!(record.get("name"), Some(&Value::from("Alice")));
//! assert_eq!(record.get("active"), Some(&Value::from(true)));
//! assert_eq!(record.get(ID_FIELD), Some(&Value::Int64(1)));
//! ```

mod error;
mod record;
mod types;
mod value;

pub use error::{Error, Result};
pub use record::{merge_fields, project_fields, Fields, IdSequence, Record, RecordId, ID_FIELD};
pub use types::DataType;
pub use value::Value;

/// Builds a `Fields` map from `key => value` pairs.
///
/// ```rust
/// use tessera_core::{fields, Value};
///
/// let f = fields! { "name" => "greg", "age" => 7 };
/// assert_eq!(f.get("age"), Some(&Value::Int64(7)));
/// ```
#[macro_export]
macro_rules! fields {
    () => { $crate::Fields::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Fields::new();
        $( map.insert(::std::string::String::from($key), $crate::Value::from($value)); )+
        map
    }};
}
