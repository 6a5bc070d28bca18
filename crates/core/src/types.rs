//! Data type definitions for Tessera.
//!
//! Records are schemaless, so a `DataType` describes the kind of a single
//! runtime value rather than a declared column.

use core::fmt;

/// Kinds of values that can appear in a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Absent / null value
    Null,
    /// Boolean type (true/false)
    Boolean,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// UTF-8 string
    String,
    /// Ordered list of values
    Array,
    /// Nested field map
    Object,
}

impl DataType {
    /// Returns whether this kind is a number (`Int64` or `Float64`).
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int64 | DataType::Float64)
    }

    /// Returns the lowercase name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Null => "null",
            DataType::Boolean => "boolean",
            DataType::Int64 => "int64",
            DataType::Float64 => "float64",
            DataType::String => "string",
            DataType::Array => "array",
            DataType::Object => "object",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
