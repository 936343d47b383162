//! JSON serialization capability
//!
//! Types that can present themselves as structured JSON implement
//! [`JsonSerializable`]. The produced value is what ends up in
//! `serde_json` output, so implementors choose the shape (field names,
//! omitted secrets) independently of their `Serialize` derive, if any.

use serde_json::Value;

/// A value that can produce a representation suitable for JSON serialization
pub trait JsonSerializable {
    /// Returns the data that should be serialized
    fn json_serialize(&self) -> Value;
}

impl<T: JsonSerializable> JsonSerializable for [T] {
    fn json_serialize(&self) -> Value {
        Value::Array(self.iter().map(JsonSerializable::json_serialize).collect())
    }
}

impl<T: JsonSerializable> JsonSerializable for Vec<T> {
    fn json_serialize(&self) -> Value {
        self.as_slice().json_serialize()
    }
}

impl<T: JsonSerializable + ?Sized> JsonSerializable for &T {
    fn json_serialize(&self) -> Value {
        (**self).json_serialize()
    }
}

/// Encodes any [`JsonSerializable`] value as a JSON string
pub fn to_json_string<T: JsonSerializable + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&value.json_serialize())
}
