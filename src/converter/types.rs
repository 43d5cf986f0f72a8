//! The fixed JSON Schema → Avro primitive type table.

use crate::error::{ConvertError, Result};

/// Map a JSON Schema primitive type name to its Avro counterpart.
///
/// An unrecognized type name is a fatal conversion error; `field` is the
/// dotted path reported in it.
pub fn map_primitive(json_type: &str, field: &str) -> Result<&'static str> {
    match json_type {
        "string" => Ok("string"),
        "null" => Ok("null"),
        "boolean" => Ok("boolean"),
        "integer" => Ok("int"),
        "number" => Ok("float"),
        other => Err(ConvertError::UnmappableType {
            field: field.to_string(),
            type_name: other.to_string(),
        }),
    }
}
