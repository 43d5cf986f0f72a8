pub mod classify;
pub mod conversion;
pub mod identifier;
pub mod types;

use serde_json::Value;
use tracing::debug;

use crate::avro::AvroRecord;
use crate::converter::conversion::{convert_properties, required_list};
use crate::converter::identifier::{name_from_id, namespace_from_id};
use crate::error::{ConvertError, Result};

/// Convert an in-memory JSON Schema into an Avro record schema.
///
/// The input is a deserialized schema document; the caller is
/// responsible for parsing text into it and for serializing or
/// validating the returned record. The root record is named from the
/// schema's `id` URL (falling back to `$id`, then to `"main"`), its
/// namespace from the `id` host and path, and its fields from
/// `properties` / `required`. The input is never mutated, so the same
/// document can be converted repeatedly or from several threads.
///
/// A JSON `null` input, a primitive type outside the mapping table, and
/// a node matching more than one shape all abort the conversion; there
/// is no partial output.
pub fn convert(json_schema: &Value) -> Result<AvroRecord> {
    if json_schema.is_null() {
        return Err(ConvertError::MissingInput);
    }

    let id = json_schema
        .get("id")
        .or_else(|| json_schema.get("$id"))
        .and_then(Value::as_str);
    let name = id.and_then(name_from_id).unwrap_or_else(|| "main".to_string());
    let namespace = id.and_then(namespace_from_id);
    debug!(%name, namespace = namespace.as_deref().unwrap_or(""), "converting schema");

    let fields = match json_schema.get("properties").and_then(Value::as_object) {
        Some(props) => convert_properties(props, &required_list(json_schema), &[])?,
        None => Vec::new(),
    };

    let mut record = AvroRecord::new(name, fields);
    record.namespace = namespace;
    record.doc = json_schema
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    Ok(record)
}
