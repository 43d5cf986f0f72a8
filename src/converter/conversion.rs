//! The recursive conversion engine.
//!
//! [`convert_properties`] walks a property bag and emits one Avro field
//! per property, dispatching on the node's [`NodeShape`]. The `path`
//! argument threads the ancestor field names down the tree; nested named
//! types take their name from it (`address_record`,
//! `address_country_enum`), which keeps type names unique across sibling
//! branches that share a leaf field name.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::avro::{AvroField, AvroRecord, AvroType};
use crate::converter::classify::{classify, NodeShape};
use crate::converter::types::map_primitive;
use crate::error::{ConvertError, Result};

/// Avro enum symbol grammar.
fn symbol_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap())
}

fn nested_type_name(path: &[&str], name: &str, suffix: &str) -> String {
    let mut parts: Vec<&str> = path.to_vec();
    parts.push(name);
    format!("{}_{}", parts.join("_"), suffix)
}

/// Dotted field path used in error messages.
fn field_path(path: &[&str], name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path.join("."), name)
    }
}

fn doc_of(node: &Value) -> String {
    node.get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Collect the `required` list of a node as string slices.
pub fn required_list(node: &Value) -> Vec<&str> {
    node.get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Convert a `properties` bag into an ordered list of Avro fields.
///
/// Emission order follows map iteration order, which with
/// `preserve_order` is the input document's property order.
pub fn convert_properties(
    properties: &Map<String, Value>,
    required: &[&str],
    path: &[&str],
) -> Result<Vec<AvroField>> {
    let mut fields = Vec::with_capacity(properties.len());
    for (name, node) in properties {
        let field = match classify(node, &field_path(path, name))? {
            NodeShape::Complex => convert_complex(name, node, path)?,
            NodeShape::Array => convert_array(name, node, path)?,
            NodeShape::Enumerated => convert_enum(name, node, path)?,
            NodeShape::Scalar => {
                convert_scalar(name, node, required.contains(&name.as_str()), path)?
            }
        };
        fields.push(field);
    }
    Ok(fields)
}

/// Convert a nested object property into a nullable named record field.
///
/// Object-valued fields are always wrapped in `[null, record]`, whether
/// or not the parent lists them as required: an absent object is a
/// common relaxation that a hard-required record type would reject.
fn convert_complex(name: &str, node: &Value, path: &[&str]) -> Result<AvroField> {
    let child_path: Vec<&str> = path.iter().copied().chain([name]).collect();
    let fields = match node.get("properties").and_then(Value::as_object) {
        Some(props) => convert_properties(props, &required_list(node), &child_path)?,
        None => Vec::new(),
    };
    let record = AvroRecord::new(nested_type_name(path, name, "record"), fields);
    Ok(AvroField {
        name: name.to_string(),
        doc: doc_of(node),
        field_type: AvroType::nullable(AvroType::Record(record)),
        default: None,
    })
}

/// Convert an array property.
///
/// The array itself is never null-wrapped, and neither are its items: an
/// object item becomes a named record, anything else becomes the bare
/// mapped primitive (an item `type` list collapses to its first
/// non-`"null"` entry).
fn convert_array(name: &str, node: &Value, path: &[&str]) -> Result<AvroField> {
    let item_field = field_path(path, name);
    let item_type = match node.get("items") {
        Some(item) => match classify(item, &item_field)? {
            NodeShape::Complex => {
                let child_path: Vec<&str> = path.iter().copied().chain([name]).collect();
                let fields = match item.get("properties").and_then(Value::as_object) {
                    Some(props) => convert_properties(props, &required_list(item), &child_path)?,
                    None => Vec::new(),
                };
                AvroType::Record(AvroRecord::new(
                    nested_type_name(path, name, "record"),
                    fields,
                ))
            }
            _ => AvroType::primitive(resolve_primitive(item, &item_field)?),
        },
        None => {
            return Err(ConvertError::UnmappableType {
                field: item_field,
                type_name: "none".to_string(),
            })
        }
    };
    Ok(AvroField {
        name: name.to_string(),
        doc: doc_of(node),
        field_type: AvroType::array(item_type),
        default: None,
    })
}

/// Convert an enumerated property into a named Avro enum field.
///
/// Members that violate the Avro symbol grammar cannot be represented as
/// an enum; the field degrades to a nullable free-text string instead of
/// failing the whole conversion. A `"null"` member or a null-ish default
/// makes the enum nullable.
fn convert_enum(name: &str, node: &Value, path: &[&str]) -> Result<AvroField> {
    let members = node
        .get("enum")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let doc = doc_of(node);

    let symbols: Option<Vec<String>> = members
        .iter()
        .map(|m| {
            m.as_str()
                .filter(|s| symbol_re().is_match(s))
                .map(str::to_string)
        })
        .collect();
    let Some(symbols) = symbols else {
        debug!(
            field = %field_path(path, name),
            "enum members violate the Avro symbol grammar, degrading to nullable string"
        );
        return Ok(AvroField {
            name: name.to_string(),
            doc,
            field_type: AvroType::nullable(AvroType::primitive("string")),
            default: Some(Value::Null),
        });
    };

    let default = node.get("default");
    let nullish_default =
        matches!(default, Some(Value::Null)) || default.and_then(Value::as_str) == Some("null");
    let nullish_member = members.iter().any(|m| m == "null");

    let enum_type = AvroType::r#enum(nested_type_name(path, name, "enum"), symbols);
    if nullish_member || nullish_default {
        Ok(AvroField {
            name: name.to_string(),
            doc,
            field_type: AvroType::nullable(enum_type),
            default: Some(Value::Null),
        })
    } else {
        Ok(AvroField {
            name: name.to_string(),
            doc,
            field_type: enum_type,
            default: default.cloned(),
        })
    }
}

/// Resolve a scalar node's JSON primitive and map it to Avro.
///
/// A `type` list resolves to its first non-`"null"` entry. A missing or
/// unusable `type` is an unmappable-type error.
fn resolve_primitive(node: &Value, field: &str) -> Result<&'static str> {
    let json_type = match node.get("type") {
        Some(Value::String(t)) => Some(t.as_str()),
        Some(Value::Array(list)) => list
            .iter()
            .filter_map(Value::as_str)
            .find(|t| *t != "null"),
        _ => None,
    };
    match json_type {
        Some(t) => map_primitive(t, field),
        None => Err(ConvertError::UnmappableType {
            field: field.to_string(),
            type_name: "none".to_string(),
        }),
    }
}

/// Convert a scalar property.
///
/// Nullability policy, in precedence order: a source `type` list always
/// yields `[null, primitive]` with `default: null`; a required
/// single-type scalar stays bare and carries the source default if one
/// is declared; an optional scalar yields `[null, primitive]` with
/// `default: null` (a union defaults to its first branch, so any source
/// default is replaced by null).
fn convert_scalar(name: &str, node: &Value, required: bool, path: &[&str]) -> Result<AvroField> {
    let primitive = resolve_primitive(node, &field_path(path, name))?;
    let type_is_list = matches!(node.get("type"), Some(Value::Array(_)));

    let (field_type, default) = if type_is_list || !required {
        // A union may not repeat a branch, so a `null` scalar stays bare.
        if primitive == "null" {
            (AvroType::primitive("null"), Some(Value::Null))
        } else {
            (
                AvroType::nullable(AvroType::primitive(primitive)),
                Some(Value::Null),
            )
        }
    } else {
        (AvroType::primitive(primitive), node.get("default").cloned())
    };

    Ok(AvroField {
        name: name.to_string(),
        doc: doc_of(node),
        field_type,
        default,
    })
}
