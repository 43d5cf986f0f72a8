//! Decide which of the four shapes a schema node takes.

use serde_json::Value;

use crate::error::{ConvertError, Result};

/// The shape of a JSON Schema node. Every node is exactly one of these;
/// the converter dispatches on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// `type: "object"` with nested `properties`.
    Complex,
    /// `type: "array"` with an `items` schema.
    Array,
    /// Carries an `enum` list of candidate values.
    Enumerated,
    /// A primitive leaf.
    Scalar,
}

/// Classify a schema node without modifying it.
///
/// A `type` given as a list is collapsed: a list containing `"object"`
/// counts as an object, otherwise a list containing `"array"` counts as
/// an array. This accepts schemas that declare `type: ["object","null"]`
/// instead of a single type plus separate nullability.
///
/// Nodes with overlapping signals (an `enum` alongside an object or
/// array type, an `enum` alongside nested `properties`, or a type list
/// declaring both `"object"` and `"array"`) are rejected as ambiguous
/// rather than resolved by precedence. `field` is the dotted path used
/// in the error.
pub fn classify(node: &Value, field: &str) -> Result<NodeShape> {
    let (is_object, is_array) = match node.get("type") {
        Some(Value::String(t)) => (t == "object", t == "array"),
        Some(Value::Array(list)) => (
            list.iter().any(|t| t == "object"),
            list.iter().any(|t| t == "array"),
        ),
        _ => (false, false),
    };
    let has_enum = matches!(node.get("enum"), Some(Value::Array(_)));
    let has_properties = node.get("properties").is_some();

    if (is_object && is_array) || (has_enum && (is_object || is_array || has_properties)) {
        return Err(ConvertError::AmbiguousNodeShape {
            field: field.to_string(),
        });
    }

    Ok(if is_object {
        NodeShape::Complex
    } else if is_array {
        NodeShape::Array
    } else if has_enum {
        NodeShape::Enumerated
    } else {
        NodeShape::Scalar
    })
}
