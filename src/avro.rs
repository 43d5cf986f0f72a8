use serde::Serialize;
use serde_json::Value;

/// An Avro schema type: a primitive name, a named record or enum, an
/// array, or a union of alternatives.
///
/// Unions are produced only to mark a field as nullable, with `"null"`
/// as the first branch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AvroType {
    Primitive(String),
    Record(AvroRecord),
    Enum {
        #[serde(rename = "type")]
        r#type: String,
        name: String,
        symbols: Vec<String>,
    },
    Array {
        #[serde(rename = "type")]
        r#type: String,
        items: Box<AvroType>,
    },
    Union(Vec<AvroType>),
}

impl AvroType {
    pub fn primitive(name: &str) -> Self {
        AvroType::Primitive(name.to_string())
    }

    pub fn r#enum(name: String, symbols: Vec<String>) -> Self {
        AvroType::Enum {
            r#type: "enum".to_string(),
            name,
            symbols,
        }
    }

    pub fn array(items: AvroType) -> Self {
        AvroType::Array {
            r#type: "array".to_string(),
            items: Box::new(items),
        }
    }

    /// Wrap a type in a union with `null`.
    ///
    /// Avro uses this pattern to make fields nullable.
    pub fn nullable(inner: AvroType) -> Self {
        AvroType::Union(vec![AvroType::primitive("null"), inner])
    }
}

/// An Avro record: a structured type with named fields.
///
/// `namespace` and `doc` are populated on the root record only and are
/// omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroRecord {
    #[serde(rename = "type")]
    pub r#type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    pub fields: Vec<AvroField>,
}

impl AvroRecord {
    pub fn new(name: String, fields: Vec<AvroField>) -> Self {
        AvroRecord {
            r#type: "record".to_string(),
            name,
            namespace: None,
            doc: None,
            fields,
        }
    }
}

/// A single field of an Avro record.
///
/// `doc` is always serialized (empty string when the source carried no
/// description). `default` distinguishes "no default" (`None`, key
/// omitted) from an explicit `"default": null` (`Some(Value::Null)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroField {
    pub name: String,
    pub doc: String,
    #[serde(rename = "type")]
    pub field_type: AvroType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}
