//! # json2avro
//!
//! Convert [JSON Schema](https://json-schema.org/) documents into
//! [Apache Avro](https://avro.apache.org/) schemas.
//!
//! ## Features
//!
//! - Maps primitive JSON Schema types to Avro equivalents
//! - Generates records, enums, and arrays, named by their path in the tree
//! - Expresses optional fields as `[null, T]` unions
//! - Derives the root record's name and namespace from the schema `id` URL
//! - CLI tool `json2avro` for file conversion (behind the `cli` feature)
//!
//! ## Example (Programmatic Usage)
//!
//! ```
//! use serde_json::json;
//! use json2avro::convert;
//!
//! let schema = json!({
//!     "id": "https://schemas.example.com/person.json",
//!     "type": "object",
//!     "properties": {
//!         "name": { "type": "string" },
//!         "age": { "type": "integer" }
//!     },
//!     "required": ["name"]
//! });
//!
//! let avro = convert(&schema).unwrap();
//! println!("{}", serde_json::to_string_pretty(&avro).unwrap());
//! ```
//!
//! ## Example (CLI)
//!
//! ```bash
//! json2avro schema.json out.avsc
//! ```
//!
//! ## Crate Layout
//!
//! - [`avro`] — Typed Avro schema model (`AvroRecord`, `AvroField`, `AvroType`)
//! - [`converter`] — JSON Schema → Avro conversion logic
//! - [`error`] — Conversion error taxonomy
pub mod avro;
pub mod converter;
pub mod error;

pub use converter::convert;
pub use error::{ConvertError, Result};
