//! # lunara-export
//!
//! Serializers for generated almanac years: a structured JSON
//! document and a delimited text table. Both consume day records
//! read-only and emit text; writing it anywhere is the caller's
//! concern.

mod csv;
mod error;
mod json;

pub use csv::to_csv;
pub use error::ExportError;
pub use json::to_json;
