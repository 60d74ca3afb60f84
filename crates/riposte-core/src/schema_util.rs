//! JSON Schema derivation for the schema-constrained request path.
//!
//! The single-record runner asks the service for output matching a fixed
//! shape instead of free text. Rather than hand-writing that schema, it is
//! derived from [`RecordDraft`](crate::record::RecordDraft) with
//! [`schemars`], fully inlined (no `$ref` pointers) because providers expect
//! the whole schema object inside a single request. Provider crates are free
//! to translate the draft-07 output into their own schema dialect at the
//! wire boundary.

use schemars::{r#gen::SchemaSettings, JsonSchema, SchemaGenerator};
use serde_json::Value;

use crate::record::RecordDraft;

/// Inline draft-07 schema for any `T`.
pub fn response_schema_for<T>() -> Value
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root).expect("generated schema should be serialisable")
}

/// The schema shipped with every single-record request.
pub fn single_record_schema() -> Value {
    response_schema_for::<RecordDraft>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_record_schema_requires_the_wire_fields() {
        let schema = single_record_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .expect("schema has a required list")
            .iter()
            .filter_map(Value::as_str)
            .collect();

        for field in ["style", "content", "attackPower"] {
            assert!(required.contains(&field), "{field} must be required");
        }
        assert!(schema["properties"]["attackPower"].is_object());
    }
}
