//! Translation of the inline draft-07 schemas produced by `riposte-core`
//! into the OpenAPI-flavoured subset *generateContent* understands: uppercase
//! type names, `nullable` instead of `["T","null"]` unions, and none of the
//! metadata keywords (`$schema`, `title`, …) the endpoint rejects.

use serde_json::{Map, Value};

pub(crate) fn to_gemini_schema(schema: &Value) -> Value {
    convert(schema)
}

fn convert(value: &Value) -> Value {
    let Value::Object(obj) = value else {
        return value.clone();
    };
    let mut out = Map::new();

    match obj.get("type") {
        Some(Value::String(name)) => {
            out.insert("type".into(), Value::String(name.to_ascii_uppercase()));
        }
        Some(Value::Array(union)) => {
            if let Some(name) = union.iter().filter_map(Value::as_str).find(|n| *n != "null") {
                out.insert("type".into(), Value::String(name.to_ascii_uppercase()));
            }
            if union.iter().any(|n| n.as_str() == Some("null")) {
                out.insert("nullable".into(), Value::Bool(true));
            }
        }
        _ => {}
    }

    for key in ["description", "enum", "required"] {
        if let Some(kept) = obj.get(key) {
            out.insert(key.into(), kept.clone());
        }
    }
    if let Some(Value::Object(properties)) = obj.get("properties") {
        let converted: Map<String, Value> = properties
            .iter()
            .map(|(name, prop)| (name.clone(), convert(prop)))
            .collect();
        out.insert("properties".into(), Value::Object(converted));
    }
    if let Some(items) = obj.get("items") {
        out.insert("items".into(), convert(items));
    }

    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uppercases_types_and_drops_metadata() {
        let draft = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "RecordDraft",
            "type": "object",
            "properties": {
                "style": { "type": "string" },
                "attackPower": { "type": ["number", "null"] },
                "sources": {
                    "type": ["array", "null"],
                    "items": {
                        "type": "object",
                        "properties": { "title": { "type": "string" } },
                        "required": ["title"]
                    }
                }
            },
            "required": ["style", "attackPower"]
        });

        let converted = to_gemini_schema(&draft);

        assert_eq!(converted["type"], "OBJECT");
        assert!(converted.get("$schema").is_none());
        assert!(converted.get("title").is_none());
        assert_eq!(converted["properties"]["style"]["type"], "STRING");
        assert_eq!(converted["properties"]["attackPower"]["type"], "NUMBER");
        assert_eq!(converted["properties"]["attackPower"]["nullable"], true);
        assert_eq!(converted["properties"]["sources"]["type"], "ARRAY");
        assert_eq!(
            converted["properties"]["sources"]["items"]["required"],
            json!(["title"])
        );
        assert_eq!(converted["required"], json!(["style", "attackPower"]));
    }

    #[test]
    fn converts_the_real_single_record_schema() {
        let draft = riposte_core::schema_util::single_record_schema();
        let converted = to_gemini_schema(&draft);

        assert_eq!(converted["type"], "OBJECT");
        for field in ["style", "content", "attackPower"] {
            assert!(
                converted["properties"][field].is_object(),
                "{field} survives conversion"
            );
        }
    }
}
