use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;

use crate::error::{AppError, Result};

pub const FIELDS_NOT_OBJECT_MESSAGE: &str = "fields must be a JSON object (dictionary).";

/// A product row. All user-facing attributes live in the schemaless
/// `fields` JSON object; only the envelope (id, timestamps) is fixed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub fields: Json<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Human-readable label: `fields["name"]` when it is a non-empty
    /// string, otherwise "Product {id}".
    pub fn display_name(&self) -> String {
        match self.fields.get("name") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => format!("Product {}", self.id),
        }
    }
}

/// Wire representation of a product: exactly `{id, fields}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub fields: Value,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            fields: product.fields.0,
        }
    }
}

/// Request body for create and merge-update. An absent `fields` key
/// defaults to an empty object, while an explicit `null` is kept as
/// `Some(Value::Null)` so validation can reject it.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "deserialize_present")]
    pub fields: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Accept a candidate `fields` value only if it is a JSON object.
/// Contents are never inspected.
pub fn validate_fields(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| AppError::validation("fields", FIELDS_NOT_OBJECT_MESSAGE))
}

/// Shallow merge: every top-level key of `incoming` is inserted into (or
/// overwrites) a copy of `existing`; untouched keys are preserved and
/// nested objects are replaced wholesale.
pub fn merge_fields(existing: &Value, incoming: &Map<String, Value>) -> Value {
    let mut merged = existing.as_object().cloned().unwrap_or_default();
    for (key, value) in incoming {
        merged.insert(key.clone(), value.clone());
    }
    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: i64, fields: Value) -> Product {
        let now = Utc::now();
        Product {
            id,
            fields: Json(fields),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn validate_accepts_objects_only() {
        assert!(validate_fields(&json!({})).is_ok());
        assert!(validate_fields(&json!({"name": "X", "nested": {"a": 1}})).is_ok());

        for value in [
            json!(["not", "a", "dict"]),
            json!("string"),
            json!(42),
            json!(true),
            Value::Null,
        ] {
            let err = validate_fields(&value).unwrap_err();
            match err {
                AppError::Validation { field, messages } => {
                    assert_eq!(field, "fields");
                    assert_eq!(messages, vec![FIELDS_NOT_OBJECT_MESSAGE.to_string()]);
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn merge_preserves_untouched_keys() {
        let existing = json!({"name": "A", "price": 1, "stock": 2});
        let incoming = json!({"price": 2});

        let merged = merge_fields(&existing, incoming.as_object().unwrap());

        assert_eq!(merged, json!({"name": "A", "price": 2, "stock": 2}));
    }

    #[test]
    fn merge_replaces_nested_objects_wholesale() {
        let existing = json!({"specs": {"color": "red", "size": "L"}});
        let incoming = json!({"specs": {"color": "blue"}});

        let merged = merge_fields(&existing, incoming.as_object().unwrap());

        assert_eq!(merged, json!({"specs": {"color": "blue"}}));
    }

    #[test]
    fn merge_is_idempotent() {
        let existing = json!({"name": "A", "price": 1});
        let incoming = json!({"price": 2, "stock": 5});
        let incoming = incoming.as_object().unwrap();

        let once = merge_fields(&existing, incoming);
        let twice = merge_fields(&once, incoming);

        assert_eq!(once, twice);
    }

    #[test]
    fn merge_with_empty_incoming_is_a_noop() {
        let existing = json!({"name": "A"});
        let merged = merge_fields(&existing, &Map::new());

        assert_eq!(merged, existing);
    }

    #[test]
    fn display_name_uses_name_else_fallback() {
        assert_eq!(product(1, json!({"name": "X"})).display_name(), "X");
        assert_eq!(product(2, json!({})).display_name(), "Product 2");
        assert_eq!(product(3, json!({"name": ""})).display_name(), "Product 3");
        assert_eq!(product(4, json!({"name": 7})).display_name(), "Product 4");
    }

    #[test]
    fn payload_distinguishes_absent_from_null() {
        let absent: ProductPayload = serde_json::from_str("{}").unwrap();
        assert!(absent.fields.is_none());

        let null: ProductPayload = serde_json::from_str(r#"{"fields": null}"#).unwrap();
        assert_eq!(null.fields, Some(Value::Null));
    }
}
