//! Firestore REST payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Typed Firestore value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FirestoreValue {
    /// `null`.
    NullValue(()),
    /// `true` or `false`.
    BooleanValue(bool),
    /// Int64 values travel as decimal strings.
    IntegerValue(String),
    /// Any JSON number that is not an integer.
    DoubleValue(f64),
    /// UTF-8 text.
    StringValue(String),
    /// Ordered list.
    ArrayValue(ArrayValue),
    /// Nested object.
    MapValue(MapValue),
}

/// Wrapper around array elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayValue {
    /// Elements in order.
    #[serde(default)]
    pub values: Vec<FirestoreValue>,
}

/// Wrapper around object fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
    /// Fields by name.
    #[serde(default)]
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl From<&serde_json::Value> for FirestoreValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::NullValue(()),
            serde_json::Value::Bool(b) => Self::BooleanValue(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::IntegerValue(i.to_string()),
                None => Self::DoubleValue(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => Self::StringValue(s.clone()),
            serde_json::Value::Array(items) => Self::ArrayValue(ArrayValue {
                values: items.iter().map(Self::from).collect(),
            }),
            serde_json::Value::Object(map) => Self::MapValue(MapValue {
                fields: map
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            }),
        }
    }
}

/// Request body of a document create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRequest {
    /// Document fields by name.
    pub fields: BTreeMap<String, FirestoreValue>,
}

impl DocumentRequest {
    /// Encodes a JSON object as document fields. Non-object documents are
    /// stored under a single `value` field.
    #[must_use]
    pub fn from_json(document: &serde_json::Value) -> Self {
        let fields = match FirestoreValue::from(document) {
            FirestoreValue::MapValue(map) => map.fields,
            other => BTreeMap::from([("value".to_string(), other)]),
        };
        Self { fields }
    }
}

/// Response of a document create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    /// Full resource name, ending in the document id.
    pub name: String,
    /// Server-side creation timestamp.
    #[serde(default)]
    pub create_time: Option<String>,
}

/// Google API error envelope.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorBody,
}

/// Status, code and message of a failed call.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// HTTP status code.
    #[serde(default)]
    pub code: u16,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
    /// Canonical status name, such as `ALREADY_EXISTS`.
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_document_encoding() {
        let document = json!({
            "name": "Llaves Rápidas",
            "address": null,
            "telefonos": ["3001112233", ""],
        });

        let encoded = serde_json::to_value(DocumentRequest::from_json(&document)).unwrap();

        assert_eq!(
            encoded,
            json!({
                "fields": {
                    "address": { "nullValue": null },
                    "name": { "stringValue": "Llaves Rápidas" },
                    "telefonos": { "arrayValue": { "values": [
                        { "stringValue": "3001112233" },
                        { "stringValue": "" },
                    ]}},
                }
            })
        );
    }

    #[test]
    fn test_numbers_and_nested_maps() {
        let encoded = FirestoreValue::from(&json!({ "rating": 4.5, "visits": 12, "open": true }));

        let FirestoreValue::MapValue(map) = encoded else {
            panic!("expected map value");
        };
        assert_eq!(map.fields["rating"], FirestoreValue::DoubleValue(4.5));
        assert_eq!(map.fields["visits"], FirestoreValue::IntegerValue("12".into()));
        assert_eq!(map.fields["open"], FirestoreValue::BooleanValue(true));
    }

    #[test]
    fn test_error_envelope_parses() {
        let body = r#"{"error":{"code":409,"message":"Document already exists","status":"ALREADY_EXISTS"}}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.error.code, 409);
        assert_eq!(parsed.error.status, "ALREADY_EXISTS");
    }
}
