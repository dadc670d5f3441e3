//! Wire types shared by the store service and the gateway client

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Envelope code for a successful response
pub const SUCCESS_CODE: i64 = 1000;

/// Default number of items returned by a list call
pub const DEFAULT_LIST_LENGTH: i64 = 5;

/// A single todo entry
///
/// Decoding is per-field lenient: a missing, `null` or non-string field
/// becomes an empty string, so one odd item never sinks a whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Opaque unique identifier (UUID v4)
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,

    /// Free-text description
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    /// Usually high/medium/low, accepted as-is
    #[serde(default, deserialize_with = "lenient_string")]
    pub priority: String,

    /// ISO-8601 creation timestamp, assigned by the store
    #[serde(default, deserialize_with = "lenient_string")]
    pub created_time: String,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Request body for `POST /todo/add`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub name: String,
    pub priority: String,
}

/// Uniform `{code, data, msg}` response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub data: T,
    #[serde(default)]
    pub msg: String,
}

impl<T> Envelope<T> {
    /// Wrap a payload with the success code and an empty message
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            data,
            msg: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Query string for `GET /todo/list`
#[derive(Debug, Clone, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_length")]
    pub length: i64,
}

fn default_length() -> i64 {
    DEFAULT_LIST_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_success_shape() {
        let env = Envelope::success(vec![1, 2]);
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value, json!({"code": 1000, "data": [1, 2], "msg": ""}));
        assert!(env.is_success());
    }

    #[test]
    fn test_todo_item_missing_created_time() {
        let item: TodoItem =
            serde_json::from_value(json!({"id": "a", "name": "n", "priority": "low"})).unwrap();
        assert!(item.created_time.is_empty());
    }

    #[test]
    fn test_todo_item_null_and_odd_fields() {
        let item: TodoItem = serde_json::from_value(json!({
            "id": "a",
            "name": null,
            "created_time": null,
            "priority": 3
        }))
        .unwrap();
        assert_eq!(item.id, "a");
        assert!(item.name.is_empty());
        assert!(item.priority.is_empty());
        assert!(item.created_time.is_empty());
    }

    #[test]
    fn test_list_survives_one_malformed_item() {
        let env: Envelope<Vec<TodoItem>> = serde_json::from_value(json!({
            "code": 1000,
            "data": [
                {"id": "nullt", "name": "x", "priority": "low", "created_time": null},
                {"id": "ok", "name": "y", "priority": "high", "created_time": "2026-10-01T00:00:00Z"}
            ],
            "msg": ""
        }))
        .unwrap();
        assert_eq!(env.data.len(), 2);
        assert_eq!(env.data[1].created_time, "2026-10-01T00:00:00Z");
    }

    #[test]
    fn test_list_query_default_length() {
        let q: ListQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q.length, 5);
    }

    #[test]
    fn test_new_todo_requires_both_fields() {
        let res = serde_json::from_value::<NewTodo>(json!({"name": "x"}));
        assert!(res.is_err());
    }
}
