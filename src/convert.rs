//! Recursive key-case conversion over [`Value`] trees.
//!
//! [`convert`] is a pure function: it never mutates its input, raises no
//! errors, and returns a freshly built tree with the same nesting structure
//! and the same leaf values, differing only in the spelling of object keys.

use crate::{Direction, Value, ValueMap};

/// Converts every object key in `value`, recursively, per `direction`.
///
/// - Leaves (null, bool, number, string, date, bigint) come back unchanged.
///   In Rust "returned by identity" degrades to an equal clone; callers must
///   not rely on deep-copy semantics for `Date`/`BigInt` beyond equality.
/// - Arrays are rebuilt element-wise, preserving order and length.
/// - Objects are rebuilt entry by entry: the key is rewritten by the
///   direction's rule and the entry's value converted recursively.
///
/// Runs on plain call-stack recursion; nesting in practice is tens of levels
/// at most.
///
/// # Examples
///
/// ```rust
/// use serde_keycase::{convert, value, Direction};
///
/// let row = value!({
///     "user_id": 7,
///     "profile": { "first_name": "Ada" }
/// });
///
/// let record = convert(&row, Direction::SnakeToCamel);
/// assert_eq!(
///     record,
///     value!({
///         "userId": 7,
///         "profile": { "firstName": "Ada" }
///     })
/// );
/// ```
#[must_use]
pub fn convert(value: &Value, direction: Direction) -> Value {
    match value {
        Value::Array(elements) => {
            Value::Array(elements.iter().map(|v| convert(v, direction)).collect())
        }
        Value::Object(obj) => {
            let mut converted = ValueMap::with_capacity(obj.len());
            for (key, v) in obj.iter() {
                converted.insert(direction.apply(key), convert(v, direction));
            }
            Value::Object(converted)
        }
        leaf => leaf.clone(),
    }
}

/// Rewrites snake_case keys to camelCase throughout `value`.
///
/// Shorthand for [`convert`] with [`Direction::SnakeToCamel`].
///
/// # Examples
///
/// ```rust
/// use serde_keycase::{snake_to_camel, value};
///
/// let out = snake_to_camel(&value!({ "created_at": "x" }));
/// assert_eq!(out, value!({ "createdAt": "x" }));
/// ```
#[must_use]
pub fn snake_to_camel(value: &Value) -> Value {
    convert(value, Direction::SnakeToCamel)
}

/// Rewrites camelCase keys to snake_case throughout `value`.
///
/// Shorthand for [`convert`] with [`Direction::CamelToSnake`].
///
/// # Examples
///
/// ```rust
/// use serde_keycase::{camel_to_snake, value};
///
/// let out = camel_to_snake(&value!({ "createdAt": "x" }));
/// assert_eq!(out, value!({ "created_at": "x" }));
/// ```
#[must_use]
pub fn camel_to_snake(value: &Value) -> Value {
    convert(value, Direction::CamelToSnake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, Number};
    use chrono::Utc;
    use num_bigint::BigInt;

    #[test]
    fn test_leaves_unchanged() {
        let leaves = [
            Value::Null,
            Value::Bool(true),
            Value::Number(Number::Integer(42)),
            Value::Number(Number::Float(3.5)),
            Value::Number(Number::Infinity),
            Value::String("my_snake_string".to_string()),
            Value::Date(Utc::now()),
            Value::BigInt(BigInt::from(1234567890i64)),
        ];

        for leaf in &leaves {
            assert_eq!(&convert(leaf, Direction::SnakeToCamel), leaf);
            assert_eq!(&convert(leaf, Direction::CamelToSnake), leaf);
        }
    }

    #[test]
    fn test_string_values_not_rewritten() {
        // Only keys change spelling; string leaf values are data.
        let input = value!({ "display_name": "stage_name" });
        let out = snake_to_camel(&input);
        assert_eq!(out, value!({ "displayName": "stage_name" }));
    }

    #[test]
    fn test_arrays_element_wise() {
        let input = value!([{ "user_id": 1 }, { "user_id": 2 }, "scalar", null]);
        let out = snake_to_camel(&input);
        assert_eq!(
            out,
            value!([{ "userId": 1 }, { "userId": 2 }, "scalar", null])
        );
    }

    #[test]
    fn test_nested_objects() {
        let input = value!({
            "created_at": "x",
            "nested": { "first_name": "a" }
        });
        let out = snake_to_camel(&input);
        assert_eq!(
            out,
            value!({
                "createdAt": "x",
                "nested": { "firstName": "a" }
            })
        );
    }

    #[test]
    fn test_empty_object() {
        let empty = value!({});
        assert_eq!(snake_to_camel(&empty), empty);
        assert_eq!(camel_to_snake(&empty), empty);
    }

    #[test]
    fn test_camel_to_snake_object() {
        let input = value!({ "userId": 1, "lastLoginAt": null });
        let out = camel_to_snake(&input);
        assert_eq!(out, value!({ "user_id": 1, "last_login_at": null }));
    }

    #[test]
    fn test_input_not_mutated() {
        let input = value!({ "user_id": [{ "session_id": 9 }] });
        let snapshot = input.clone();
        let _ = snake_to_camel(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_order_preserved() {
        let input = value!({ "b_key": 1, "a_key": 2, "c_key": 3 });
        let out = snake_to_camel(&input);
        let keys: Vec<_> = out.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["bKey", "aKey", "cKey"]);
    }

    #[test]
    fn test_opaque_leaves_inside_objects() {
        let now = Utc::now();
        let mut obj = ValueMap::new();
        obj.insert("updated_at".to_string(), Value::Date(now));
        let out = snake_to_camel(&Value::Object(obj));
        assert_eq!(
            out.as_object().unwrap().get("updatedAt"),
            Some(&Value::Date(now))
        );
    }

    #[test]
    fn test_round_trip_well_behaved() {
        let input = value!({
            "user_id": 7,
            "profile": { "first_name": "Ada", "tags": ["a_b", 1, true] }
        });
        assert_eq!(camel_to_snake(&snake_to_camel(&input)), input);
    }

    #[test]
    fn test_degenerate_keys_mechanical() {
        let input = value!({ "user__id": 1 });
        let there = snake_to_camel(&input);
        assert_eq!(there, value!({ "user_Id": 1 }));
        let back = camel_to_snake(&there);
        assert_eq!(back, value!({ "user__id": 1 }));
    }

    #[test]
    fn test_round_trip_breaks_on_mixed_case_keys() {
        // A snake key already carrying an uppercase letter is not
        // well-behaved: the underscore before it survives snake->camel,
        // then camel->snake doubles it.
        let input = value!({ "user_Id": 1 });
        let round = camel_to_snake(&snake_to_camel(&input));
        assert_eq!(round, value!({ "user__id": 1 }));
        assert_ne!(round, input);
    }
}
