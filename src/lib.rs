//! # serde_keycase
//!
//! A Serde-compatible library for recursively renaming map keys between
//! snake_case and camelCase.
//!
//! ## Why?
//!
//! Storage rows and wire payloads tend to spell keys as `user_id` and
//! `created_at`; in-memory records spell them `userId` and `createdAt`.
//! Data-access code that shuttles records across that boundary needs one
//! well-defined, total transformation in each direction — applied to
//! arbitrarily nested data, touching only key spellings, never values.
//!
//! ## Key Features
//!
//! - **Pure and total**: conversion never fails, never mutates its input,
//!   and always returns a freshly built tree
//! - **Shape-preserving**: same nesting structure and leaf values, only
//!   mapping keys change spelling
//! - **Serde Compatible**: typed records enter the dynamic domain via
//!   [`to_value`]; payloads from any self-describing format deserialize
//!   straight into [`Value`]
//! - **Opaque-aware**: dates and big integers are leaves, never recursed
//!   into or rewritten
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_keycase = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Converting a storage row
//!
//! ```rust
//! use serde_keycase::{snake_to_camel, value};
//!
//! let row = value!({
//!     "user_id": 7,
//!     "created_at": "2024-01-01",
//!     "profile": { "first_name": "Ada" }
//! });
//!
//! let record = snake_to_camel(&row);
//! assert_eq!(
//!     record,
//!     value!({
//!         "userId": 7,
//!         "createdAt": "2024-01-01",
//!         "profile": { "firstName": "Ada" }
//!     })
//! );
//! ```
//!
//! ### From typed records
//!
//! ```rust
//! use serde::Serialize;
//! use serde_keycase::{camel_to_snake, to_value, value};
//!
//! #[derive(Serialize)]
//! struct Session {
//!     #[serde(rename = "sessionId")]
//!     session_id: u32,
//!     #[serde(rename = "expiresAt")]
//!     expires_at: String,
//! }
//!
//! let session = Session { session_id: 9, expires_at: "soon".to_string() };
//! let row = camel_to_snake(&to_value(&session).unwrap());
//! assert_eq!(row, value!({ "session_id": 9, "expires_at": "soon" }));
//! ```
//!
//! ### Explicit direction
//!
//! ```rust
//! use serde_keycase::{convert, value, Direction};
//!
//! let out = convert(&value!({ "user_id": 1 }), Direction::SnakeToCamel);
//! assert_eq!(out, value!({ "userId": 1 }));
//! ```
//!
//! ## The rules, exactly
//!
//! The key rewrites are mechanical and never reject input; see [`rules`] for
//! the full statement including consecutive underscores, digits after an
//! underscore, leading uppercase, and non-ASCII behavior. Round-tripping is
//! guaranteed only for well-behaved keys.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused examples:
//!
//! - **`row_records.rs`** - Renaming storage-row keys for in-memory use
//! - **`dynamic_values.rs`** - Building and converting values with the
//!   value! macro
//! - **`json_interop.rs`** - Converting JSON payloads end to end
//!
//! Run any of them with: `cargo run --example <name>`

pub mod case;
pub mod convert;
pub mod error;
pub mod macros;
pub mod map;
pub mod rules;
pub mod ser;
pub mod value;

pub use case::{camel_to_snake_key, snake_to_camel_key, Direction};
pub use convert::{camel_to_snake, convert, snake_to_camel};
pub use error::{Error, Result};
pub use map::ValueMap;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// This is the boundary between typed records and the dynamic domain the
/// converter operates on: structs and string-keyed maps become objects,
/// sequences become arrays, options become null or their inner value.
///
/// # Examples
///
/// ```rust
/// use serde_keycase::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a [`Value`]
/// (e.g., maps with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;
    use serde::Serialize;

    #[derive(Serialize)]
    struct User {
        user_id: u32,
        screen_name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_struct_through_converter() {
        let user = User {
            user_id: 123,
            screen_name: "ada".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "coach".to_string()],
        };

        let row = to_value(&user).unwrap();
        let record = snake_to_camel(&row);

        assert_eq!(
            record,
            value!({
                "userId": 123,
                "screenName": "ada",
                "active": true,
                "tags": ["admin", "coach"]
            })
        );
    }

    #[test]
    fn test_to_value() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let value = to_value(&Point { x: 1, y: 2 }).unwrap();

        match value {
            Value::Object(obj) => {
                assert_eq!(obj.get("x"), Some(&Value::Number(Number::Integer(1))));
                assert_eq!(obj.get("y"), Some(&Value::Number(Number::Integer(2))));
            }
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_round_trip_directions() {
        let snake = value!({ "user_id": 1, "nested": { "created_at": null } });
        let camel = snake_to_camel(&snake);
        assert_eq!(camel_to_snake(&camel), snake);
    }
}
