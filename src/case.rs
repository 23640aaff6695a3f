//! Key-level case transforms.
//!
//! The two rules here are deliberately mechanical; they mirror the regex
//! rewrites data-access layers commonly apply when translating between
//! storage-row keys (`user_id`) and in-memory record keys (`userId`):
//!
//! - snake→camel: each `_` immediately followed by an ASCII lowercase letter
//!   is replaced by that letter upper-cased
//! - camel→snake: each ASCII uppercase letter is replaced by `_` plus its
//!   lowercase form, including at position 0
//!
//! Malformed keys are never rejected; see [`crate::rules`] for what the
//! rules do with consecutive underscores, digits, and non-ASCII letters.

use std::fmt;

/// Which way to rewrite mapping keys.
///
/// # Examples
///
/// ```rust
/// use serde_keycase::Direction;
///
/// assert_eq!(Direction::SnakeToCamel.apply("user_id"), "userId");
/// assert_eq!(Direction::CamelToSnake.apply("userId"), "user_id");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    SnakeToCamel,
    CamelToSnake,
}

impl Direction {
    /// Rewrites a single key according to this direction's rule.
    #[must_use]
    pub fn apply(self, key: &str) -> String {
        match self {
            Direction::SnakeToCamel => snake_to_camel_key(key),
            Direction::CamelToSnake => camel_to_snake_key(key),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::SnakeToCamel => Direction::CamelToSnake,
            Direction::CamelToSnake => Direction::SnakeToCamel,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::SnakeToCamel => write!(f, "snake_case -> camelCase"),
            Direction::CamelToSnake => write!(f, "camelCase -> snake_case"),
        }
    }
}

/// Rewrites a snake_case key to camelCase.
///
/// Every `_` immediately followed by an ASCII lowercase letter is dropped and
/// the letter promoted to uppercase. Nothing else changes: underscores
/// followed by digits, uppercase letters, further underscores, or end of
/// string copy through as-is.
///
/// # Examples
///
/// ```rust
/// use serde_keycase::snake_to_camel_key;
///
/// assert_eq!(snake_to_camel_key("user_id"), "userId");
/// assert_eq!(snake_to_camel_key("created_at"), "createdAt");
/// assert_eq!(snake_to_camel_key("plain"), "plain");
/// assert_eq!(snake_to_camel_key("user__id"), "user_Id");
/// assert_eq!(snake_to_camel_key("user_1d"), "user_1d");
/// assert_eq!(snake_to_camel_key("_name"), "Name");
/// assert_eq!(snake_to_camel_key("name_"), "name_");
/// ```
#[must_use]
pub fn snake_to_camel_key(key: &str) -> String {
    let mut result = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '_' {
            match chars.peek() {
                Some(&next) if next.is_ascii_lowercase() => {
                    chars.next();
                    result.push(next.to_ascii_uppercase());
                }
                _ => result.push(ch),
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Rewrites a camelCase key to snake_case.
///
/// Every ASCII uppercase letter becomes `_` plus its lowercase form. There is
/// no special-casing of position 0, so a leading uppercase letter produces a
/// leading underscore.
///
/// # Examples
///
/// ```rust
/// use serde_keycase::camel_to_snake_key;
///
/// assert_eq!(camel_to_snake_key("userId"), "user_id");
/// assert_eq!(camel_to_snake_key("createdAt"), "created_at");
/// assert_eq!(camel_to_snake_key("plain"), "plain");
/// assert_eq!(camel_to_snake_key("UserId"), "_user_id");
/// assert_eq!(camel_to_snake_key("userID"), "user_i_d");
/// ```
#[must_use]
pub fn camel_to_snake_key(key: &str) -> String {
    let mut result = String::with_capacity(key.len() + 4);

    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            result.push('_');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}
