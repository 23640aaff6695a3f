//! Key rewriting rules
//!
//! This module documents the exact mechanical rules applied to mapping keys,
//! including the edge cases engineers tend to ask about. The rules never
//! reject a key; a malformed key is transformed per the rule, which may
//! produce a result the caller finds surprising.
//!
//! # snake_case → camelCase
//!
//! Every `_` immediately followed by an ASCII lowercase letter is replaced by
//! that letter upper-cased. Only that single letter is promoted; nothing else
//! is inspected or rewritten.
//!
//! ```rust
//! use serde_keycase::snake_to_camel_key;
//!
//! assert_eq!(snake_to_camel_key("user_id"), "userId");
//! assert_eq!(snake_to_camel_key("created_at"), "createdAt");
//! ```
//!
//! **Edge cases**:
//!
//! - Keys without a matching `_x` pattern pass through unchanged, including
//!   keys that are already camelCase.
//! - Consecutive underscores: only the last underscore of a run can match,
//!   so `user__id` becomes `user_Id`.
//! - A digit or uppercase letter after the underscore does not match:
//!   `user_1d` and `user_Id` are unchanged.
//! - A leading underscore matches like any other: `_name` becomes `Name`.
//! - A trailing underscore has nothing to consume: `name_` is unchanged.
//!
//! ```rust
//! use serde_keycase::snake_to_camel_key;
//!
//! assert_eq!(snake_to_camel_key("user__id"), "user_Id");
//! assert_eq!(snake_to_camel_key("user_1d"), "user_1d");
//! assert_eq!(snake_to_camel_key("_name"), "Name");
//! assert_eq!(snake_to_camel_key("name_"), "name_");
//! ```
//!
//! # camelCase → snake_case
//!
//! Every ASCII uppercase letter is replaced by `_` plus its lowercase form.
//! Position 0 is not special-cased, so a leading uppercase letter produces a
//! leading underscore, and acronym runs underscore every letter.
//!
//! ```rust
//! use serde_keycase::camel_to_snake_key;
//!
//! assert_eq!(camel_to_snake_key("userId"), "user_id");
//! assert_eq!(camel_to_snake_key("UserId"), "_user_id");
//! assert_eq!(camel_to_snake_key("requestHTTPBody"), "request_h_t_t_p_body");
//! ```
//!
//! # Non-ASCII
//!
//! Both rules use ASCII character classes. Letters outside `a-z` / `A-Z`
//! never trigger a rewrite and copy through untouched.
//!
//! # Round trips
//!
//! `camel_to_snake_key(snake_to_camel_key(k)) == k` holds for well-behaved
//! keys: runs of ASCII lowercase letters and digits joined by single
//! underscores, with no leading or trailing underscore, no digit directly
//! after an underscore, and no uppercase letters. Outside that set the rules
//! stay mechanical and the round trip may not return the original:
//!
//! ```rust
//! use serde_keycase::{camel_to_snake_key, snake_to_camel_key};
//!
//! // well-behaved
//! assert_eq!(camel_to_snake_key(&snake_to_camel_key("session_id")), "session_id");
//!
//! // mixed-case input is not well-behaved
//! assert_eq!(camel_to_snake_key(&snake_to_camel_key("user_Id")), "user__id");
//! ```
