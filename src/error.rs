//! Error types for the serde boundary.
//!
//! The converter itself is total: every [`crate::Value`] has a defined output
//! and conversion never fails. Errors only arise where typed Rust data enters
//! the dynamic domain — [`crate::to_value`] on shapes serde cannot map into a
//! [`crate::Value`], such as maps with non-string keys.
//!
//! ## Examples
//!
//! ```rust
//! use serde_keycase::to_value;
//! use std::collections::HashMap;
//!
//! // Integer map keys cannot become object keys.
//! let bad: HashMap<u32, &str> = [(1, "a")].into();
//! let result = to_value(&bad);
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced when mapping typed data into a [`crate::Value`].
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A type serde can serialize but this crate's value model cannot hold
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported type error for shapes that cannot be
    /// represented as a [`crate::Value`].
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_keycase::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
