//! Converting JSON payloads end to end.
//!
//! Run with: cargo run --example json_interop

use serde_keycase::{camel_to_snake, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // A payload as a front end would send it.
    let payload = r#"{
        "userId": 7,
        "workoutHistory": [
            { "workoutId": 1, "durationMinutes": 45, "feedbackNotes": null }
        ],
        "preferences": { "restTimerSeconds": 90 }
    }"#;

    // Any self-describing format decodes straight into Value.
    let record: Value = serde_json::from_str(payload)?;

    // Rewrite keys for the storage layer.
    let row = camel_to_snake(&record);

    println!("{}", serde_json::to_string_pretty(&row)?);

    Ok(())
}
