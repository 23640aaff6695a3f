//! Building and converting values with the value! macro.
//!
//! Run with: cargo run --example dynamic_values

use serde_keycase::{snake_to_camel, value, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Build a nested payload dynamically
    let plan = value!({
        "plan_id": 42,
        "client_name": "Ada",
        "weekly_sessions": [
            { "session_id": 1, "focus_area": "strength" },
            { "session_id": 2, "focus_area": "recovery" }
        ]
    });

    let converted = snake_to_camel(&plan);

    // Access values dynamically
    if let Value::Object(obj) = &converted {
        if let Some(name) = obj.get("clientName").and_then(|v| v.as_str()) {
            println!("client: {}", name);
        }

        if let Some(Value::Array(sessions)) = obj.get("weeklySessions") {
            println!("sessions: {}", sessions.len());
            for session in sessions {
                if let Some(focus) = session
                    .as_object()
                    .and_then(|s| s.get("focusArea"))
                    .and_then(|v| v.as_str())
                {
                    println!("  focus: {}", focus);
                }
            }
        }
    }

    Ok(())
}
