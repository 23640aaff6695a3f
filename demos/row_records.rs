//! Renaming storage-row keys for in-memory use.
//!
//! Run with: cargo run --example row_records

use serde::Serialize;
use serde_keycase::{camel_to_snake, snake_to_camel, to_value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct UserRow {
    user_id: u32,
    screen_name: String,
    created_at: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    // A row as it comes out of storage, snake_case keys.
    let row = to_value(&UserRow {
        user_id: 7,
        screen_name: "ada".to_string(),
        created_at: "2024-01-01T09:30:00Z".to_string(),
    })?;
    println!("storage row:      {:?}", row);

    // The in-memory shape, camelCase keys.
    let record = snake_to_camel(&row);
    println!("in-memory record: {:?}", record);

    // And back again before writing.
    let back = camel_to_snake(&record);
    println!("row to write:     {:?}", back);
    assert_eq!(back, row);

    Ok(())
}
