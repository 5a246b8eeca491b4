//! Table CRUD example: insert, query with filters, update, delete.
//!
//! Run with: cargo run --example table_crud -p supawrap
//!
//! Requires a running Supabase-style backend with a `todos` table
//! (id serial primary key, title text, done bool).

use serde_json::json;
use supawrap::prelude::*;

const DEFAULT_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_KEY: &str = "anon-key";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("SUPAWRAP_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let anon = std::env::var("SUPAWRAP_ANON_KEY").unwrap_or_else(|_| DEFAULT_KEY.to_string());

    let client = Client::new(ClientConfig::new(&url, &anon))?;

    // ── Insert ──
    println!("=== Insert ===");
    client
        .post("todos", &json!({"title": "write the README", "done": false}))
        .await?;

    // ── Query with an explicit operator filter ──
    println!("\n=== Query ===");
    let mut params = QueryParams::new();
    params.insert("done".into(), filter::eq("false"));
    let open = client.get("todos", Some(&params)).await?;
    println!("  Open todos: {:?}", open.as_json());

    // ── Update by arbitrary filter ──
    println!("\n=== Patch ===");
    let mut stale = QueryParams::new();
    stale.insert("title".into(), filter::like("write*"));
    client
        .patch("todos", &stale, &json!({"done": true}))
        .await?;

    // ── Replace and delete by primary key ──
    println!("\n=== Put / Delete ===");
    client
        .put("todos", "id", "1", &json!({"id": 1, "title": "shipped", "done": true}))
        .await?;
    client.delete("todos", "id", "1").await?;

    // Errors carry the backend's status and raw body for diagnostics.
    if let Err(e) = client.get("missing_table", None).await {
        println!("\n  Expected failure: {} (status {:?})", e, e.status());
    }

    Ok(())
}
