//! Authentication example: sign-up, sign-in, session adoption, profile.
//!
//! Run with: cargo run --example auth -p supawrap
//!
//! Requires a running Supabase-style backend; configure via SUPAWRAP_URL and
//! SUPAWRAP_ANON_KEY.

use supawrap::prelude::*;

const DEFAULT_URL: &str = "http://127.0.0.1:54321";
const DEFAULT_KEY: &str = "anon-key";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("SUPAWRAP_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let anon = std::env::var("SUPAWRAP_ANON_KEY").unwrap_or_else(|_| DEFAULT_KEY.to_string());

    let client = Client::new(ClientConfig::new(&url, &anon))?;

    let email = "example-test@example.com";
    let password = "test-password-123!";

    // ── Sign up a new user ──
    println!("=== Sign up ===");
    match client.sign_up(email, password).await {
        Ok(body) => println!("  Created: {:?}", body.as_json()),
        Err(e) => println!("  Sign up skipped ({})", e),
    }

    // ── Sign in with password ──
    println!("\n=== Sign in ===");
    let session = client.sign_in(email, password).await?;
    println!("  Token type: {}", session.token_type);
    println!("  Expires in: {}s", session.expires_in);

    // Adopt the session token for subsequent calls.
    client.set_token(session.access_token.clone());

    // ── Current user ──
    println!("\n=== Current user ===");
    let user = client.get_user().await?;
    println!("  {:?}", user.as_json());

    // ── Refresh the session ──
    println!("\n=== Refresh ===");
    let refreshed = client.refresh_token(&session.refresh_token).await?;
    client.set_token(refreshed.access_token);

    // ── Sign out ──
    println!("\n=== Sign out ===");
    client.sign_out().await?;
    client.clear_token();
    println!("  Done");

    Ok(())
}
