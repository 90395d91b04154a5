//! Calls every facegate endpoint against a running server.
//!
//! ```sh
//! FACEGATE_VENDOR__ENDPOINT=... FACEGATE_VENDOR__SUBSCRIPTION_KEY=... cargo run -p facegate-server
//! cargo run -p facegate-server --example api_client -- https://example.com/a.jpg https://example.com/b.jpg
//! ```

use reqwest::Client;
use serde_json::json;

const SERVER_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let first = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: api_client <image url> [second image url]"))?;
    let second = args.next().unwrap_or_else(|| first.clone());

    let client = Client::new();

    for path in ["/detectface", "/detectfacelandmarks", "/detectfaceemotions"] {
        println!("POST {path}:");
        let resp = client
            .post(format!("{SERVER_URL}{path}"))
            .json(&json!({ "imageUrl": first }))
            .send()
            .await?;
        println!("Status: {}", resp.status());
        println!("Body: {}", resp.text().await?);
        println!();
    }

    println!("POST /findsimilar:");
    let resp = client
        .post(format!("{SERVER_URL}/findsimilar"))
        .json(&json!({ "imageUrl1": first, "imageUrl2": second }))
        .send()
        .await?;
    println!("Status: {}", resp.status());
    println!("Body: {}", resp.text().await?);

    Ok(())
}
