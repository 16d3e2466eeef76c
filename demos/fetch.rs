//! Plug fetch example
//!
//! Builds a few requests from one base plug and fires them concurrently.
//!
//! Run with: cargo run --example fetch

use plug_http::Plug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Plug Fetch Example");
    println!("==================\n");

    let mut base = Plug::new("https://httpbin.org")?;
    base.with_header("Accept", "application/json");

    let mut query = base.clone();
    query.at(["get"]).with("lang", "rust").with("page", "1");
    println!("GET  {}", query);

    let mut post = base.clone();
    post.at(["post"]);
    println!("POST {}", post);

    let get_pending = query.get();
    let post_pending = post.post(r#"{"message": "hello from plug"}"#, "application/json");

    // Mutating the builder after firing does not touch the in-flight request.
    query.without("page").with("page", "2");
    println!("GET  {} (not sent)", query);

    let (get_outcome, post_outcome) = tokio::join!(get_pending, post_pending);

    let response = get_outcome?;
    println!("\nGET status: {}", response.status());
    println!("{}", response.text().await?);

    let response = post_outcome?;
    println!("\nPOST status: {}", response.status());
    println!("{}", response.text().await?);

    Ok(())
}
