//! Health command: ping the backend API.

use reqwest::Client;

use crate::{
    core::health::{get_health, resolve_api_base},
    Result,
};

pub async fn handle_health(api_base: Option<String>) -> Result<()> {
    let base = resolve_api_base(api_base);
    let client = Client::new();

    // tarpaulin::skip - HTTP call
    let health = get_health(&client, &base).await?;
    println!("✓ API at {} is {}", base, health.status);

    Ok(())
}
