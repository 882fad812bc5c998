use anyhow::Result;
use fintel_api::Client;

use crate::output::{print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let health = client.get_health().await?;
    let ready = client.get_readiness().await?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "health": health,
            "readiness": ready,
        })),
        _ => {
            println!("{} at {}", health.service, client.config().base_url());
            println!("status:   {}", health.status);
            println!("ready:    {} (database {})", ready.status, ready.database);
        }
    }

    if !health.is_healthy() || !ready.is_ready() {
        anyhow::bail!("service reports {} / {}", health.status, ready.status);
    }
    Ok(())
}
