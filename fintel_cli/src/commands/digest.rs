use anyhow::Result;
use clap::Args;
use fintel_api::{validation, Client, DigestHistoryQuery, DigestQuery};

use crate::output::{print_digest, print_digest_history, print_performance, OutputFormat};

#[derive(Args)]
pub struct DigestArgs {
    /// Show the digest for a specific day (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<String>,

    /// List past digests instead of today's
    #[arg(long, conflicts_with_all = ["performance", "date"])]
    pub history: bool,

    /// Number of past digests to list with --history
    #[arg(long, default_value = "30", requires = "history")]
    pub limit: u32,

    /// Show the track record of past recommendations
    #[arg(long, conflicts_with = "date")]
    pub performance: bool,
}

pub async fn run(args: &DigestArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.performance {
        let perf = client.get_digest_performance().await?;
        return print_performance(&perf, format);
    }

    if args.history {
        let query = DigestHistoryQuery::default().with_limit(args.limit);
        let history = client.get_digest_history(&query).await?;
        eprintln!("{} digests", history.count);
        return print_digest_history(&history, format);
    }

    let mut query = DigestQuery::default();
    if let Some(ref date) = args.date {
        query = query.with_date(validation::validate_date(date)?);
    }

    let digest = client.get_today_digest(&query).await?;
    print_digest(&digest, format)
}
