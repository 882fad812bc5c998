use anyhow::Result;
use clap::Args;
use fintel_api::{
    validation, Client, DateFiltered, FilingsQuery, Interval, NewsQuery, StockHistoryQuery,
};

use crate::output::{print_filings, print_news, print_price_bars, print_stock, OutputFormat};

#[derive(Args)]
pub struct StockArgs {
    /// Ticker symbol (e.g. AAPL, BRK.B)
    pub ticker: String,

    /// Show price history instead of the snapshot
    #[arg(long, conflicts_with_all = ["news", "filings"])]
    pub history: bool,

    /// Show recent news
    #[arg(long, conflicts_with = "filings")]
    pub news: bool,

    /// Show SEC filings
    #[arg(long)]
    pub filings: bool,

    /// History start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,

    /// History end date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,

    /// History bar size: 1d, 1wk, 1mo
    #[arg(long)]
    pub interval: Option<String>,

    /// Number of news articles
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Filing type filter for --filings (e.g. 8-K, 10-K, 10-Q)
    #[arg(long)]
    pub filing_type: Option<String>,
}

pub async fn run(args: &StockArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if args.history {
        let mut query = StockHistoryQuery::default();
        if let Some(ref start) = args.start_date {
            query = query.with_start_date(validation::validate_date(start)?);
        }
        if let Some(ref end) = args.end_date {
            query = query.with_end_date(validation::validate_date(end)?);
        }
        if let Some(ref interval) = args.interval {
            query = query.with_interval(interval.parse::<Interval>()?);
        }
        let history = client.get_stock_history(&args.ticker, &query).await?;
        eprintln!(
            "{} bars for {} ({})",
            history.data.len(),
            history.ticker,
            history.interval
        );
        return print_price_bars(&history.data, format);
    }

    if args.news {
        let query = NewsQuery::default().with_limit(args.limit);
        let news = client.get_stock_news(&args.ticker, &query).await?;
        return print_news(&news.news, format);
    }

    if args.filings {
        let mut query = FilingsQuery::default();
        if let Some(ref filing_type) = args.filing_type {
            query = query.with_filing_type(filing_type);
        }
        let filings = client.get_stock_filings(&args.ticker, &query).await?;
        return print_filings(&filings.filings, format);
    }

    let stock = client.get_stock(&args.ticker).await?;
    print_stock(&stock, format)
}
