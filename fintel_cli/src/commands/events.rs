use anyhow::Result;
use clap::{Args, Subcommand};
use fintel_api::{
    validation, Client, DateFiltered, EarningsQuery, InsiderTradingQuery, MacroEventsQuery,
    RecentFilingsQuery, DEFAULT_INSIDER_DAYS, DEFAULT_RECENT_FILINGS_DAYS,
};

use crate::output::{
    print_earnings, print_filings, print_insider_trades, print_macro_events, OutputFormat,
};

#[derive(Args)]
pub struct EventsArgs {
    #[command(subcommand)]
    pub command: EventsCommand,
}

#[derive(Subcommand)]
pub enum EventsCommand {
    /// Upcoming earnings announcements
    Earnings(DateRangeArgs),
    /// Recent SEC filings across all tickers
    Filings {
        /// Filing type filter (e.g. 8-K)
        #[arg(long)]
        filing_type: Option<String>,
        /// Lookback window in days
        #[arg(long, default_value_t = DEFAULT_RECENT_FILINGS_DAYS)]
        days: u32,
    },
    /// Scheduled macro releases (CPI, FOMC, payrolls)
    Macro(DateRangeArgs),
    /// Insider (Form 4) transactions
    Insider {
        /// Restrict to one ticker
        #[arg(long)]
        ticker: Option<String>,
        /// Lookback window in days
        #[arg(long, default_value_t = DEFAULT_INSIDER_DAYS)]
        days: u32,
    },
}

#[derive(Args)]
pub struct DateRangeArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// Last day (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
}

fn apply_dates<Q: DateFiltered>(mut query: Q, args: &DateRangeArgs) -> Result<Q> {
    if let Some(ref start) = args.start_date {
        query = query.with_start_date(validation::validate_date(start)?);
    }
    if let Some(ref end) = args.end_date {
        query = query.with_end_date(validation::validate_date(end)?);
    }
    Ok(query)
}

pub async fn run(args: &EventsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    match &args.command {
        EventsCommand::Earnings(dates) => {
            let query = apply_dates(EarningsQuery::default(), dates)?;
            let calendar = client.get_earnings_calendar(&query).await?;
            eprintln!(
                "Earnings {} to {}",
                calendar.start_date, calendar.end_date
            );
            print_earnings(&calendar.earnings, format)
        }
        EventsCommand::Filings { filing_type, days } => {
            let mut query = RecentFilingsQuery::default().with_days(*days);
            if let Some(filing_type) = filing_type {
                query = query.with_filing_type(filing_type);
            }
            let filings = client.get_recent_filings(&query).await?;
            eprintln!("{} filings in the last {} days", filings.count, days);
            print_filings(&filings.filings, format)
        }
        EventsCommand::Macro(dates) => {
            let query = apply_dates(MacroEventsQuery::default(), dates)?;
            let events = client.get_macro_events(&query).await?;
            print_macro_events(&events.events, format)
        }
        EventsCommand::Insider { ticker, days } => {
            let mut query = InsiderTradingQuery::default().with_days(*days);
            if let Some(ticker) = ticker {
                query = query.with_ticker(ticker);
            }
            let activity = client.get_insider_trading(&query).await?;
            print_insider_trades(&activity.transactions, format)
        }
    }
}
