use anyhow::Result;
use fintel_api::types::{
    DailyDigest, DigestHistory, EarningsEvent, InsiderTransaction, KeyEvent, MacroEvent,
    NewsArticle, PerformanceReport, PriceBar, Recommendation, RecentPick, SecFiling,
    StockDetails, WatchListEntry,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct RecommendationRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Action")]
    #[serde(rename = "Action")]
    action: String,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
    #[tabled(rename = "Target")]
    #[serde(rename = "Target")]
    target: String,
    #[tabled(rename = "Stop Loss")]
    #[serde(rename = "Stop Loss")]
    stop_loss: String,
    #[tabled(rename = "To Target")]
    #[serde(rename = "To Target")]
    to_target: String,
    #[tabled(rename = "To Stop")]
    #[serde(rename = "To Stop")]
    to_stop: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
}

#[derive(Tabled, Serialize)]
struct DigestRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Pick")]
    #[serde(rename = "Pick")]
    ticker: String,
    #[tabled(rename = "Action")]
    #[serde(rename = "Action")]
    action: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Key Driver")]
    #[serde(rename = "Key Driver")]
    key_driver: String,
}

#[derive(Tabled, Serialize)]
struct WatchRow {
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Score")]
    #[serde(rename = "Score")]
    score: String,
    #[tabled(rename = "Reason")]
    #[serde(rename = "Reason")]
    reason: String,
}

#[derive(Tabled, Serialize)]
struct KeyEventRow {
    #[tabled(rename = "Time")]
    #[serde(rename = "Time")]
    time: String,
    #[tabled(rename = "Event")]
    #[serde(rename = "Event")]
    event: String,
    #[tabled(rename = "Impact")]
    #[serde(rename = "Impact")]
    impact: String,
}

#[derive(Tabled, Serialize)]
struct PickRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Action")]
    #[serde(rename = "Action")]
    action: String,
    #[tabled(rename = "Entry")]
    #[serde(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Return")]
    #[serde(rename = "Return")]
    return_pct: String,
}

#[derive(Tabled, Serialize)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    #[serde(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Tabled, Serialize)]
struct PriceBarRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    #[serde(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    #[serde(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    #[serde(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    #[serde(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    #[serde(rename = "Volume")]
    volume: String,
}

#[derive(Tabled, Serialize)]
struct NewsRow {
    #[tabled(rename = "Published")]
    #[serde(rename = "Published")]
    published: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
    #[tabled(rename = "Sentiment")]
    #[serde(rename = "Sentiment")]
    sentiment: String,
    #[tabled(rename = "Headline")]
    #[serde(rename = "Headline")]
    headline: String,
}

#[derive(Tabled, Serialize)]
struct FilingRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    filing_type: String,
    #[tabled(rename = "Material")]
    #[serde(rename = "Material")]
    material: String,
    #[tabled(rename = "Summary")]
    #[serde(rename = "Summary")]
    summary: String,
}

#[derive(Tabled, Serialize)]
struct EarningsRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Session")]
    #[serde(rename = "Session")]
    session: String,
    #[tabled(rename = "EPS Est.")]
    #[serde(rename = "EPS Est.")]
    eps_estimate: String,
}

#[derive(Tabled, Serialize)]
struct MacroRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Event")]
    #[serde(rename = "Event")]
    event: String,
    #[tabled(rename = "Importance")]
    #[serde(rename = "Importance")]
    importance: String,
    #[tabled(rename = "Previous")]
    #[serde(rename = "Previous")]
    previous: String,
    #[tabled(rename = "Forecast")]
    #[serde(rename = "Forecast")]
    forecast: String,
}

#[derive(Tabled, Serialize)]
struct InsiderRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Ticker")]
    #[serde(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Insider")]
    #[serde(rename = "Insider")]
    insider: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    transaction_type: String,
    #[tabled(rename = "Shares")]
    #[serde(rename = "Shares")]
    shares: i64,
    #[tabled(rename = "Price")]
    #[serde(rename = "Price")]
    price: String,
}

// -- Row builders --

fn build_recommendation_row(rec: &Recommendation) -> RecommendationRow {
    RecommendationRow {
        ticker: rec.ticker.clone(),
        name: rec.name.clone(),
        action: rec.action.to_string(),
        price: format_currency(rec.price),
        target: format_currency(rec.target),
        stop_loss: format_currency(rec.stop_loss),
        to_target: format_move(rec.upside_pct()),
        to_stop: format_move(stop_move_pct(rec)),
        score: format_score(rec.total_score),
    }
}

fn build_digest_rows(history: &DigestHistory) -> Vec<DigestRow> {
    history
        .digests
        .iter()
        .map(|d| DigestRow {
            date: d.date.to_string(),
            ticker: d.top_recommendation.ticker.clone(),
            action: d.top_recommendation.action.to_string(),
            score: format_score(d.top_recommendation.total_score),
            key_driver: d.market_summary.key_driver.clone(),
        })
        .collect()
}

fn build_watch_rows(entries: &[WatchListEntry]) -> Vec<WatchRow> {
    entries
        .iter()
        .map(|w| WatchRow {
            ticker: w.ticker.clone(),
            score: format_score(w.score),
            reason: w.reason.clone(),
        })
        .collect()
}

fn build_key_event_rows(events: &[KeyEvent]) -> Vec<KeyEventRow> {
    events
        .iter()
        .map(|e| KeyEventRow {
            time: e.time.clone(),
            event: e.event.clone(),
            impact: e.expected_impact.clone(),
        })
        .collect()
}

fn build_pick_rows(picks: &[RecentPick]) -> Vec<PickRow> {
    picks
        .iter()
        .map(|p| PickRow {
            date: p.recommendation_date.to_string(),
            ticker: p.ticker.clone(),
            action: p.action.to_string(),
            entry: format_currency(p.entry_price),
            return_pct: p
                .return_pct
                .map(format_change)
                .unwrap_or_else(|| "pending".to_string()),
        })
        .collect()
}

fn build_performance_rows(perf: &PerformanceReport) -> Vec<MetricRow> {
    vec![
        metric("Recommendations", perf.total_recommendations.to_string()),
        metric("Win Rate", format!("{:.1}%", perf.win_rate * 100.0)),
        metric("Average Return", format_change(perf.average_return)),
        metric("Sharpe Ratio", format!("{:.2}", perf.sharpe_ratio)),
        metric("vs S&P 500", format_change(perf.vs_sp500)),
    ]
}

fn build_stock_rows(stock: &StockDetails) -> Vec<MetricRow> {
    vec![
        metric("Price", format_currency(stock.price.current)),
        metric(
            "Change",
            format!(
                "{:+.2} ({})",
                stock.price.change,
                format_change(stock.price.change_percent)
            ),
        ),
        metric("P/E", format!("{:.1}", stock.fundamentals.pe_ratio)),
        metric("P/B", format!("{:.1}", stock.fundamentals.pb_ratio)),
        metric("ROE", format!("{:.1}%", stock.fundamentals.roe * 100.0)),
        metric(
            "Revenue Growth",
            format!("{:.1}%", stock.fundamentals.revenue_growth * 100.0),
        ),
        metric("RSI", format!("{:.1}", stock.technicals.rsi)),
        metric("MACD", format!("{:.2}", stock.technicals.macd)),
        metric("Trend", stock.technicals.trend.clone()),
    ]
}

fn build_price_bar_rows(bars: &[PriceBar]) -> Vec<PriceBarRow> {
    bars.iter()
        .map(|b| PriceBarRow {
            date: b.date.to_string(),
            open: format_opt_currency(b.open),
            high: format_opt_currency(b.high),
            low: format_opt_currency(b.low),
            close: format_currency(b.close),
            volume: b.volume.map(format_volume).unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_news_rows(articles: &[NewsArticle]) -> Vec<NewsRow> {
    articles
        .iter()
        .map(|a| NewsRow {
            published: a.published_at.format("%Y-%m-%d %H:%M").to_string(),
            source: a.source.clone().unwrap_or_default(),
            sentiment: a
                .sentiment_score
                .map(|s| format!("{:+.2}", s))
                .unwrap_or_else(|| "-".to_string()),
            headline: a.headline.clone(),
        })
        .collect()
}

fn build_filing_rows(filings: &[SecFiling]) -> Vec<FilingRow> {
    filings
        .iter()
        .map(|f| FilingRow {
            date: f.filing_date.to_string(),
            ticker: f.ticker.clone().unwrap_or_default(),
            filing_type: f.filing_type.clone(),
            material: if f.is_material { "yes" } else { "no" }.to_string(),
            summary: f.summary.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_earnings_rows(events: &[EarningsEvent]) -> Vec<EarningsRow> {
    events
        .iter()
        .map(|e| EarningsRow {
            date: e.date.to_string(),
            ticker: e.ticker.clone(),
            company: e.company.clone(),
            session: e.time.replace('_', " "),
            eps_estimate: format_opt_currency(e.eps_estimate),
        })
        .collect()
}

fn build_macro_rows(events: &[MacroEvent]) -> Vec<MacroRow> {
    events
        .iter()
        .map(|e| MacroRow {
            date: e.date.to_string(),
            event: e.event.clone(),
            importance: e.importance.clone(),
            previous: e.previous.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
            forecast: e.forecast.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

fn build_insider_rows(transactions: &[InsiderTransaction]) -> Vec<InsiderRow> {
    transactions
        .iter()
        .map(|t| InsiderRow {
            date: t.transaction_date.to_string(),
            ticker: t.ticker.clone(),
            insider: match &t.title {
                Some(title) => format!("{} ({})", t.insider, title),
                None => t.insider.clone(),
            },
            transaction_type: t.transaction_type.clone(),
            shares: t.shares,
            price: format_opt_currency(t.price),
        })
        .collect()
}

// -- Recommendation card --

/// Text rendering of the day's pick: header, price targets with the signed
/// move to each level, risk/reward, and the catalyst and reasoning paragraphs.
pub fn build_card_lines(rec: &Recommendation) -> Vec<String> {
    vec![
        format!(
            "{}  {}  [{}]  Score: {}",
            rec.ticker,
            rec.name,
            rec.action,
            format_score(rec.total_score)
        ),
        format!(
            "Current {}  |  Target {} ({})  |  Stop Loss {} ({})",
            format_currency(rec.price),
            format_currency(rec.target),
            format_move(rec.upside_pct()),
            format_currency(rec.stop_loss),
            format_move(stop_move_pct(rec)),
        ),
        format!(
            "Technical {:.1}  |  Fundamental {:.1}  |  Catalyst {:.1}",
            rec.technical_score, rec.fundamental_score, rec.catalyst_score
        ),
        format!(
            "Risk/Reward {:.1}x  |  Position Size {}",
            rec.risk_reward, rec.position_size
        ),
        String::new(),
        "CATALYST".to_string(),
        rec.catalyst.clone(),
        String::new(),
        "REASONING".to_string(),
        rec.reasoning.clone(),
    ]
}

// -- Rendering --

fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", Table::new(rows));
        }
    }
    Ok(())
}

pub fn print_digest(digest: &DailyDigest, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(digest),
        OutputFormat::Csv => print_rows(vec![build_recommendation_row(&digest.top_recommendation)], format)?,
        OutputFormat::Table | OutputFormat::Markdown => {
            let moves = &digest.market_summary.overnight_moves;
            println!(
                "Daily digest for {} (generated {})",
                digest.date,
                digest.generated_at.format("%Y-%m-%d %H:%M UTC")
            );
            println!(
                "Overnight: S&P 500 {}  Nasdaq {}  Dow {}",
                format_change(moves.sp500_change),
                format_change(moves.nasdaq_change),
                format_change(moves.dow_change)
            );
            println!("Key driver: {}", digest.market_summary.key_driver);
            println!();
            for line in build_card_lines(&digest.top_recommendation) {
                println!("{}", line);
            }
            println!();
            println!("WATCH LIST");
            print_rows(build_watch_rows(&digest.watch_list), format)?;
            println!();
            println!("KEY EVENTS");
            print_rows(build_key_event_rows(&digest.key_events), format)?;
            println!();
            let ctx = &digest.macro_context;
            println!("Fed policy: {}", ctx.fed_policy);
            println!("Inflation:  {}", ctx.inflation);
            println!("Sentiment:  {}", ctx.sentiment);
        }
    }
    Ok(())
}

pub fn print_digest_history(history: &DigestHistory, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(history),
        _ => print_rows(build_digest_rows(history), format)?,
    }
    Ok(())
}

pub fn print_performance(perf: &PerformanceReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(perf),
        OutputFormat::Csv => print_rows(build_pick_rows(&perf.recent_picks), format)?,
        _ => {
            print_rows(build_performance_rows(perf), format)?;
            if !perf.recent_picks.is_empty() {
                println!();
                print_rows(build_pick_rows(&perf.recent_picks), format)?;
            }
        }
    }
    Ok(())
}

pub fn print_stock(stock: &StockDetails, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(stock),
        OutputFormat::Csv => print_rows(build_stock_rows(stock), format)?,
        _ => {
            println!("{}  {}", stock.ticker, stock.name);
            print_rows(build_stock_rows(stock), format)?;
        }
    }
    Ok(())
}

pub fn print_price_bars(bars: &[PriceBar], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&bars),
        _ => print_rows(build_price_bar_rows(bars), format)?,
    }
    Ok(())
}

pub fn print_news(articles: &[NewsArticle], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&articles),
        _ => print_rows(build_news_rows(articles), format)?,
    }
    Ok(())
}

pub fn print_filings(filings: &[SecFiling], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&filings),
        _ => print_rows(build_filing_rows(filings), format)?,
    }
    Ok(())
}

pub fn print_earnings(events: &[EarningsEvent], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&events),
        _ => print_rows(build_earnings_rows(events), format)?,
    }
    Ok(())
}

pub fn print_macro_events(events: &[MacroEvent], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&events),
        _ => print_rows(build_macro_rows(events), format)?,
    }
    Ok(())
}

pub fn print_insider_trades(
    transactions: &[InsiderTransaction],
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&transactions),
        _ => print_rows(build_insider_rows(transactions), format)?,
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

// -- Formatting --

fn metric(name: &str, value: String) -> MetricRow {
    MetricRow {
        metric: name.to_string(),
        value,
    }
}

fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

fn format_opt_currency(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| "-".to_string())
}

/// Signed percent change with two decimals, e.g. `+0.50%`.
fn format_change(value: f64) -> String {
    format!("{:+.2}%", value)
}

/// Signed move from the current price with one decimal, e.g. `+15.5%`.
fn format_move(value: Option<f64>) -> String {
    match value {
        // Avoid printing `-0.0%` when the level equals the price.
        Some(v) if v == 0.0 => "+0.0%".to_string(),
        Some(v) => format!("{:+.1}%", v),
        None => "n/a".to_string(),
    }
}

/// Move from the current price to the stop loss. Negative for a stop below
/// the price, positive for a stop above it.
fn stop_move_pct(rec: &Recommendation) -> Option<f64> {
    rec.downside_pct().map(|d| -d)
}

fn format_score(score: f64) -> String {
    format!("{}/10", score)
}

fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000.0 {
        format!("{:.1}M", volume / 1_000_000.0)
    } else if volume >= 1_000.0 {
        format!("{:.1}K", volume / 1_000.0)
    } else {
        format!("{}", volume)
    }
}
