// File: crates/pricechart-demo/src/main.rs
// Summary: Demo host: loads daily bars from CSV or JSON, drives a scripted
//          interaction session through ChartState and prints the resulting frame.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate};
use clap::Parser;
use pricechart_core::input::SHORTCUTS;
use pricechart_core::{
    BarRecord, BarSeries, ChartConfig, ChartEvent, ChartFrame, ChartState, Key, Point, Size,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(version, about = "Price chart engine demo")]
struct Cli {
    /// Bars as CSV (date/open/high/low/close[/volume]) or a JSON array of bar objects.
    input: String,
    /// TOML chart configuration.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Plot width in pixels (overrides the config).
    #[arg(long)]
    width: Option<f64>,
    /// Plot height in pixels (overrides the config).
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(p) => ChartConfig::load(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => ChartConfig::default(),
    };
    if let Some(w) = cli.width {
        config.surface.width = w;
    }
    if let Some(h) = cli.height {
        config.surface.height = h;
    }

    let path = PathBuf::from(&cli.input);
    if !path.is_file() {
        anyhow::bail!("input file not found: {}", path.display());
    }
    info!(path = %path.display(), "using input file");

    let mut records = load_records(&path).with_context(|| format!("failed to load bars from '{}'", path.display()))?;
    if records.is_empty() {
        anyhow::bail!("no bars loaded; check headers/delimiter");
    }
    records.sort_by_key(|r| r.date);
    let bars = BarSeries::from_records(records).context("input bars are inconsistent")?;
    if let (Some(first), Some(last)) = (bars.bars().first(), bars.bars().last()) {
        info!(bars = bars.len(), from = %first.date, to = %last.date, "loaded bars");
    }

    let mut chart = ChartState::new(bars, &config);
    run_session(&mut chart);
    print_frame(&chart.frame(), chart.size());

    if chart.show_help() {
        println!("\nShortcuts:");
        for (keys, action) in SHORTCUTS {
            println!("  {keys:<12} {action}");
        }
    }
    Ok(())
}

/// What a user might do in the first few seconds: zoom into the middle, nudge
/// left, switch on the oscillators, hover, and sketch a trendline.
fn run_session(chart: &mut ChartState) {
    let Size { width, height } = chart.size();
    for _ in 0..5 {
        chart.handle(ChartEvent::Wheel { delta_y: -100.0, x: width * 0.5 });
    }
    chart.handle(ChartEvent::Key(Key::ArrowLeft));
    for c in ['b', 'r', 'm'] {
        chart.handle(ChartEvent::Key(Key::Char(c)));
    }

    chart.handle(ChartEvent::PointerMove(Point::new(width * 0.5, height * 0.5)));
    match chart.crosshair().sample() {
        Some(s) => {
            let date = chart.bars().get(s.bar_index).map(|b| b.date.to_string()).unwrap_or_default();
            println!("Crosshair: bar {} ({date}) @ {:.4}", s.bar_index, s.price);
        }
        None => warn!("no crosshair sample; surface or price range is empty"),
    }

    chart.handle(ChartEvent::Key(Key::Char('t')));
    chart.handle(ChartEvent::PointerDown(Point::new(width * 0.25, height * 0.7)));
    chart.handle(ChartEvent::PointerMove(Point::new(width * 0.75, height * 0.3)));
    chart.handle(ChartEvent::PointerUp(Point::new(width * 0.75, height * 0.3)));
    chart.handle(ChartEvent::Key(Key::Char('t')));
    chart.handle(ChartEvent::Key(Key::Char('?')));
}

fn print_frame(frame: &ChartFrame<'_>, size: Size) {
    println!("Surface: {:.0}x{:.0}, style: {}", size.width, size.height, frame.style.name());
    println!(
        "Window: [{:.2}, {:.2}]{} -> {} visible bars",
        frame.resolved.start,
        frame.resolved.end,
        if frame.domain.is_none() { " (full)" } else { "" },
        frame.bars.len()
    );
    if let Some(p) = frame.price {
        println!("Price axis: [{:.4}, {:.4}]", p.min, p.max);
    }
    println!(
        "Indicators: sma {:?}, bollinger {}, rsi {}, macd {}",
        frame.indicators.sma_periods,
        frame.indicators.bollinger.enabled,
        frame.indicators.rsi.enabled,
        frame.indicators.macd.enabled
    );

    if let Some((bar, sample)) = frame.visible().last() {
        println!(
            "Last visible {} ({}): O {:.4} H {:.4} L {:.4} C {:.4} ({:+.2}%)",
            bar.date,
            if bar.is_up() { "up" } else { "down" },
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.change_percent
        );
        println!(
            "  sma20 {} sma50 {} bb [{} / {} / {}]",
            fmt_opt(sample.sma20),
            fmt_opt(sample.sma50),
            fmt_opt(sample.bollinger_lower),
            fmt_opt(sample.bollinger_middle),
            fmt_opt(sample.bollinger_upper)
        );
        println!(
            "  rsi {} macd {} signal {} hist {}",
            fmt_opt(sample.rsi),
            fmt_opt(sample.macd_line),
            fmt_opt(sample.signal_line),
            fmt_opt(sample.histogram)
        );
    }

    for line in frame.lines {
        println!(
            "{} {:?} {}: ({:.0}, {:.4}) -> ({:.0}, {:.4})",
            line.id, line.kind, line.color, line.start.index, line.start.price, line.end.index, line.end.price
        );
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn load_records(path: &Path) -> Result<Vec<BarRecord>> {
    if is_json(path) {
        let text = std::fs::read_to_string(path)?;
        let records: Vec<BarRecord> = serde_json::from_str(&text).context("expected a JSON array of bars")?;
        Ok(records)
    } else {
        load_csv(path)
    }
}

/// Load a daily OHLC CSV. Rows missing a price column or an unparseable date are skipped.
fn load_csv(path: &Path) -> Result<Vec<BarRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| -> Option<usize> { headers.iter().position(|h| names.contains(&h.as_str())) };

    let i_date = idx(&["date", "time", "timestamp", "open_time", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    let i_volume = idx(&["volume", "vol", "v"]);
    let i_turnover = idx(&["turnovervalue", "turnover_value", "turnover", "value"]);

    let Some(i_date) = i_date else {
        anyhow::bail!("no date column in {:?}", headers);
    };
    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };
        let date = rec.get(i_date).and_then(parse_date);
        match (date, parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            (Some(date), Some(open), Some(high), Some(low), Some(close)) => out.push(BarRecord {
                date,
                open,
                high,
                low,
                close,
                volume: parse(i_volume).unwrap_or(0.0),
                turnover_value: parse(i_turnover).unwrap_or(0.0),
            }),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "skipped incomplete rows");
    }
    Ok(out)
}

/// `YYYY-MM-DD`, an RFC 3339 timestamp, or epoch seconds/milliseconds.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    let n = s.parse::<i64>().ok()?;
    // epoch ms -> sec
    let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
    DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
}
