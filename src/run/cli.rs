use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::analysis::{
    accumulate, peaks_by_month, target_trajectory, TrajectoryPoint, DEFAULT_TRAJECTORY_DAYS,
};
use crate::config::{normalize_label, PortfolioConfig};
use crate::import::{detect_schema, CsvImporter};
use crate::models::{MonthlySeries, Payment};
use crate::run::format_amount;

pub(crate) fn as_cli(args: &[String], config: &PortfolioConfig) -> Result<()> {
    match args[1].as_str() {
        "report" | "r" => cli_report(&args[2..], config),
        "meta" => cli_meta(&args[2..], config),
        "carteras" => cli_carteras(config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("metapagos {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("metapagos — cumulative portfolio payments vs. monthly targets");
    println!();
    println!("Usage: metapagos <command>");
    println!();
    println!("Commands:");
    println!("  report [file.csv] --cartera <name>   Per-month cumulative payments report");
    println!("    --target <amount>                  Override the configured monthly meta");
    println!("  meta <amount>                        Print the daily meta trajectory");
    println!("    --days <n>                         Trajectory length (default: 30)");
    println!("    --cartera <name>                   Use a configured cartera's meta");
    println!("  carteras                             List configured carteras and metas");
    println!("  --help, -h                           Show this help");
    println!("  --version, -V                        Show version");
}

fn cli_report(args: &[String], config: &PortfolioConfig) -> Result<()> {
    let cartera_arg = flag_value(args, "--cartera");
    let target_arg = flag_value(args, "--target");
    let file_arg = args.first().filter(|a| !a.starts_with('-')).cloned();

    let portfolio = cartera_arg.as_deref().and_then(|name| config.find(name));

    // The payments file: the positional argument, else the configured source
    let path_str = match (&file_arg, portfolio) {
        (Some(f), _) => shellexpand(f),
        (None, Some(p)) => p.source.clone(),
        (None, None) => {
            anyhow::bail!("Usage: metapagos report <file.csv> --cartera <name>");
        }
    };
    let path = Path::new(&path_str);
    if !path.exists() {
        anyhow::bail!("File not found: {path_str}");
    }

    let (headers, rows) = CsvImporter::preview(path)?;
    let profile = if let Some(detected) = detect_schema(&headers) {
        println!("Detected layout: {}", detected.name);
        detected
    } else {
        println!("Using configured schema '{}'", config.schema.name);
        config.schema.clone()
    };

    let report = CsvImporter::parse(&rows, &profile);
    println!(
        "Parsed {} payments ({} rows quarantined)",
        report.payments.len(),
        report.skipped_count()
    );
    for skip in &report.skipped {
        log::debug!("quarantined row {}: {}", skip.row, skip.reason);
    }

    let requested = match cartera_arg {
        Some(name) => name,
        None => {
            let mut found: Vec<&str> = report.payments.iter().map(|p| p.cartera.as_str()).collect();
            found.sort_unstable();
            found.dedup();
            let listing: Vec<String> = found
                .iter()
                .map(|n| format!("  --cartera \"{n}\""))
                .collect();
            anyhow::bail!(
                "No cartera selected. Use --cartera <name>:\n{}",
                listing.join("\n")
            );
        }
    };

    // Prefer the label spelling found in the data, then the configured name
    let cartera = resolve_label(&report.payments, &requested)
        .or_else(|| portfolio.map(|p| p.name.clone()))
        .unwrap_or_else(|| normalize_label(&requested));

    let target = match target_arg {
        Some(raw) => parse_target(&raw)?,
        None => portfolio.map(|p| p.target).ok_or_else(|| {
            anyhow::anyhow!("No configured meta for '{requested}'. Pass --target <amount>")
        })?,
    };

    let series = accumulate(&report.payments, &cartera);
    if series.is_empty() {
        log::warn!("no payments match cartera '{cartera}'");
        println!("No payments for cartera {cartera}");
        return Ok(());
    }

    let trajectory = target_trajectory(target, DEFAULT_TRAJECTORY_DAYS)?;
    print_report(&cartera, &series, &trajectory, target);
    Ok(())
}

fn print_report(
    cartera: &str,
    series: &MonthlySeries,
    trajectory: &[TrajectoryPoint],
    target: Decimal,
) {
    println!();
    println!(
        "Acumulado de pagos — {cartera} (meta {})",
        format_amount(target)
    );

    for (month, points) in series.iter() {
        println!();
        println!("Month {month}");
        println!("{}", "─".repeat(30));
        for p in points {
            println!("  day {:<3} {:>20}", p.day, format_amount(p.cumulative));
        }
    }

    let peaks = peaks_by_month(series);
    println!();
    println!("{:<6} {:>20} {:>6}  Pace", "Month", "Peak", "Band");
    println!("{}", "─".repeat(44));
    for (month, peak) in &peaks {
        let last_day = series
            .points(*month)
            .and_then(|pts| pts.last())
            .map(|p| p.day)
            .unwrap_or(1);
        let expected = pace_for_day(trajectory, last_day);
        let status = if peak.amount >= expected {
            "on pace"
        } else {
            "behind"
        };
        println!(
            "{:<6} {:>20} {:>6}  {status} (meta by day {last_day}: {})",
            month,
            format_amount(peak.amount),
            peak.band,
            format_amount(expected),
        );
    }
}

/// Trajectory value at `day`, clamped to the final projected day.
fn pace_for_day(trajectory: &[TrajectoryPoint], day: u32) -> Decimal {
    trajectory
        .iter()
        .rev()
        .find(|p| p.day <= day)
        .or_else(|| trajectory.first())
        .map(|p| p.cumulative)
        .unwrap_or(Decimal::ZERO)
}

/// Match a requested cartera against the labels actually present in the
/// data, tolerating case and formatting drift.
fn resolve_label(payments: &[Payment], wanted: &str) -> Option<String> {
    let canon = normalize_label(wanted).to_lowercase();
    payments
        .iter()
        .map(|p| p.cartera.as_str())
        .find(|label| normalize_label(label).to_lowercase() == canon)
        .map(str::to_string)
}

fn cli_meta(args: &[String], config: &PortfolioConfig) -> Result<()> {
    let days = match flag_value(args, "--days") {
        Some(d) => d
            .parse::<u32>()
            .with_context(|| format!("Invalid --days: {d}"))?,
        None => DEFAULT_TRAJECTORY_DAYS,
    };

    let target = if let Some(raw) = args.first().filter(|a| !a.starts_with('-')) {
        parse_target(raw)?
    } else if let Some(name) = flag_value(args, "--cartera") {
        config
            .find(&name)
            .map(|p| p.target)
            .ok_or_else(|| anyhow::anyhow!("Unknown cartera: {name}"))?
    } else {
        anyhow::bail!("Usage: metapagos meta <amount> [--days <n>]");
    };

    let trajectory = target_trajectory(target, days)?;
    println!("Meta {} over {days} days", format_amount(target));
    println!("{}", "─".repeat(28));
    for p in &trajectory {
        println!("  day {:<3} {:>20}", p.day, format_amount(p.cumulative));
    }
    Ok(())
}

fn cli_carteras(config: &PortfolioConfig) -> Result<()> {
    if config.portfolios.is_empty() {
        println!("No carteras configured");
        return Ok(());
    }

    println!("{:<16} {:>20}  Source", "Cartera", "Meta");
    println!("{}", "─".repeat(60));
    for p in &config.portfolios {
        println!(
            "{:<16} {:>20}  {}",
            p.name,
            format_amount(p.target),
            p.source
        );
    }
    Ok(())
}

fn parse_target(raw: &str) -> Result<Decimal> {
    let cleaned = raw.replace(['$', ','], "");
    Decimal::from_str(cleaned.trim()).with_context(|| format!("Invalid meta amount: {raw}"))
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
