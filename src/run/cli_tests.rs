#![allow(clippy::unwrap_used)]

use super::*;
use rust_decimal_macros::dec;

fn traj(points: &[(u32, Decimal)]) -> Vec<TrajectoryPoint> {
    points
        .iter()
        .map(|(day, cumulative)| TrajectoryPoint {
            day: *day,
            cumulative: *cumulative,
        })
        .collect()
}

// ── flag_value ────────────────────────────────────────────────

#[test]
fn test_flag_value_present() {
    let args: Vec<String> = vec!["file.csv".into(), "--cartera".into(), "Comfama".into()];
    assert_eq!(flag_value(&args, "--cartera"), Some("Comfama".into()));
}

#[test]
fn test_flag_value_absent() {
    let args: Vec<String> = vec!["file.csv".into()];
    assert_eq!(flag_value(&args, "--cartera"), None);
}

#[test]
fn test_flag_value_missing_operand() {
    let args: Vec<String> = vec!["--cartera".into()];
    assert_eq!(flag_value(&args, "--cartera"), None);
}

// ── parse_target ──────────────────────────────────────────────

#[test]
fn test_parse_target_plain() {
    assert_eq!(parse_target("100000000").unwrap(), dec!(100000000));
}

#[test]
fn test_parse_target_formatted() {
    assert_eq!(parse_target("$100,000,000").unwrap(), dec!(100000000));
    assert_eq!(parse_target("1,500.75").unwrap(), dec!(1500.75));
}

#[test]
fn test_parse_target_invalid() {
    assert!(parse_target("a lot").is_err());
}

// ── pace_for_day ──────────────────────────────────────────────

#[test]
fn test_pace_for_day_exact() {
    let t = traj(&[(1, dec!(10)), (2, dec!(20)), (3, dec!(30))]);
    assert_eq!(pace_for_day(&t, 2), dec!(20));
}

#[test]
fn test_pace_for_day_clamps_past_end() {
    // Day 31 of a 30-day projection uses the final projected value
    let t = traj(&[(1, dec!(10)), (2, dec!(20))]);
    assert_eq!(pace_for_day(&t, 31), dec!(20));
}

#[test]
fn test_pace_for_day_before_start() {
    let t = traj(&[(5, dec!(50)), (6, dec!(60))]);
    assert_eq!(pace_for_day(&t, 1), dec!(50));
}

#[test]
fn test_pace_for_day_empty_trajectory() {
    assert_eq!(pace_for_day(&[], 10), Decimal::ZERO);
}

// ── resolve_label ─────────────────────────────────────────────

#[test]
fn test_resolve_label_exact() {
    let payments = vec![Payment::new("Comfama".into(), 1, 1, dec!(1))];
    assert_eq!(
        resolve_label(&payments, "Comfama"),
        Some("Comfama".to_string())
    );
}

#[test]
fn test_resolve_label_folds_drift() {
    let payments = vec![Payment::new("Nova Mexico".into(), 1, 1, dec!(1))];
    assert_eq!(
        resolve_label(&payments, "nova_mexico"),
        Some("Nova Mexico".to_string())
    );
}

#[test]
fn test_resolve_label_unknown() {
    let payments = vec![Payment::new("Comfama".into(), 1, 1, dec!(1))];
    assert_eq!(resolve_label(&payments, "Cueros"), None);
}

// ── shellexpand ───────────────────────────────────────────────

#[test]
fn test_shellexpand_plain_path() {
    assert_eq!(shellexpand("data/pagos.csv"), "data/pagos.csv");
}

#[test]
fn test_shellexpand_home() {
    let expanded = shellexpand("~/pagos.csv");
    assert!(expanded.ends_with("/pagos.csv"));
    assert!(!expanded.starts_with('~'));
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234567.89)), "$1,234,567.89");
}

#[test]
fn test_format_amount_small() {
    assert_eq!(format_amount(dec!(0.5)), "$0.50");
    assert_eq!(format_amount(dec!(42)), "$42.00");
}

#[test]
fn test_format_amount_default_target() {
    assert_eq!(format_amount(dec!(100000000)), "$100,000,000.00");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-1500.25)), "-$1,500.25");
}
