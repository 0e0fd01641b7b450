#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;

// ── normalize_label ───────────────────────────────────────────

#[test]
fn test_normalize_label_trims() {
    assert_eq!(normalize_label("  Comfama  "), "Comfama");
}

#[test]
fn test_normalize_label_underscores() {
    assert_eq!(normalize_label("Nova_Mexico"), "Nova Mexico");
    assert_eq!(normalize_label("Linea_Directa"), "Linea Directa");
}

#[test]
fn test_normalize_label_collapses_whitespace() {
    assert_eq!(normalize_label("Nova   Colombia"), "Nova Colombia");
    assert_eq!(normalize_label(" Nova _ Mexico "), "Nova Mexico");
}

#[test]
fn test_normalize_label_preserves_case() {
    assert_eq!(normalize_label("KEYPAGO"), "KEYPAGO");
}

// ── PortfolioConfig ───────────────────────────────────────────

#[test]
fn test_builtin_has_all_portfolios() {
    let config = PortfolioConfig::builtin();
    assert_eq!(config.portfolios.len(), 7);
    for name in BUILTIN_PORTFOLIOS {
        assert!(config.find(name).is_some(), "missing portfolio {name}");
    }
}

#[test]
fn test_builtin_default_target() {
    let config = PortfolioConfig::builtin();
    let p = config.find("Comfama").unwrap();
    assert_eq!(p.target, dec!(100000000));
}

#[test]
fn test_builtin_sources_are_slugged_paths() {
    let config = PortfolioConfig::builtin();
    assert_eq!(config.find("Comfama").unwrap().source, "data/comfama.csv");
    assert_eq!(
        config.find("Linea Directa").unwrap().source,
        "data/linea-directa.csv"
    );
}

#[test]
fn test_find_case_insensitive() {
    let config = PortfolioConfig::builtin();
    assert!(config.find("comfama").is_some());
    assert!(config.find("AZZORTI").is_some());
}

#[test]
fn test_find_tolerates_drifted_labels() {
    let config = PortfolioConfig::builtin();
    assert_eq!(config.find("Nova_Mexico").unwrap().name, "Nova Mexico");
    assert_eq!(config.find(" linea directa ").unwrap().name, "Linea Directa");
}

#[test]
fn test_find_unknown_is_none() {
    let config = PortfolioConfig::builtin();
    assert!(config.find("No Such Cartera").is_none());
}
