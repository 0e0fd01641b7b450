use rust_decimal::Decimal;

use crate::import::SchemaProfile;

/// A configured portfolio: where its payments file lives and what the
/// monthly collection target ("meta") is.
#[derive(Debug, Clone)]
pub(crate) struct Portfolio {
    pub(crate) name: String,
    /// Local path of the payments file. Remote fetching is handled by an
    /// external collaborator; by the time we run, the file is on disk.
    pub(crate) source: String,
    pub(crate) target: Decimal,
}

/// The portfolio registry plus the CSV schema used to read payment files.
///
/// Everything the loader and the analysis need is passed in through this
/// struct; there is no process-wide configuration.
#[derive(Debug, Clone)]
pub(crate) struct PortfolioConfig {
    pub(crate) portfolios: Vec<Portfolio>,
    pub(crate) schema: SchemaProfile,
}

const BUILTIN_PORTFOLIOS: [&str; 7] = [
    "Comfama",
    "Azzorti",
    "Cueros",
    "Keypago",
    "Linea Directa",
    "Nova Mexico",
    "Nova Colombia",
];

/// Default monthly target applied to every built-in portfolio.
const DEFAULT_TARGET: i64 = 100_000_000;

impl PortfolioConfig {
    /// The built-in registry: every known portfolio with its default
    /// monthly target, reading `data/<slug>.csv` with the default schema.
    pub(crate) fn builtin() -> Self {
        let portfolios = BUILTIN_PORTFOLIOS
            .iter()
            .map(|name| Portfolio {
                name: (*name).to_string(),
                source: format!("data/{}.csv", slug(name)),
                target: Decimal::from(DEFAULT_TARGET),
            })
            .collect();
        Self {
            portfolios,
            schema: SchemaProfile::default(),
        }
    }

    /// Look up a portfolio by name, tolerant of the label drift seen in
    /// the source files (case, surrounding whitespace, underscores).
    pub(crate) fn find(&self, name: &str) -> Option<&Portfolio> {
        let wanted = normalize_label(name).to_lowercase();
        self.portfolios
            .iter()
            .find(|p| normalize_label(&p.name).to_lowercase() == wanted)
    }
}

/// Collapse the label formats seen across source variants: surrounding
/// whitespace, underscores for spaces, doubled spaces. Case is preserved;
/// callers that need case-insensitive comparison lowercase on top.
pub(crate) fn normalize_label(raw: &str) -> String {
    raw.replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
