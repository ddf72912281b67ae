//! Text and JSON output for the `pairs` and `check` commands.

use accessible_pairs_core::{
    ContrastConfig, ContrastScore, Enumeration, PairSet, Qualification, WcagLevel,
};
use accessible_pairs_yaml::RejectedStyle;
use serde::Serialize;
use std::fmt::Write;

/// Output format of `pairs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned table
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Machine-readable pair listing.
#[derive(Debug, Serialize)]
pub(crate) struct PairReport<'a> {
    pub(crate) library: Option<&'a str>,
    pub(crate) min_contrast: f64,
    pub(crate) enumeration: Enumeration,
    pub(crate) evaluated: usize,
    pub(crate) accepted: usize,
    pub(crate) pairs: Vec<PairRow<'a>>,
}

/// One accepted pair.
#[derive(Debug, Serialize)]
pub(crate) struct PairRow<'a> {
    pub(crate) first: &'a str,
    pub(crate) first_hex: String,
    pub(crate) second: &'a str,
    pub(crate) second_hex: String,
    pub(crate) contrast: ContrastScore,
    pub(crate) level: WcagLevel,
}

impl<'a> PairReport<'a> {
    pub(crate) fn new(
        library: Option<&'a str>,
        config: &ContrastConfig,
        pairs: &'a PairSet,
    ) -> Self {
        Self {
            library,
            min_contrast: config.min_contrast,
            enumeration: config.enumeration,
            evaluated: pairs.evaluated(),
            accepted: pairs.len(),
            pairs: pairs
                .iter()
                .map(|p| PairRow {
                    first: &p.first.name,
                    first_hex: p.first.rgb.to_hex(),
                    second: &p.second.name,
                    second_hex: p.second.rgb.to_hex(),
                    contrast: p.contrast,
                    level: p.level(),
                })
                .collect(),
        }
    }

    /// Render as an aligned table.
    pub(crate) fn to_text(&self) -> String {
        let mut out = String::new();
        let enumeration = match self.enumeration {
            Enumeration::CrossProduct => "cross-product",
            Enumeration::Unordered => "unordered",
        };
        let _ = writeln!(
            out,
            "{}: {} of {} pairs meet {:.2}:1 ({enumeration})",
            self.library.unwrap_or("Styles"),
            self.accepted,
            self.evaluated,
            self.min_contrast
        );

        let width = self
            .pairs
            .iter()
            .map(|row| row.first.chars().count() + row.second.chars().count() + 3)
            .max()
            .unwrap_or(0);
        for row in &self.pairs {
            let names = format!("{} / {}", row.first, row.second);
            let _ = writeln!(
                out,
                "  {names:<width$}  {} {}  {:>5}  {}",
                row.first_hex,
                row.second_hex,
                row.contrast,
                row.level.label()
            );
        }
        out
    }

    /// Render as pretty JSON.
    pub(crate) fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Human-readable result of `check`.
pub(crate) fn check_text(
    library: Option<&str>,
    qualification: &Qualification,
    rejected: &[RejectedStyle],
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} qualifying, {} skipped, {} rejected",
        library.unwrap_or("Styles"),
        qualification.qualified.len(),
        qualification.skipped.len(),
        rejected.len()
    );
    for style in &qualification.qualified {
        let _ = writeln!(
            out,
            "  ok     {}  {}  L={:.4}",
            style.name,
            style.rgb.to_hex(),
            style.luminance
        );
    }
    for style in &qualification.skipped {
        let tag = if style.reason.is_invalid_input() {
            "error"
        } else {
            "skip "
        };
        let _ = writeln!(out, "  {tag}  {}: {}", style.name, style.reason);
    }
    for style in rejected {
        let _ = writeln!(out, "  error  {}: {}", style.name, style.error);
    }
    out
}
