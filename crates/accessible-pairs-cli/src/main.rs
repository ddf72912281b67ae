//! accessible-pairs CLI - list, check and render accessible color pairs.

#![allow(clippy::needless_pass_by_value)]

mod config;
mod logging;
mod report;

use accessible_pairs_core::{enumerate_pairs, qualify_styles, PairSet};
use accessible_pairs_layout::render_svg;
use accessible_pairs_yaml::{LoadedStyles, StyleDocument};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use config::Config;
use report::{check_text, OutputFormat, PairReport};
use std::path::{Path, PathBuf};

/// Completion notice printed after a render.
const NOTICE: &str = "Generated accessible pairs! 🎉";

#[derive(Parser)]
#[command(name = "accessible-pairs")]
#[command(about = "Find color style pairs that meet WCAG contrast")]
#[command(version)]
struct Cli {
    /// Config file (default: ./accessible-pairs.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PairArgs {
    /// Paint style document (YAML or JSON)
    styles: PathBuf,

    /// Minimum contrast ratio, inclusive
    #[arg(long)]
    min_contrast: Option<f64>,

    /// Score each unordered pair once instead of the full cross product
    #[arg(long)]
    unordered: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List pairs that meet the contrast threshold
    Pairs {
        #[command(flatten)]
        args: PairArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Render accepted pairs as an SVG swatch frame
    Render {
        #[command(flatten)]
        args: PairArgs,

        /// Output file
        #[arg(short, long, default_value = "accessible-pairs.svg")]
        output: PathBuf,
    },

    /// Show which styles qualify for pairing
    Check {
        /// Paint style document (YAML or JSON)
        styles: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Pairs { args, format } => {
            let config = config.with_overrides(args.min_contrast, args.unordered)?;
            let (library, pairs) = score(&args.styles, &config)?;
            let report = PairReport::new(library.as_deref(), &config.contrast, &pairs);
            match format {
                OutputFormat::Text => Ok(report.to_text()),
                OutputFormat::Json => report.to_json().map(|json| json + "\n"),
            }
        }
        Commands::Render { args, output } => {
            let config = config.with_overrides(args.min_contrast, args.unordered)?;
            let (_, pairs) = score(&args.styles, &config)?;
            let svg = render_svg(&pairs, config.render);
            std::fs::write(&output, svg)
                .with_context(|| format!("failed to write {}", output.display()))?;
            tracing::info!(pairs = pairs.len(), path = %output.display(), "rendered swatches");
            if cli.quiet {
                Ok(String::new())
            } else {
                Ok(format!("{NOTICE}\n  Output: {}\n", output.display()))
            }
        }
        Commands::Check { styles } => {
            let (library, loaded) = load(&styles)?;
            let qualification = qualify_styles(&loaded.styles);
            Ok(check_text(
                library.as_deref(),
                &qualification,
                &loaded.rejected,
            ))
        }
    }
}

fn load(path: &Path) -> anyhow::Result<(Option<String>, LoadedStyles)> {
    let mut document = StyleDocument::load(path)
        .with_context(|| format!("failed to read styles {}", path.display()))?;
    let library = document.name.take();
    Ok((library, document.into_styles()))
}

fn score(path: &Path, config: &Config) -> anyhow::Result<(Option<String>, PairSet)> {
    let (library, loaded) = load(path)?;
    let qualification = qualify_styles(&loaded.styles);
    for skipped in &qualification.skipped {
        tracing::info!(style = %skipped.name, reason = %skipped.reason, "skipping style");
    }
    let pairs = enumerate_pairs(&qualification.qualified, &config.contrast, PairSet::new());
    tracing::info!(
        evaluated = pairs.evaluated(),
        accepted = pairs.len(),
        "scored pairs"
    );
    Ok((library, pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r##"
name: "Acme UI"
styles:
  - name: "Neutral/0"
    paints:
      - type: SOLID
        color: { r: 1, g: 1, b: 1 }
  - name: "Neutral/900"
    paints:
      - type: SOLID
        color: "#1e293b"
  - name: "Brand/Red"
    paints:
      - type: SOLID
        color: { r: 1, g: 0, b: 0 }
  - name: "Brand/Sunset"
    paints:
      - type: GRADIENT_LINEAR
  - name: "Legacy/Typo"
    paints:
      - type: SOLID
        color: "#12345"
"##;

    fn workspace(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("accessible-pairs-cli-{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("library.yaml"), LIBRARY).unwrap();
        dir
    }

    fn run_args(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        run(cli)
    }

    #[test]
    fn test_parse_pairs_defaults() {
        let cli = Cli::try_parse_from(["accessible-pairs", "pairs", "styles.yaml"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        let Commands::Pairs { args, format } = cli.command else {
            panic!("expected pairs");
        };
        assert_eq!(args.styles, PathBuf::from("styles.yaml"));
        assert!(args.min_contrast.is_none());
        assert!(!args.unordered);
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "accessible-pairs",
            "render",
            "styles.yaml",
            "-vv",
            "--config",
            "pairs.toml",
            "--min-contrast",
            "4.5",
            "--unordered",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("pairs.toml")));
        let Commands::Render { args, output } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.min_contrast, Some(4.5));
        assert!(args.unordered);
        assert_eq!(output, PathBuf::from("accessible-pairs.svg"));
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(
            Cli::try_parse_from(["accessible-pairs", "pairs", "s.yaml", "--format", "csv"])
                .is_err()
        );
    }

    #[test]
    fn test_pairs_text() {
        let dir = workspace("pairs-text");
        let styles = dir.join("library.yaml");
        let out = run_args(&["accessible-pairs", "pairs", styles.to_str().unwrap()]).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Acme UI: 6 of 9 pairs meet 3.00:1 (cross-product)");
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("Neutral/0 / Neutral/900"));
        assert!(lines[1].ends_with("14.62  AAA"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_pairs_json_with_overrides() {
        let dir = workspace("pairs-json");
        let styles = dir.join("library.yaml");
        let out = run_args(&[
            "accessible-pairs",
            "pairs",
            styles.to_str().unwrap(),
            "--format",
            "json",
            "--min-contrast",
            "4.5",
            "--unordered",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["evaluated"], 6);
        assert_eq!(value["accepted"], 1);
        assert_eq!(value["enumeration"], "unordered");
        assert_eq!(value["pairs"][0]["second"], "Neutral/900");
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_file_sets_threshold() {
        let dir = workspace("config-file");
        let styles = dir.join("library.yaml");
        let config = dir.join("pairs.toml");
        std::fs::write(&config, "[contrast]\nmin_contrast = 7.0\n").unwrap();
        let out = run_args(&[
            "accessible-pairs",
            "--config",
            config.to_str().unwrap(),
            "pairs",
            styles.to_str().unwrap(),
        ])
        .unwrap();
        assert!(out.starts_with("Acme UI: 2 of 9 pairs meet 7.00:1"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_render_writes_svg() {
        let dir = workspace("render");
        let styles = dir.join("library.yaml");
        let svg = dir.join("pairs.svg");
        let out = run_args(&[
            "accessible-pairs",
            "render",
            styles.to_str().unwrap(),
            "-o",
            svg.to_str().unwrap(),
        ])
        .unwrap();
        assert!(out.starts_with(NOTICE));
        let written = std::fs::read_to_string(&svg).unwrap();
        assert!(written.starts_with("<svg"));
        assert_eq!(written.matches("<ellipse").count(), 12);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_render_quiet_prints_nothing() {
        let dir = workspace("render-quiet");
        let styles = dir.join("library.yaml");
        let svg = dir.join("pairs.svg");
        let out = run_args(&[
            "accessible-pairs",
            "-q",
            "render",
            styles.to_str().unwrap(),
            "-o",
            svg.to_str().unwrap(),
        ])
        .unwrap();
        assert!(out.is_empty());
        assert!(svg.is_file());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_check_lists_skips() {
        let dir = workspace("check");
        let styles = dir.join("library.yaml");
        let out = run_args(&["accessible-pairs", "check", styles.to_str().unwrap()]).unwrap();
        assert!(out.starts_with("Acme UI: 3 qualifying, 1 skipped, 1 rejected\n"));
        assert!(out.contains("Brand/Sunset: first paint is GRADIENT_LINEAR, not SOLID"));
        assert!(out.contains("  error  Legacy/Typo: "));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_styles_file_errors() {
        let err = run_args(&["accessible-pairs", "pairs", "/nonexistent/library.yaml"])
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read styles"));
    }

    #[test]
    fn test_negative_threshold_errors() {
        let dir = workspace("negative");
        let styles = dir.join("library.yaml");
        let err = run_args(&[
            "accessible-pairs",
            "pairs",
            styles.to_str().unwrap(),
            "--min-contrast=-1",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("invalid contrast threshold"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
