use anyhow::{Context, Result};
use changelog_validator::utils::reporting::{render_error, render_result};
use changelog_validator::{
    ChangelogChecker, ChangelogReport, StepSummaryFile, SummarySink, ValidatorConfig,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "changelog-validator")]
#[command(version, about = "validates the presence and format of CHANGELOG.md", long_about = None)]
struct Cli {
    /// path to changelog file (default: CHANGELOG.md)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// check if changelog was updated in PR
    #[arg(short = 'u', long)]
    check_updated: bool,

    /// reference the update check diffs against (default: origin/main)
    #[arg(long)]
    base_ref: Option<String>,

    /// configuration file (defaults to ./changelog-validator.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// output format (json or human)
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// show issue details and released versions
    #[arg(short, long)]
    verbose: bool,

    /// disable colored output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Json,
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" => Ok(OutputFormat::Human),
            _ => Err(format!(
                "invalid output format: {}, use 'json' or 'human'",
                s
            )),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format!("❌ Error: {:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<ValidatorConfig> {
    let mut config = match &cli.config {
        Some(path) => ValidatorConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ValidatorConfig::load(".").context("failed to load configuration")?,
    };

    if let Some(path) = &cli.path {
        config.changelog.path = path.clone();
    }
    if cli.check_updated {
        config.changelog.check_updated = true;
    }
    if let Some(base_ref) = &cli.base_ref {
        config.changelog.base_ref = base_ref.clone();
    }

    Ok(config)
}

fn write_summary(sink: &mut Option<StepSummaryFile>, markdown: &str) {
    if let Some(sink) = sink
        && let Err(e) = sink.write(markdown)
    {
        eprintln!("{}", format!("⚠️ {}", e).yellow());
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let detected = StepSummaryFile::detect(|key| std::env::var(key).ok());

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => {
            // no config, so the default summary setting applies
            let markdown = render_error(&format!("❌ Error: {:#}", e));
            write_summary(&mut detected.clone(), &markdown);
            return Err(e);
        }
    };

    let mut summary = detected.filter(|_| config.reporting.step_summary);

    let checker = ChangelogChecker::new(config.changelog.clone());

    let report = match checker.check() {
        Ok(report) => report,
        Err(e) if e.is_acquisition_failure() => {
            let message = e.to_string();
            match cli.format {
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "path": checker.config().path,
                        "valid": false,
                        "error": message,
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Human => {
                    eprintln!("{}", format!("❌ {}", message).red());
                }
            }
            write_summary(&mut summary, &render_error(&format!("❌ {}", message)));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("changelog check failed"),
    };

    print_report(&report, &cli.format, cli.verbose)?;
    write_summary(&mut summary, &render_result(&report.path, &report.result));

    if report.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_report(report: &ChangelogReport, format: &OutputFormat, verbose: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.to_json())?);
        }
        OutputFormat::Human => report.display_human(verbose),
    }
    Ok(())
}
