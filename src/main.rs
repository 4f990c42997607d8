//! soc-maturity: SOC governance and Purple Team maturity scoring
//!
//! Scores a governance questionnaire and a Purple Team exercise, and fuses
//! both into a single maturity index.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use soc_maturity::{
    cli::{self, AssessInputs, GovernanceInputs, MetricsSource, PurpleScoreInput},
    config::{self, AppConfig, ConfigPreset, CONFIG_FILE_NAMES},
    pipeline::exit_codes,
    reports::ReportFormat,
    MaturityError,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring model info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nAssessments:",
        "\n  governance  weighted questionnaire, score in [0, 1]",
        "\n  purple      Purple Team exercise, score out of 100, levels 0-5",
        "\n  fuse        alpha * governance + beta * purple, tiers Niveau 0-5",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "soc-maturity")]
#[command(version, long_version = build_long_version())]
#[command(about = "SOC governance and Purple Team maturity scoring", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score
    3  Error occurred

EXAMPLES:
    # Score the governance questionnaire
    soc-maturity governance --weights weights.yaml --responses answers.yaml

    # Score a Purple Team exercise entered on the terminal
    soc-maturity purple --interactive

    # Fuse precomputed scores with custom weights
    soc-maturity fuse --governance 0.82 --purple-100 75 --alpha 0.7 --beta 0.3

    # Full assessment as a CI gate
    soc-maturity assess --weights w.yaml --responses r.yaml --metrics m.yaml --min-score 0.6")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Configuration preset (default, balanced, governance-focused, exercise-focused, lenient)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output options shared by every scoring command
#[derive(Args)]
struct OutputArgs {
    /// Output format (defaults to the config file's, then summary)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if the headline score is below this value (0.0-1.0)
    #[arg(long)]
    min_score: Option<f64>,
}

/// Fusion weight overrides
#[derive(Args)]
struct WeightArgs {
    /// Weight of the governance score; beta defaults to 1 - alpha
    #[arg(long)]
    alpha: Option<f64>,

    /// Weight of the Purple Team score; alpha defaults to 1 - beta
    #[arg(long)]
    beta: Option<f64>,
}

/// Questionnaire files
#[derive(Args)]
struct QuestionnaireArgs {
    /// Weight table (YAML or JSON)
    #[arg(long)]
    weights: PathBuf,

    /// Response sheet (YAML or JSON)
    #[arg(long)]
    responses: PathBuf,
}

/// Exercise metrics source
#[derive(Args)]
#[group(required = true, multiple = false)]
struct MetricsArgs {
    /// Exercise metrics file (YAML or JSON)
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Ask for the exercise metrics on the terminal
    #[arg(long)]
    interactive: bool,
}

impl MetricsArgs {
    fn source(&self) -> MetricsSource {
        self.metrics
            .clone()
            .map_or(MetricsSource::Interactive, MetricsSource::File)
    }
}

/// Arguments for the `governance` subcommand
#[derive(Parser)]
struct GovernanceArgs {
    #[command(flatten)]
    questionnaire: QuestionnaireArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `purple` subcommand
#[derive(Parser)]
struct PurpleArgs {
    #[command(flatten)]
    metrics: MetricsArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `fuse` subcommand
#[derive(Parser)]
struct FuseArgs {
    /// Governance score in [0, 1]
    #[arg(long)]
    governance: f64,

    #[command(flatten)]
    purple: PurpleScoreArgs,

    #[command(flatten)]
    weights: WeightArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Purple Team score source
#[derive(Args)]
#[group(required = true, multiple = false)]
struct PurpleScoreArgs {
    /// Purple Team score in [0, 1]
    #[arg(long)]
    purple: Option<f64>,

    /// Purple Team global score out of 100
    #[arg(long = "purple-100")]
    purple_100: Option<f64>,

    /// Ask for the Purple Team score on the terminal
    #[arg(long)]
    interactive: bool,
}

impl PurpleScoreArgs {
    fn input(&self) -> PurpleScoreInput {
        match (self.purple, self.purple_100) {
            (Some(score), _) => PurpleScoreInput::Normalized(score),
            (None, Some(score)) => PurpleScoreInput::OutOf100(score),
            (None, None) => PurpleScoreInput::Interactive,
        }
    }
}

/// Arguments for the `assess` subcommand
#[derive(Parser)]
struct AssessArgs {
    #[command(flatten)]
    questionnaire: QuestionnaireArgs,

    #[command(flatten)]
    metrics: MetricsArgs,

    #[command(flatten)]
    weights: WeightArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a governance questionnaire
    Governance(GovernanceArgs),

    /// Score a Purple Team exercise
    Purple(PurpleArgs),

    /// Fuse a governance score with a Purple Team score
    Fuse(FuseArgs),

    /// Run governance, Purple Team and fusion in one go
    Assess(AssessArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .soc-maturity.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    // Dispatch to command handlers
    match cli.command {
        Commands::Governance(ref args) => {
            let config = resolve_config(&cli, &args.output, None)?;
            let inputs = GovernanceInputs {
                weights: args.questionnaire.weights.clone(),
                responses: args.questionnaire.responses.clone(),
            };
            cli::run_governance(&inputs, &config)
        }

        Commands::Purple(ref args) => {
            let config = resolve_config(&cli, &args.output, None)?;
            cli::run_purple(&args.metrics.source(), &config)
        }

        Commands::Fuse(ref args) => {
            let config = resolve_config(&cli, &args.output, Some(&args.weights))?;
            cli::run_fuse(args.governance, args.purple.input(), &config)
        }

        Commands::Assess(ref args) => {
            let config = resolve_config(&cli, &args.output, Some(&args.weights))?;
            let inputs = AssessInputs {
                governance: GovernanceInputs {
                    weights: args.questionnaire.weights.clone(),
                    responses: args.questionnaire.responses.clone(),
                },
                metrics: args.metrics.source(),
            };
            cli::run_assess(&inputs, &config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "soc-maturity", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { ref output } => {
            let schema = config::generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { ref action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref())
                    .map_err(MaturityError::from)?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::config_search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".soc-maturity.yaml");
                if target.exists() {
                    bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Build the effective configuration: file, then preset and global flags,
/// then explicit per-command options.
fn resolve_config(
    cli: &Cli,
    output: &OutputArgs,
    weights: Option<&WeightArgs>,
) -> Result<AppConfig> {
    let preset = match cli.preset.as_deref() {
        Some(name) => match ConfigPreset::from_name(name) {
            Some(preset) => preset,
            None => {
                let valid: Vec<_> = ConfigPreset::all()
                    .iter()
                    .map(|p| format!("  {:<20} {}", p.name(), p.description()))
                    .collect();
                bail!("Unknown preset: {name}. Valid options:\n{}", valid.join("\n"));
            }
        },
        None => ConfigPreset::Default,
    };

    let mut overrides = AppConfig::from_preset(preset);
    overrides.output.no_color = cli.no_color;
    overrides.behavior.quiet = cli.quiet;

    let (mut config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)
            .map_err(MaturityError::from)?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    if let Some(format) = output.output {
        config.output.format = format;
    }
    if output.output_file.is_some() {
        config.output.file.clone_from(&output.output_file);
    }
    if output.min_score.is_some() {
        config.behavior.min_fused_score = output.min_score;
    }
    if let Some(weights) = weights {
        match (weights.alpha, weights.beta) {
            (Some(alpha), Some(beta)) => {
                config.fusion.governance_weight = alpha;
                config.fusion.purple_weight = beta;
            }
            (Some(alpha), None) => {
                config.fusion.governance_weight = alpha;
                config.fusion.purple_weight = 1.0 - alpha;
            }
            (None, Some(beta)) => {
                config.fusion.governance_weight = 1.0 - beta;
                config.fusion.purple_weight = beta;
            }
            (None, None) => {}
        }
    }

    cli::ensure_valid_config(&config)?;
    Ok(config)
}
