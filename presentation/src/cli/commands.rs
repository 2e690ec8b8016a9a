//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for orchestration results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer, score, and every connector outcome
    Full,
    /// Only the synthesized answer
    Result,
    /// JSON output
    Json,
}

impl From<OutputFormat> for nexus_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => nexus_domain::OutputFormat::Full,
            OutputFormat::Result => nexus_domain::OutputFormat::Result,
            OutputFormat::Json => nexus_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for nexus
#[derive(Parser, Debug)]
#[command(name = "nexus")]
#[command(author, version, about = "Fan a prompt out to many AI connectors and synthesize a consensus")]
#[command(long_about = r#"
Nexus sends one prompt to every configured AI connector in parallel and
folds their answers into a single consensus with a confidence score.

A connector is enabled when its API key variable is set (for example
OPENAI_API_KEY). The `development` mode also consults the extended pool
of code-oriented connectors.

Configuration files are loaded from (in priority order):
1. NEXUS_* environment variables
2. --config <path>     Explicit config file
3. ./nexus.toml        Project-level config
4. ~/.config/nexus/config.toml   Global config

Example:
  nexus ask "Why does my SIP trunk drop calls after 30 seconds?"
  nexus ask --mode development "Refactor this retry loop"
  nexus analyze-sip ./trace.log
  nexus health
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask every active connector and print the consensus
    Ask {
        /// The prompt to send
        prompt: String,

        /// Request mode: general, development, voip_analysis
        #[arg(short, long, default_value = "general")]
        mode: String,

        /// Extra context as a JSON object
        #[arg(long, value_name = "JSON")]
        context: Option<String>,
    },

    /// Show which connectors are enabled
    Health,

    /// Show service name and version
    Info,

    /// Diagnose a SIP log (`-` reads stdin)
    AnalyzeSip {
        #[arg(value_name = "FILE")]
        input: String,
    },

    /// Predict device failures from JSON device data (`-` reads stdin)
    PredictFailure {
        #[arg(value_name = "JSON_FILE")]
        input: String,
    },

    /// Generate a fix for a JSON error report (`-` reads stdin)
    AutoCorrect {
        #[arg(value_name = "JSON_FILE")]
        input: String,
    },

    /// Show configuration file locations and exit
    ShowConfig,
}
