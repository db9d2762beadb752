use clap::{Args, Parser};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "af2batch",
    version,
    about = "af2batch - Run the AlphaFold2 docker launcher once for every task directory under a root.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Arguments controlling a single batch run.
#[derive(Args, Debug, Clone, Default)]
pub struct BatchArgs {
    // --- Core Arguments ---
    /// Root directory; every immediate subdirectory is one prediction task.
    #[arg(required = true, value_name = "ROOT")]
    pub root: PathBuf,

    /// Path to the launcher script invoked for every task.
    #[arg(
        long = "docker_script",
        alias = "docker-script",
        value_name = "PATH",
        default_value = "docker/run_docker.py"
    )]
    pub docker_script: PathBuf,

    /// Only print the commands; do not run them.
    #[arg(long = "dry_run", alias = "dry-run")]
    pub dry_run: bool,

    /// Only process tasks whose af2output directory already exists.
    #[arg(long = "only_exist", alias = "only-exist")]
    pub only_exist: bool,

    /// Path to a TOML file with prediction and launcher settings.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S prediction.model-preset=multimer
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    // --- Launcher Overrides ---
    #[command(flatten)]
    pub launch_mode: LaunchMode,

    // --- Prediction Overrides ---
    /// Override the FASTA input location passed as --fasta_paths.
    #[arg(long = "fasta_paths", value_name = "PATH")]
    pub fasta_paths: Option<String>,

    /// Override the template cutoff passed as --max_template_date.
    #[arg(long = "max_template_date", value_name = "YYYY-MM-DD")]
    pub max_template_date: Option<String>,

    /// Override the model preset passed as --model_preset.
    #[arg(long = "model_preset", value_name = "NAME")]
    pub model_preset: Option<String>,

    /// Override the database location passed as --data_dir.
    #[arg(long = "data_dir", value_name = "PATH")]
    pub data_dir: Option<String>,

    /// Override the value passed as --use_precomputed_msas.
    #[arg(long = "use_precomputed_msas", value_name = "BOOL")]
    pub use_precomputed_msas: Option<bool>,
}

/// A group for the mutually exclusive ways of starting the launcher.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct LaunchMode {
    /// Program used to run the launcher script (default: python3).
    #[arg(long, value_name = "PROGRAM")]
    pub interpreter: Option<String>,
    /// Execute the launcher script directly instead of through an interpreter.
    #[arg(long)]
    pub direct: bool,
}
