use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored report
    Terminal,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "hemoscan")]
#[command(about = "Clinical anemia risk assessment engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess a patient record
    Assess {
        /// Path to a patient record: a JSON object of feature name to value
        input: PathBuf,

        /// Directory holding model.json, scaler.json, model_metadata.json
        #[arg(long, default_value = "models", env = "HEMOSCAN_MODEL_DIR")]
        model_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write the assessment as JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML file overriding the clinical threshold tables
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show metadata of the loaded classifier
    ModelInfo {
        /// Directory holding model.json, scaler.json, model_metadata.json
        #[arg(long, default_value = "models", env = "HEMOSCAN_MODEL_DIR")]
        model_dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}
