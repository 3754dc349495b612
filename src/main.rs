use anyhow::{Context, Result};
use clap::Parser;
use hemoscan::cli::{Cli, Commands, OutputFormat};
use hemoscan::config::EngineConfig;
use hemoscan::core::PatientRecord;
use hemoscan::engine::AssessmentEngine;
use hemoscan::io::output::create_writer;
use hemoscan::model::ClassifierGateway;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess {
            input,
            model_dir,
            format,
            output,
            config,
        } => assess(&input, &model_dir, format, output, config),
        Commands::ModelInfo { model_dir, format } => model_info(&model_dir, format),
    }
}

fn assess(
    input: &Path,
    model_dir: &Path,
    format: OutputFormat,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => EngineConfig::from_file(&path)?,
        None => EngineConfig::default(),
    };

    let gateway = ClassifierGateway::load(model_dir)?;
    let engine = AssessmentEngine::new(gateway, config);

    let raw = hemoscan::io::read_file(input)
        .with_context(|| format!("reading patient record {}", input.display()))?;
    let record: PatientRecord = serde_json::from_str(&raw)
        .with_context(|| format!("parsing patient record {}", input.display()))?;

    let assessment = engine.assess(&record)?;

    match output {
        Some(path) => {
            let json = serde_json::to_string_pretty(&assessment)?;
            hemoscan::io::write_file(&path, &json)
                .with_context(|| format!("writing assessment to {}", path.display()))?;
        }
        None => create_writer(format.into()).write_assessment(&assessment)?,
    }

    Ok(())
}

fn model_info(model_dir: &Path, format: OutputFormat) -> Result<()> {
    let gateway = ClassifierGateway::load(model_dir)?;
    let info = gateway.info();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Terminal => {
            println!("Model: {}", info.model_name);
            println!("Accuracy: {:.2}%", info.accuracy);
            println!("Cross-validation: {:.2}%", info.cv_score);
            println!("Training samples: {}", info.training_samples);
            println!("Features ({}):", info.features.len());
            for feature in &info.features {
                println!("  - {feature}");
            }
        }
    }

    Ok(())
}
