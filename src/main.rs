use anyhow::{Context, Result, bail};
use bankrisk::application::ml::service::LoanPredictor;
use bankrisk::application::ml::smartcore_model::SmartCoreApprovalModel;
use bankrisk::config::PredictorEnvConfig;
use bankrisk::domain::lending::types::ApplicantRecord;
use bankrisk::domain::validation::sanity::ApplicantSanityCheck;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Loan prediction service", long_about = None)]
struct Cli {
    /// Path to the model artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict loan approval and its probability
    Approve(InputArgs),
    /// Echo the requested loan term (no model involved)
    Term(InputArgs),
    /// Rule-based eligibility from the debt-to-income ratio
    Eligibility(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Path to a JSON object of applicant features
    #[arg(long, conflicts_with = "json")]
    input: Option<PathBuf>,

    /// Inline JSON object of applicant features
    #[arg(long)]
    json: Option<String>,
}

impl InputArgs {
    fn record(&self) -> Result<ApplicantRecord> {
        let raw = match (&self.input, &self.json) {
            (Some(path), _) => std::fs::read_to_string(path)
                .with_context(|| format!("reading input {path:?}"))?,
            (None, Some(inline)) => inline.clone(),
            (None, None) => bail!("provide applicant features via --input or --json"),
        };

        let value: serde_json::Value =
            serde_json::from_str(&raw).context("input is not a valid JSON object")?;
        let record = ApplicantRecord::from_json(&value)?;

        if !ApplicantSanityCheck::validate(&record) {
            bail!("applicant record failed sanity checks");
        }
        Ok(record)
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = PredictorEnvConfig::from_env();
    let model_path = cli.model.clone().unwrap_or(config.model_path);

    // The artifact is loaded once at startup for every command; term and
    // eligibility share the same service even though they never consult it.
    let model = SmartCoreApprovalModel::load(model_path)?;
    let service = LoanPredictor::new(Arc::new(model));
    info!("Predictor ready");

    let result = match &cli.command {
        Command::Approve(args) => serde_json::to_value(service.predict_approval(&args.record()?)?)?,
        Command::Term(args) => serde_json::to_value(service.loan_term(&args.record()?)?)?,
        Command::Eligibility(args) => {
            serde_json::to_value(service.predict_eligibility(&args.record()?)?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
