// Offline run: generate shapes, train, and print the validation report.
// The HTTP front end lives in the `figure-server` binary.
use std::error::Error;

use clap::Parser;
use figure_nn::cli::ConfigArgs;
use figure_nn::logging::init_logging;
use figure_nn::{train_loop, DatasetGenerator, EvaluationReport, Network};
use serde::Serialize;

#[derive(Parser)]
#[command(version, about = "Train the shape classifier and report validation accuracy")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Serialize)]
struct RunSummary {
    epochs: usize,
    updates: usize,
    final_mean_error: f64,
    train_accuracy: EvaluationReport,
    validation_accuracy: EvaluationReport,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.config.verbose)?;

    let app = cli.config.load()?;
    let data = DatasetGenerator::standard(app.dataset_config()?)?;
    let mut network = Network::new(app.network_config()?)?;

    let train = data.train_set();
    let report = train_loop(&mut network, &train, &app.train_config()?)?;

    let summary = RunSummary {
        epochs: report.epochs.len(),
        updates: report.total_updates(),
        final_mean_error: report.last().map(|e| e.mean_error).unwrap_or(0.0),
        train_accuracy: EvaluationReport::evaluate(&network, &train),
        validation_accuracy: EvaluationReport::evaluate(&network, &data.validation_set()),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
