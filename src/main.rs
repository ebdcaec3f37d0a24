use anyhow::Context;
use clap::{Parser, Subcommand};
use simsal::{ProximityMetric, SaliencyReport, ScoreRequest, SimilarityScorer};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Similarity-based saliency maps from perturbed image descriptors
#[derive(Parser, Debug)]
#[command(name = "simsal")]
#[command(about = "Turn feature-space proximity into saliency heatmaps", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a JSON request and write the saliency map
    Score {
        /// Path to the request file
        #[arg(short, long)]
        input: PathBuf,

        /// Where to write the report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Proximity metric, overrides the request's config
        #[arg(short, long)]
        metric: Option<String>,
    },
    /// List supported proximity metrics
    Metrics,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Score {
            input,
            output,
            metric,
        } => {
            info!("Reading request from {:?}", input);
            let request = ScoreRequest::from_path(&input)?;

            let mut config = request.config();
            if let Some(metric) = metric {
                config.proximity_metric = metric;
            }
            let scorer = SimilarityScorer::from_config(config);
            info!(
                "Scoring {} perturbations with {}",
                request.perturbed_descrs.len(),
                scorer.proximity_metric()
            );

            let map = request.run(&scorer)?;
            let report = SaliencyReport::new(scorer.export_config(), &map);
            let json = serde_json::to_string_pretty(&report)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write report to {:?}", path))?;
                    info!("Saliency map {:?} written to {:?}", map.shape(), path);
                }
                None => println!("{}", json),
            }
        }
        Command::Metrics => {
            for metric in ProximityMetric::ALL {
                println!("{}", metric);
            }
        }
    }

    Ok(())
}
