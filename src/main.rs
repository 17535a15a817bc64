#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::uninlined_format_args)]

mod analysis;
mod csv_reader;
mod session;
mod structs;

use clap::{Parser, Subcommand};
use session::{EdaConfig, Session};
use std::path::{Path, PathBuf};
use structs::{EdaError, Result};
use tracing::info;

/// Titanic EDA - survival breakdowns and a strongest-factor heuristic for passenger CSVs
#[derive(Parser, Debug)]
#[command(name = "titanic-eda")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a CSV, show a preview, missing values and survival charts
    Load {
        /// Input CSV/TSV file (train.csv)
        #[arg(short, long)]
        csv: Option<PathBuf>,

        /// Write chart JSON and preview files here instead of printing
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of rows in the preview
        #[arg(long, default_value = "5")]
        preview_rows: usize,

        /// Treat input as TSV instead of CSV
        #[arg(long)]
        tsv: bool,
    },

    /// Find the feature with the largest difference in survival rates
    Analyze {
        /// Input CSV/TSV file (train.csv)
        #[arg(short, long)]
        csv: Option<PathBuf>,

        /// Features to rank, comma separated
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_value = "Sex,Pclass,AgeGroup,Embarked"
        )]
        features: Vec<String>,

        /// Treat input as TSV instead of CSV
        #[arg(long)]
        tsv: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "titanic_eda=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        if e.is_guard() {
            eprintln!("Warning: {e}");
            std::process::exit(2);
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Load {
            csv,
            output_dir,
            preview_rows,
            tsv,
        }) => run_load(
            csv.as_deref(),
            output_dir.as_deref(),
            EdaConfig {
                preview_rows,
                tsv,
                ..EdaConfig::default()
            },
        ),

        Some(Commands::Analyze { csv, features, tsv }) => run_analyze(
            csv.as_deref(),
            EdaConfig {
                features,
                tsv,
                ..EdaConfig::default()
            },
        ),

        None => {
            eprintln!("No subcommand provided. Use 'titanic-eda load' or 'titanic-eda analyze'.");
            eprintln!("Run 'titanic-eda --help' for usage information.");
            std::process::exit(1);
        }
    }
}

/// Run the load phase
fn run_load(csv_path: Option<&Path>, output_dir: Option<&Path>, config: EdaConfig) -> Result<()> {
    if let Some(path) = csv_path {
        if !path.exists() {
            return Err(EdaError::Config(format!(
                "CSV file not found: {}",
                path.display()
            )));
        }
    }

    let mut session = Session::new(config);
    let report = session.on_load(csv_path)?;

    let Some(dir) = output_dir else {
        print!("{}", analysis::output::render_load_report(&report));
        return Ok(());
    };

    std::fs::create_dir_all(dir)?;
    analysis::output::write_preview(dir, &report)?;
    let written = analysis::output::write_charts(dir, &report)?;

    info!(dir = %dir.display(), files = written.len() + 1, "output written");
    println!("Output written to {}", dir.display());
    println!("  - preview.txt");
    for file in written {
        println!("  - {file}");
    }

    Ok(())
}

/// Run the analyze phase, loading first when a file is given
fn run_analyze(csv_path: Option<&Path>, config: EdaConfig) -> Result<()> {
    let mut session = Session::new(config);
    if csv_path.is_some() {
        session.on_load(csv_path)?;
    }

    let report = session.on_analyze()?;
    for (rank, score) in report.ranking.iter().enumerate() {
        println!("{}. {} (spread {:.2})", rank + 1, score.feature, score.spread);
    }
    println!("{}", report.message());

    Ok(())
}
