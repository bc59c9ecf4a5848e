use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use payments::{Amount, BatchJob, DriverConfig, report};

#[derive(Parser)]
#[command(name = "find-payment")]
#[command(about = "Find the due payments settled by a bank transfer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Largest accepted bank transfer; larger due payments are skipped
    #[arg(long, global = true, default_value = "10000.00")]
    max_amount: Amount,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single input file
    Solve {
        #[arg(default_value = "input.txt")]
        input: PathBuf,
        #[arg(default_value = "output.txt")]
        output: PathBuf,
    },
    /// Solve many input files in parallel, writing `<stem>.out` for each
    Batch {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Directory for the outputs (default: next to each input)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Number of files searched at once
        #[arg(short = 'j', long, default_value_t = num_cpus::get())]
        jobs: usize,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = DriverConfig {
        max_amount: cli.max_amount,
    };

    match cli.command {
        Commands::Solve { input, output } => match payments::solve_file(&input, &output, &config) {
            Ok(_) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{}", err);
                ExitCode::FAILURE
            }
        },
        Commands::Batch {
            inputs,
            out_dir,
            jobs,
        } => {
            let batch = inputs
                .iter()
                .map(|input| BatchJob::new(input, out_dir.as_deref()))
                .collect();
            let results = match payments::run_batch(batch, config, jobs).await {
                Ok(results) => results,
                Err(err) => {
                    error!("{}", err);
                    return ExitCode::FAILURE;
                }
            };

            let mut failed = 0;
            for result in &results {
                match &result.outcome {
                    Ok(Some(found)) => println!(
                        "✓ {}: {} payments -> {}",
                        result.job.input.display(),
                        found.len(),
                        result.job.output.display()
                    ),
                    Ok(None) => println!(
                        "✓ {}: {} -> {}",
                        result.job.input.display(),
                        report::NO_SOLUTION,
                        result.job.output.display()
                    ),
                    Err(err) => {
                        println!("✗ {}: {}", result.job.input.display(), err);
                        failed += 1;
                    }
                }
            }
            println!("\nResults: {} solved, {} failed", results.len() - failed, failed);

            if failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
