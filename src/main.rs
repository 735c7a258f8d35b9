use anyhow::Context;
use clap::{Parser, Subcommand};
use searchbench_viz::{log, logging, render};
use std::path::PathBuf;
use tracing::info;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "searchbench-viz")]
#[command(about = "Search benchmark log analyzer", long_about = None)]
struct Cli {
    /// Log parser progress (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an HTML report with the collision and search-time charts.
    Report {
        /// Benchmark timing log (info_time.txt).
        #[arg(long)]
        log: PathBuf,

        #[arg(short = 'o', long)]
        out: PathBuf,
    },
    /// Write the parsed series as JSON.
    Dump {
        #[arg(long)]
        log: PathBuf,

        /// Output file; stdout when omitted.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Validate the log and print the number of blocks.
    Check {
        #[arg(long)]
        log: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.cmd {
        Commands::Report { log, out } => {
            // 1) Parse log.
            let dataset = log::parse_log_file(&log)?;

            // 2) Lay out charts.
            let data = render::build_report(&dataset, &log.display().to_string());

            // 3) Render HTML.
            let html = render::render_html_report(&data)?;
            std::fs::write(&out, html)
                .with_context(|| format!("write report {}", out.display()))?;
            info!(blocks = dataset.len(), "wrote {}", out.display());
        }
        Commands::Dump { log, out } => {
            let dataset = log::parse_log_file(&log)?;
            let json = serde_json::to_string_pretty(&dataset)?;
            match out {
                Some(out) => {
                    std::fs::write(&out, json + "\n")
                        .with_context(|| format!("write dump {}", out.display()))?;
                    info!(blocks = dataset.len(), "wrote {}", out.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::Check { log } => {
            let dataset = log::parse_log_file(&log)?;
            println!("{}: {} blocks", log.display(), dataset.len());
        }
    }

    Ok(())
}
