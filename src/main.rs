use clap::{Parser, Subcommand};
use std::path::Path;

mod log;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "kvs-tput-report")]
#[command(about = "KVS server throughput summarizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize per-node throughput medians from a directory of server logs.
    Report {
        /// Directory containing kvsserver-<node>.log files.
        #[arg(long, default_value = "./logs/latest")]
        logs: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report { logs } => {
            // 1) Discover log files. A missing directory reads as "no files".
            let files = log::discover_log_files(Path::new(&logs))?;
            if files.is_empty() {
                println!("No matching log files found.");
                return Ok(());
            }

            // 2) Extract throughput samples, one file at a time in discovery order.
            let mut samples_by_node = Vec::new();
            for file in &files {
                let samples = log::parse_samples_file(&file.path)?;
                samples_by_node.push((file.node.clone(), samples));
            }

            // 3) Aggregate per-node medians and the fleet total.
            let data = model::build_report_data(samples_by_node);

            // 4) Render text.
            let report = render::render_text_report(&data)?;
            print!("{}", report);
        }
    }

    Ok(())
}
