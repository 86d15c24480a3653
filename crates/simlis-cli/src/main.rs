use anyhow::{Context, Result};
use clap::Parser;
use simlis_core::{LogSink, Pack, export_csv, summarize_pack};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simlis")]
#[command(about = "Export a StepMania pack's chart list to CSV", version)]
struct Args {
    /// Path to pack directory
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to output csv file (defaults to "<pack name>.csv")
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("simlis=info".parse()?)
                .add_directive("simlis_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let pack = Pack::scan(&args.path)
        .with_context(|| format!("Failed to scan pack at {:?}", args.path))?;

    let mut sink = LogSink;
    let rows = summarize_pack(&pack, &mut sink)?;

    let output = match args.output {
        Some(path) => path,
        None => {
            let path = PathBuf::from(format!("{}.csv", pack.name()));
            info!("Saving output to {:?}", path);
            path
        }
    };

    export_csv(&output, &rows)
        .with_context(|| format!("Failed to write output to {:?}", output))?;

    info!("Wrote {} songs to {:?}", rows.len(), output);
    Ok(())
}
