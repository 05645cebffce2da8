use clap::Parser;
use log::info;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use windrose::cli::Args;
use windrose::{Windrose, WindroseError};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Usage errors exit with code 2, help with 0.
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => return report(&WindroseError::from(e)),
    };

    match Windrose::new(config).run() {
        Ok(summary) => {
            for bucket in &summary.buckets {
                info!(
                    "{}: {} values ({} substituted, {} excluded as 0.00)",
                    bucket.title, bucket.rows, bucket.substituted, bucket.excluded
                );
            }
            println!("Plotted! Check the raw file folder.\n");
            println!("Time taken: {} seconds.", summary.elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => report(&e),
    }
}

fn report(error: &WindroseError) -> ExitCode {
    eprintln!("{error}");
    let mut source = error.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    if let Some(columns) = error.available_columns() {
        eprintln!("{columns:?}");
    }
    ExitCode::FAILURE
}
