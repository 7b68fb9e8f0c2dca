//! syshealth - host health sampler
//!
//! Takes one sample of CPU, memory and network throughput per invocation.

use clap::Parser;
use syshealth::cli::args::{generate_completions, Cli, Commands};
use syshealth::commands::{run_config, run_sample};
use syshealth::error::{AppError, ProviderError, StoreError};

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match cli.resolved_command() {
        Commands::Sample => run_sample(cli.format),

        Commands::Config => run_config(cli.format),

        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Provider(ProviderError::Unsupported) => {
            eprintln!();
            eprintln!("Hint: CPU, memory and network counters could not be read on this OS.");
        }
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Hint: CPU_WARN, RAM_WARN, NET_WARN_Mbps, SAMPLE_SECONDS and SMTP_PORT");
            eprintln!("      must be plain numbers. Run 'syshealth config' to check.");
        }
        AppError::Store(StoreError::CreateDir { .. } | StoreError::Open { .. }) => {
            eprintln!();
            eprintln!("Hint: Set LOG_DIR to a directory you can write to.");
        }
        _ => {}
    }
}
