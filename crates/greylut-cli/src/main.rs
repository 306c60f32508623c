use clap::Parser;
use greylut_cli::logging::init_tracing;
use greylut_cli::{Args, RunConfig, run_batch};

fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let result = RunConfig::from_args(&args)
        .map_err(Into::into)
        .and_then(|config| run_batch(&config));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
