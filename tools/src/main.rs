use clap::Parser;
use sf2_tools::{
    config::Config,
    extract::{run, ExtractArgs},
};
use std::{io::stdout, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(
    author,
    version,
    about = "Print the presets of a SoundFont 2 file as JSON",
    long_about = None
)]
struct Cli {
    #[clap(flatten)]
    args: ExtractArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(wild::args());
    setup_logging();

    let config = Config::from(cli.args);

    match run(&config, stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
