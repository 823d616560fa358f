use clap::Parser;
use tracing::error;
use vue3_typings::cli::{Cli, Commands, build_config_command, stub_command};
use vue3_typings::error::TypingsResult;
use vue3_typings::logging;

fn main() {
    logging::init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> TypingsResult<()> {
    let args = Cli::parse();
    match args.cmd {
        None => stub_command(None)?,
        Some(Commands::Stub { dir }) => stub_command(dir)?,
        Some(Commands::BuildConfig) => build_config_command()?,
    }
    Ok(())
}
