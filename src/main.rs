use btc_addrconv::{
    cli,
    config::Config,
    logging
};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "conversion failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> btc_addrconv::Result<()> {
    config.validate()?;
    logging::init_logging(config.log_level()?, config.json_logs)?;

    match &config.address {
        Some(address) => {
            println!("{}", cli::convert_once(address)?);
        },
        None => {
            let stdin = io::stdin();
            cli::run_interactive(stdin.lock(), io::stdout(), config.attempt_limit())?;
        }
    }

    Ok(())
}
