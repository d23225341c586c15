use anyhow::Result;
use pdf2bmp::cli::{self, Command};
use pdf2bmp::ConvertError;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            if e
                .downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_usage_error)
            {
                print!("{}", cli::usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = match cli::parse(env::args_os().skip(1))? {
        Command::Help => {
            print!("{}", cli::usage());
            return Ok(());
        }
        Command::Version => {
            println!("{}", cli::version());
            return Ok(());
        }
        Command::Convert(config) => config,
    };

    log::info!("input: {}", config.input.display());
    log::info!("output: {}", config.output.display());
    log::info!("DPI: {}, page: {}", config.dpi, config.page_number());

    let conversion = pdf2bmp::convert(&config)?;
    log::info!(
        "wrote {} x {} bitmap to {}",
        conversion.width,
        conversion.height,
        config.output.display()
    );

    Ok(())
}
