// CLI for running edge or feature-point detection over a list of images

use std::io;
use std::process::ExitCode;

use env_logger::Env;
use image_detect::display::TerminalDisplay;
use image_detect::{DetectParams, ImageProcessor, run_batch};
use run_config::{AcquireOptions, Acquisition, ConfigError, RunConfig, acquire, usage};

const EXIT_CANCELLED: u8 = 2;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let acquired = acquire(
        &args,
        io::stdin().lock(),
        io::stdout(),
        &AcquireOptions::default(),
    );

    let config = match acquired {
        Ok(Acquisition::Ready(config)) => config,
        Ok(Acquisition::HelpRequested) => {
            print!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Err(err) if err.is_cancellation() => {
            eprintln!("Cancelled.");
            return ExitCode::from(EXIT_CANCELLED);
        }
        Err(ConfigError::Usage(reason)) => {
            eprintln!("error: {reason}\n");
            eprint!("{}", usage());
            return ExitCode::FAILURE;
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> image_detect::Result<()> {
    let processor = ImageProcessor::new(DetectParams::default())?;
    let mut display = TerminalDisplay::new();

    let report = run_batch(config, &processor, &mut display)?;
    if !report.is_clean() {
        log::warn!(
            "some inputs had problems: load {:?}, save {:?}",
            report.load_failures,
            report.write_failures
        );
    }

    Ok(())
}
