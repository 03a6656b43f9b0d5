// Flag-based acquisition: one pass over the argument vector.

use std::ffi::OsString;

use clap::{ArgAction, CommandFactory, Parser};
use log::debug;

use crate::acquire::Acquisition;
use crate::config::{AcquireOptions, RunConfig};
use crate::error::{ConfigError, Result};
use crate::method::Method;
use crate::tokenize::{ListRole, parse_list};

// setup command line args

#[derive(Parser, Debug, Default)]
#[command(
    name = "image_detect",
    about = "Run edge or feature-point detection on a list of images",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct FlagArgs {
    /// Display help information
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Method: e (edge detection) or s (feature points)
    #[arg(short, long, value_name = "METHOD")]
    pub method: Option<String>,

    /// Comma separated list of input images
    #[arg(short, long, value_name = "FILES")]
    pub input: Option<String>,

    /// Comma separated list of output images, or "" to save nothing
    #[arg(short, long, value_name = "FILES")]
    pub output: Option<String>,
}

impl FlagArgs {
    /// Validate the parsed flags into an [`Acquisition`].
    ///
    /// The method is checked first, then the input list, then the output
    /// list; the first failure ends the pass. Help short-circuits everything.
    pub fn into_acquisition(self, options: &AcquireOptions) -> Result<Acquisition> {
        if self.help {
            return Ok(Acquisition::HelpRequested);
        }

        let method = self.method.as_deref().map(Method::from_token).transpose()?;
        let inputs = self
            .input
            .as_deref()
            .map(|raw| parse_list(raw, ListRole::Input))
            .transpose()?;
        let outputs = self
            .output
            .as_deref()
            .map(|raw| parse_list(raw, ListRole::Output))
            .transpose()?;

        match (method, inputs, outputs) {
            (Some(method), Some(inputs), Some(outputs)) => {
                let config = RunConfig::new(method, inputs, outputs, options)?;
                Ok(Acquisition::Ready(config))
            }
            (method, inputs, outputs) => {
                let mut missing = Vec::new();
                if method.is_none() {
                    missing.push("--method");
                }
                if inputs.is_none() {
                    missing.push("--input");
                }
                if outputs.is_none() {
                    missing.push("--output");
                }
                Err(ConfigError::MissingArguments(missing))
            }
        }
    }
}

/// Usage text shown for `--help` and after parser errors.
pub fn usage() -> String {
    FlagArgs::command().render_help().to_string()
}

/// Parse `args` (program name first) and validate them.
///
/// A repeated flag keeps its last value. Parser failures become
/// [`ConfigError::Usage`] holding clap's one-line reason; printing the
/// usage text is left to the caller.
pub fn acquire_from_args<I, T>(args: I, options: &AcquireOptions) -> Result<Acquisition>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    // help wins even when the rest of the line would not parse
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        return Ok(Acquisition::HelpRequested);
    }

    let flags = FlagArgs::try_parse_from(args).map_err(|err| {
        debug!("argument parser rejected the command line: {err}");
        ConfigError::Usage(parser_message(&err))
    })?;

    flags.into_acquisition(options)
}

// keep only clap's one-line reason; the caller prints our own usage text
fn parser_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}
