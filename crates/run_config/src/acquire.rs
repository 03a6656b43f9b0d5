// Strategy selection and the single entry point used by the binary.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::{AcquireOptions, RunConfig};
use crate::error::Result;
use crate::flags::acquire_from_args;
use crate::prompt::acquire_interactive;

/// How the configuration is gathered. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Flags,
    Interactive,
}

impl Strategy {
    /// Any argument after the program name selects the flag strategy.
    pub fn for_args<T>(args: &[T]) -> Self {
        if args.len() > 1 {
            Strategy::Flags
        } else {
            Strategy::Interactive
        }
    }
}

/// Successful outcome of an acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    Ready(RunConfig),
    /// `--help` was given; the caller prints usage and exits cleanly.
    HelpRequested,
}

/// Acquire a run configuration from `args` or, when there are no flags,
/// from a dialogue over `reader` and `writer`.
pub fn acquire<R, W>(
    args: &[String],
    reader: R,
    writer: W,
    options: &AcquireOptions,
) -> Result<Acquisition>
where
    R: BufRead,
    W: Write,
{
    let strategy = Strategy::for_args(args);
    debug!("acquiring configuration via {:?}", strategy);

    match strategy {
        Strategy::Flags => acquire_from_args(args, options),
        Strategy::Interactive => {
            acquire_interactive(reader, writer, options).map(Acquisition::Ready)
        }
    }
}
