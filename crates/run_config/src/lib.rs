#[cfg(test)]
mod tests;

// Acquisition of a validated run configuration (method, inputs, outputs)
// from command-line flags or an interactive dialogue.

pub mod acquire;
pub mod config;
pub mod error;
pub mod flags;
pub mod method;
pub mod prompt;
pub mod tokenize;

pub use acquire::{Acquisition, Strategy, acquire};
pub use config::{AcquireOptions, LengthPolicy, RunConfig};
pub use error::{ConfigError, Result};
pub use flags::{FlagArgs, acquire_from_args, usage};
pub use method::Method;
pub use prompt::{Prompter, acquire_interactive};
pub use tokenize::{ListRole, parse_list, split_and_trim, trim};
