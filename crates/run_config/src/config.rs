// The assembled run request and the knobs that shape how it is acquired.

use log::warn;

use crate::error::{ConfigError, Result};
use crate::method::Method;

/// How output paths are matched up with input paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Missing outputs mean "do not save"; surplus outputs are ignored.
    #[default]
    Pad,
    /// A non-empty output list must have exactly one entry per input.
    Strict,
}

/// Behavior switches for both acquisition strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquireOptions {
    /// Whether `q` ends the interactive dialogue.
    pub allow_quit: bool,
    pub length_policy: LengthPolicy,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            allow_quit: true,
            length_policy: LengthPolicy::Pad,
        }
    }
}

/// A validated run request: one method, at least one input, and an output
/// list that is either empty (skip-all) or positionally matched to inputs.
///
/// Only [`RunConfig::new`] builds one, so every instance holds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    method: Method,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl RunConfig {
    /// Build a config, checking the invariants the acquirers rely on.
    pub fn new(
        method: Method,
        inputs: Vec<String>,
        outputs: Vec<String>,
        options: &AcquireOptions,
    ) -> Result<Self> {
        if inputs.is_empty() || inputs.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::InvalidInputFormat);
        }

        check_lengths(inputs.len(), outputs.len(), options.length_policy)?;

        Ok(Self {
            method,
            inputs,
            outputs,
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Destination for the input at `index`, or `None` when that input is
    /// only displayed.
    pub fn output_for(&self, index: usize) -> Option<&str> {
        self.outputs
            .get(index)
            .map(String::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn skips_all_outputs(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Pairs of (input, output) in batch order.
    pub fn jobs(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.inputs
            .iter()
            .enumerate()
            .map(|(i, input)| (input.as_str(), self.output_for(i)))
    }
}

pub(crate) fn check_lengths(inputs: usize, outputs: usize, policy: LengthPolicy) -> Result<()> {
    // skip-all never conflicts with the input count
    if outputs == 0 || outputs == inputs {
        return Ok(());
    }

    match policy {
        LengthPolicy::Strict => Err(ConfigError::OutputCountMismatch { inputs, outputs }),
        LengthPolicy::Pad => {
            if outputs > inputs {
                warn!(
                    "{} output paths given for {} inputs; ignoring the extra {}",
                    outputs,
                    inputs,
                    outputs - inputs
                );
            } else {
                warn!(
                    "{} output paths given for {} inputs; the last {} will not be saved",
                    outputs,
                    inputs,
                    inputs - outputs
                );
            }
            Ok(())
        }
    }
}
