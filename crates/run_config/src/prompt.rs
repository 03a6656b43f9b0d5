// Interactive acquisition: three phases (method, input, output), each
// re-prompting until it gets a valid answer or the user quits.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::{AcquireOptions, RunConfig, check_lengths};
use crate::error::{ConfigError, Result};
use crate::method::Method;
use crate::tokenize::{ListRole, parse_list};

const METHOD_MENU: &str = "\
Select a method:
  e) edge detection
  s) feature points";

const INPUT_HELP: &str = "Enter input image paths, separated by commas";

const OUTPUT_HELP: &str =
    "Enter output image paths, separated by commas (leave blank to skip saving)";

/// Line-oriented dialogue over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    options: AcquireOptions,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W, options: AcquireOptions) -> Self {
        Self {
            reader,
            writer,
            options,
        }
    }

    /// Run all three phases. A quit in any phase yields
    /// [`ConfigError::Cancelled`] and nothing partial is returned.
    pub fn acquire(&mut self) -> Result<RunConfig> {
        let method = self.method_phase()?;
        debug!("method phase done: {method}");

        let inputs = self.input_phase()?;
        debug!("input phase done: {} path(s)", inputs.len());

        let outputs = self.output_phase(inputs.len())?;
        debug!("output phase done: {} path(s)", outputs.len());

        RunConfig::new(method, inputs, outputs, &self.options)
    }

    fn method_phase(&mut self) -> Result<Method> {
        loop {
            writeln!(self.writer, "{METHOD_MENU}")?;
            if self.options.allow_quit {
                writeln!(self.writer, "  q) quit")?;
            }
            let line = self.ask()?;
            let token = line.trim();

            if self.options.allow_quit && (token == "q" || token == "Q") {
                return Err(ConfigError::Cancelled);
            }

            match Method::from_token(token) {
                Ok(method) => return Ok(method),
                Err(err) => self.retry(&err)?,
            }
        }
    }

    fn input_phase(&mut self) -> Result<Vec<String>> {
        loop {
            self.instructions(INPUT_HELP)?;
            let line = self.ask()?;
            self.check_quit(&line)?;

            match parse_list(&line, ListRole::Input) {
                Ok(inputs) => return Ok(inputs),
                Err(err) => self.retry(&err)?,
            }
        }
    }

    fn output_phase(&mut self, input_count: usize) -> Result<Vec<String>> {
        loop {
            self.instructions(OUTPUT_HELP)?;
            let line = self.ask()?;
            self.check_quit(&line)?;

            let checked = parse_list(&line, ListRole::Output).and_then(|outputs| {
                check_lengths(input_count, outputs.len(), self.options.length_policy)?;
                Ok(outputs)
            });

            match checked {
                Ok(outputs) => return Ok(outputs),
                Err(err) => self.retry(&err)?,
            }
        }
    }

    fn instructions(&mut self, text: &str) -> Result<()> {
        if self.options.allow_quit {
            writeln!(self.writer, "{text} (q to quit):")?;
        } else {
            writeln!(self.writer, "{text}:")?;
        }
        Ok(())
    }

    fn check_quit(&self, line: &str) -> Result<()> {
        if self.options.allow_quit && line.trim() == "q" {
            return Err(ConfigError::Cancelled);
        }
        Ok(())
    }

    fn retry(&mut self, err: &ConfigError) -> Result<()> {
        debug!("re-prompting after: {err}");
        writeln!(self.writer, "{err}, please try again.\n")?;
        Ok(())
    }

    /// Print the prompt marker and read one line, without its line ending.
    /// End of input counts as cancellation.
    fn ask(&mut self) -> Result<String> {
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("input closed during the dialogue");
            return Err(ConfigError::Cancelled);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }
}

/// Run the interactive dialogue once over `reader` and `writer`.
pub fn acquire_interactive<R, W>(
    reader: R,
    writer: W,
    options: &AcquireOptions,
) -> Result<RunConfig>
where
    R: BufRead,
    W: Write,
{
    Prompter::new(reader, writer, *options).acquire()
}
