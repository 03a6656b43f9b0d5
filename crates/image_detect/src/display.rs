// Showing results to the user.
//
// The batch loop only talks to the `Display` trait; `TerminalDisplay` is the
// implementation the binary uses.

use std::io::{self, BufRead, IsTerminal, Write};

use image::DynamicImage;
use log::info;

use crate::error::{ProcessError, Result};

/// What the user did while results were on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayEvent {
    Enter,
    Escape,
    /// Every surface was closed, or there is nobody to wait for.
    Closed,
    /// Anything else; surfaces stay open.
    Other,
}

pub trait Display {
    /// Show `image` on the surface called `name`, creating it if needed.
    fn show(&mut self, name: &str, image: &DynamicImage) -> Result<()>;

    /// Whether any surface is still open.
    fn any_open(&self) -> bool;

    /// Block until the user does something.
    fn poll_event(&mut self) -> Result<DisplayEvent>;

    fn close_all(&mut self);
}

/// Keep polling until the user dismisses the results, then tear down.
pub fn wait_for_close(display: &mut dyn Display) -> Result<()> {
    while display.any_open() {
        match display.poll_event()? {
            DisplayEvent::Enter | DisplayEvent::Escape | DisplayEvent::Closed => {
                display.close_all()
            }
            DisplayEvent::Other => {}
        }
    }
    Ok(())
}

/// Reports each result on the terminal and, when stdin is interactive, waits
/// for Enter (or `q`/`esc`) before closing.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    surfaces: Vec<String>,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surfaces(&self) -> &[String] {
        &self.surfaces
    }
}

impl Display for TerminalDisplay {
    fn show(&mut self, name: &str, image: &DynamicImage) -> Result<()> {
        info!("showing '{}' ({}x{})", name, image.width(), image.height());
        if !self.surfaces.iter().any(|s| s == name) {
            self.surfaces.push(name.to_string());
        }
        Ok(())
    }

    fn any_open(&self) -> bool {
        !self.surfaces.is_empty()
    }

    fn poll_event(&mut self) -> Result<DisplayEvent> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(DisplayEvent::Closed);
        }

        let mut stdout = io::stdout();
        write!(
            stdout,
            "{} result(s) open, press Enter to close: ",
            self.surfaces.len()
        )
        .and_then(|_| stdout.flush())
        .map_err(|e| ProcessError::Display(e.to_string()))?;

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| ProcessError::Display(e.to_string()))?;

        Ok(event_for_line(read, line.trim()))
    }

    fn close_all(&mut self) {
        info!("closing {} result(s)", self.surfaces.len());
        self.surfaces.clear();
    }
}

fn event_for_line(bytes_read: usize, line: &str) -> DisplayEvent {
    match (bytes_read, line) {
        (0, _) => DisplayEvent::Closed,
        (_, "") => DisplayEvent::Enter,
        (_, "q" | "Q" | "esc") => DisplayEvent::Escape,
        _ => DisplayEvent::Other,
    }
}
