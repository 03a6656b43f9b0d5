// The batch loop: load, process, show and maybe save every input in order.

use log::{error, info};
use run_config::RunConfig;

use crate::basic_ops::save_image;
use crate::display::{Display, wait_for_close};
use crate::error::{ProcessError, Result};
use crate::{Image, ImageProcessor};

/// Per-run tally. Failed items are listed by path.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub saved: usize,
    pub load_failures: Vec<String>,
    pub write_failures: Vec<String>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.load_failures.is_empty() && self.write_failures.is_empty()
    }
}

/// Run `config` through `processor`, showing each result on `display`.
///
/// An input that fails to load is reported and skipped; a result that fails
/// to save is reported and the batch carries on. Only display failures end
/// the batch early.
pub fn run_batch(
    config: &RunConfig,
    processor: &ImageProcessor,
    display: &mut dyn Display,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    info!(
        "running {} on {} input(s)",
        config.method(),
        config.inputs().len()
    );

    for (input, output) in config.jobs() {
        let image = match Image::from_file(input) {
            Ok(image) => image,
            Err(err) => {
                error!("{err}; skipping");
                report.load_failures.push(input.to_string());
                continue;
            }
        };

        let (width, height) = image.dimensions;
        info!("processing {} ({}x{})", input, width, height);

        let result = processor.apply(config.method(), &image);
        display.show(input, &result)?;
        report.processed += 1;

        let Some(path) = output else {
            continue;
        };

        match save_image(&result, path) {
            Ok(()) => {
                info!("saved {} -> {}", input, path);
                report.saved += 1;
            }
            Err(err @ ProcessError::ImageWriteFailed { .. }) => {
                error!("{err}");
                report.write_failures.push(path.to_string());
            }
            Err(err) => return Err(err),
        }
    }

    wait_for_close(display)?;

    info!(
        "done: {} processed, {} saved, {} failed to load, {} failed to save",
        report.processed,
        report.saved,
        report.load_failures.len(),
        report.write_failures.len()
    );

    Ok(report)
}
