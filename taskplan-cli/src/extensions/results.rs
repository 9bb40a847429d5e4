//! Logs evolution progress: fitness components per generation as csv and the best assignment
//! per generation as json lines.

#[cfg(test)]
#[path = "../../tests/unit/extensions/results_test.rs"]
mod results_test;

use crate::extensions::io::write_json;
use std::io::Write;
use std::sync::{Arc, Mutex};
use taskplan_core::evolution::{Progress, ProgressSink};
use taskplan_core::utils::{GenericError, GenericResult};

/// A header of the results table.
pub const RESULTS_HEADER: [&str; 7] = ["iteration", "time_from_start", "f1", "f2", "f3", "f4", "f"];

/// Writes one record per generation into results and solutions outputs.
pub struct ResultWriter {
    results: csv::Writer<Box<dyn Write + Send>>,
    solutions: Box<dyn Write + Send>,
    iteration: usize,
    error: Option<GenericError>,
}

impl ResultWriter {
    /// Creates a new instance of `ResultWriter` and writes the results header.
    pub fn new(results: Box<dyn Write + Send>, solutions: Box<dyn Write + Send>) -> GenericResult<Self> {
        let mut results = csv::Writer::from_writer(results);
        results.write_record(RESULTS_HEADER).map_err(|err| format!("cannot write results header: '{err}'"))?;

        Ok(Self { results, solutions, iteration: 0, error: None })
    }

    /// Writes progress of one generation.
    pub fn write(&mut self, progress: &Progress<'_>) -> GenericResult<()> {
        let record = std::iter::once(self.iteration.to_string())
            .chain(std::iter::once(format!("{:.3}", progress.timestamp)))
            .chain(progress.fitness.values().into_iter().map(|value| format!("{value:.3}")));

        self.results.write_record(record).map_err(|err| format!("cannot write results record: '{err}'"))?;
        write_json(&mut self.solutions, progress.best.assignment(), "best solution")?;

        self.iteration += 1;

        Ok(())
    }

    /// Flushes outputs and returns the first error which happened while writing from a progress sink.
    pub fn finish(&mut self) -> GenericResult<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }

        self.results.flush()?;
        self.solutions.flush()?;

        Ok(())
    }

    /// Returns amount of written records.
    pub fn iterations(&self) -> usize {
        self.iteration
    }
}

/// Creates a progress sink which writes into the shared writer. Once writing fails, the sink
/// stops writing and keeps the error for [`ResultWriter::finish`].
pub fn create_progress_sink(writer: Arc<Mutex<ResultWriter>>) -> ProgressSink {
    Box::new(move |progress: &Progress<'_>| {
        let mut writer = writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if writer.error.is_some() {
            return;
        }

        if let Err(err) = writer.write(progress) {
            writer.error = Some(err);
        }
    })
}
