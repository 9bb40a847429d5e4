//! A module which provides simple logging of evolution progress and the progress sink contract.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::models::Solution;
use crate::objectives::Fitness;
use crate::utils::{InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
}

/// A snapshot of the search state passed to the progress sink after every generation.
pub struct Progress<'a> {
    /// Generation sequence number, starting from one.
    pub generation: usize,
    /// The best solution found so far.
    pub best: &'a Solution,
    /// The population selected in this generation.
    pub population: &'a [Solution],
    /// Objective components of the best solution.
    pub fitness: Fitness,
    /// Seconds since evolution started.
    pub timestamp: f64,
}

/// A callback which receives progress after every generation.
pub type ProgressSink = Box<dyn FnMut(&Progress<'_>) + Send>;

/// Provides way to write information about evolution into log.
pub struct Telemetry {
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { time: Timer::start(), mode }
    }

    /// Reports initial population statistics.
    pub fn on_initial(&self, population: &[Solution], best: &Solution) {
        self.log(
            format!(
                "[{}s] initial population of {} individuals, best fitness: {}",
                self.time.elapsed_secs(),
                population.len(),
                best.objectives()
            )
            .as_str(),
        );
    }

    /// Reports generation statistics.
    pub fn on_generation(&self, generation: usize, best: &Solution, is_improved: bool) {
        let TelemetryMode::OnlyLogging { log_best, .. } = &self.mode else {
            return;
        };

        if generation % (*log_best).max(1) == 0 {
            self.log(
                format!(
                    "[{}s] generation {generation}: best fitness {}{}",
                    self.time.elapsed_secs(),
                    best.objectives(),
                    if is_improved { ", improved" } else { "" }
                )
                .as_str(),
            );
        }
    }

    /// Reports final statistics.
    pub fn on_result(&self, best: &Solution, generations: usize) {
        let elapsed = self.time.elapsed_secs_as_float();
        let speed = if elapsed > 0. { generations as f64 / elapsed } else { 0. };

        self.log(
            format!("[{}s] total generations: {generations}, speed: {speed:.2} gen/sec", self.time.elapsed_secs())
                .as_str(),
        );
        self.log(format!("best fitness: {}", best.objectives()).as_str());
    }

    /// Returns seconds elapsed since telemetry was created.
    pub fn timestamp(&self) -> f64 {
        self.time.elapsed_secs_as_float()
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message);
        }
    }
}
