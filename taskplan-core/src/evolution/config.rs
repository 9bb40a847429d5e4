#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use super::*;
use crate::operators::*;
use crate::utils::{GenericResult, InfoLogger};
use std::sync::Arc;

/// A configuration which controls evolution execution.
pub struct EvolutionConfig {
    /// Amount of generations to run.
    pub generations: usize,
    /// A breed strategy.
    pub breed: Arc<dyn Breed>,
    /// A mutate strategy.
    pub mutate: Arc<dyn Mutate>,
    /// A select strategy.
    pub select: Arc<dyn Select>,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
    /// An optional progress sink called after every generation.
    pub progress: Option<ProgressSink>,
}

/// Provides configurable way to build evolution configuration using fluent interface style.
pub struct EvolutionConfigBuilder {
    generations: Option<usize>,
    breed: Option<(String, Arc<dyn Breed>)>,
    mutate: Option<(String, Arc<dyn Mutate>)>,
    select: Option<(String, Arc<dyn Select>)>,
    telemetry: TelemetryMode,
    progress: Option<ProgressSink>,
}

impl Default for EvolutionConfigBuilder {
    fn default() -> Self {
        Self {
            generations: None,
            breed: None,
            mutate: None,
            select: None,
            telemetry: TelemetryMode::None,
            progress: None,
        }
    }
}

impl EvolutionConfigBuilder {
    /// Sets amount of generations to be run by evolution. Must be positive.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Sets breed strategy from the list of known ones.
    pub fn with_breed_type(self, breed: BreedType) -> Self {
        self.with_breed(breed.name(), breed.create())
    }

    /// Sets mutate strategy from the list of known ones.
    pub fn with_mutate_type(self, mutate: MutateType) -> Self {
        self.with_mutate(mutate.name(), mutate.create())
    }

    /// Sets select strategy from the list of known ones.
    pub fn with_select_type(self, select: SelectType) -> Self {
        self.with_select(select.name(), select.create())
    }

    /// Sets a custom breed strategy.
    pub fn with_breed(mut self, name: &str, breed: Arc<dyn Breed>) -> Self {
        self.breed = Some((name.to_string(), breed));
        self
    }

    /// Sets a custom mutate strategy.
    pub fn with_mutate(mut self, name: &str, mutate: Arc<dyn Mutate>) -> Self {
        self.mutate = Some((name.to_string(), mutate));
        self
    }

    /// Sets a custom select strategy.
    pub fn with_select(mut self, name: &str, select: Arc<dyn Select>) -> Self {
        self.select = Some((name.to_string(), select));
        self
    }

    /// Sets telemetry mode. Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Sets progress sink which is called after every generation.
    pub fn with_progress(mut self, progress: ProgressSink) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Builds the evolution config.
    pub fn build(self) -> GenericResult<EvolutionConfig> {
        let generations = match self.generations {
            Some(0) => return Err("amount of generations must be positive".into()),
            Some(generations) => generations,
            None => return Err("missing amount of generations".into()),
        };

        let (breed_name, breed) = self.breed.ok_or_else(|| "missing breed strategy".to_string())?;
        let (mutate_name, mutate) = self.mutate.ok_or_else(|| "missing mutate strategy".to_string())?;
        let (select_name, select) = self.select.ok_or_else(|| "missing select strategy".to_string())?;

        if let TelemetryMode::OnlyLogging { logger, .. } = &self.telemetry {
            let strategies =
                [("breed", breed_name.as_str()), ("mutate", mutate_name.as_str()), ("select", select_name.as_str())];
            log_configuration(logger, generations, &strategies);
        }

        Ok(EvolutionConfig { generations, breed, mutate, select, telemetry: self.telemetry, progress: self.progress })
    }
}

fn log_configuration(logger: &InfoLogger, generations: usize, strategies: &[(&str, &str)]) {
    (logger)(format!("configured to use max-generations: {generations}").as_str());
    strategies.iter().for_each(|(role, name)| (logger)(format!("configured to use {role} strategy: {name}").as_str()));
}
