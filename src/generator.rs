//! Orchestration of the full entities x modules generation run.

use crate::artifact::{ArtifactRenderer, RenderOutcome};
use crate::catalog::ClassCatalog;
use crate::config::{GlobalConfig, Properties};
use crate::constants::ENTITY_MARKER;
use crate::error::Result;
use crate::metadata::{EntityInfo, EntityParser, JpaParser};
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};
use log::{error, info, warn};
use std::fmt;
use std::path::Path;

/// Aggregated outcome counts of one generation run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl GenerationSummary {
    pub fn attempted(&self) -> usize {
        self.generated + self.skipped + self.failed
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} generated, {} skipped, {} failed",
            self.generated, self.skipped, self.failed
        )
    }
}

/// Drives the two-stage pipeline: normalize every discovered entity class,
/// then render every registered module for each of them.
pub struct Generator {
    config: GlobalConfig,
    properties: Properties,
    parser: Box<dyn EntityParser>,
    engine: Box<dyn TemplateRenderer>,
}

impl Generator {
    /// Builds a generator from an already loaded property source.
    ///
    /// Fails before any generation when `entity.package` is missing or
    /// empty.
    pub fn from_properties(properties: Properties) -> Result<Self> {
        let config = GlobalConfig::from_properties(&properties)?;
        info!("initialized generator for entity package '{}'", config.entity_package);
        Ok(Self {
            config,
            properties,
            parser: Box::new(JpaParser),
            engine: Box::new(MiniJinjaRenderer::new()),
        })
    }

    /// Builds a generator from a `.properties` file on disk.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_properties(Properties::from_file(path)?)
    }

    /// Substitutes the annotation dialect.
    pub fn with_parser(mut self, parser: Box<dyn EntityParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Substitutes the template engine.
    pub fn with_engine(mut self, engine: Box<dyn TemplateRenderer>) -> Self {
        self.engine = engine;
        self
    }

    /// Registers one output module, resolving its settings from the property
    /// source. Chainable; registration order is render order. Registering a
    /// name twice replaces the earlier settings and still renders once.
    pub fn register_module(mut self, module: &str) -> Self {
        self.config.register_module(module, &self.properties);
        self
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Runs the full cross product of discovered entities and registered
    /// modules, entity-major. Every pair is attempted exactly once;
    /// per-pair failures are tallied, never propagated.
    pub fn generate(&self, catalog: &dyn ClassCatalog) -> Result<GenerationSummary> {
        let classes = catalog.classes(&self.config.entity_package, ENTITY_MARKER)?;
        let entities: Vec<EntityInfo> =
            classes.iter().filter_map(|class| self.parser.parse(class)).collect();

        let mut summary = GenerationSummary::default();
        if entities.is_empty() {
            warn!(
                "found no entity class under '{}', check that the entity package is correct",
                self.config.entity_package
            );
            return Ok(summary);
        }

        info!("found {} entity classes, starting generation", entities.len());
        let renderer = ArtifactRenderer::new(self.engine.as_ref(), &self.config);

        for entity in &entities {
            for module in self.config.module_configs.keys() {
                match renderer.render(entity, module) {
                    Ok(outcome) => {
                        if outcome.is_failure() {
                            warn!("{}", outcome.get_message());
                        } else {
                            info!("{}", outcome.get_message());
                        }
                        match outcome {
                            RenderOutcome::Written { .. } => summary.generated += 1,
                            RenderOutcome::SkippedExisting { .. } => summary.skipped += 1,
                            RenderOutcome::NotPersisted { .. } => summary.failed += 1,
                        }
                    }
                    Err(err) => {
                        error!(
                            "rendering module '{}' for entity '{}' failed: {}",
                            module, entity.simple_name, err
                        );
                        summary.failed += 1;
                    }
                }
            }
        }

        Ok(summary)
    }
}
