//! Per-pair rendering: context assembly, output path resolution and the
//! overwrite policy.

mod outcome;

pub use outcome::RenderOutcome;

use crate::config::{GlobalConfig, ModuleConfig};
use crate::constants::OUTPUT_EXTENSION;
use crate::error::{Error, Result};
use crate::ioutils::write_file;
use crate::metadata::EntityInfo;
use crate::renderer::TemplateRenderer;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Renders one artifact per `(entity, module)` pair.
pub struct ArtifactRenderer<'a> {
    engine: &'a dyn TemplateRenderer,
    config: &'a GlobalConfig,
}

impl<'a> ArtifactRenderer<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, config: &'a GlobalConfig) -> Self {
        Self { engine, config }
    }

    /// Renders the module's template for the entity and applies the result
    /// to disk under the overwrite policy.
    ///
    /// Failures are per pair; the caller tallies them and continues with the
    /// remaining pairs.
    pub fn render(&self, entity: &EntityInfo, module: &str) -> Result<RenderOutcome> {
        let module_config = self
            .config
            .module_configs
            .get(module)
            .ok_or_else(|| Error::UnknownModule { module: module.to_string() })?;

        let context = self.build_context(entity, module_config);
        let content = self.engine.render_file(&module_config.template_file, &context)?;

        let Some(target) = target_path(entity, module_config) else {
            return Ok(RenderOutcome::NotPersisted { module: module.to_string() });
        };

        if target.exists() && !self.config.overwrite_existing {
            return Ok(RenderOutcome::SkippedExisting { target });
        }

        write_file(&content, &target)?;
        Ok(RenderOutcome::Written { target })
    }

    /// Ephemeral context for one render call: global scalars, module
    /// settings, entity structure and the custom params flattened on top.
    fn build_context(&self, entity: &EntityInfo, module_config: &ModuleConfig) -> Value {
        let mut context = json!({
            "author": self.config.author,
            "comments": self.config.comments,
            "date": self.config.date,
            "entityPackage": self.config.entity_package,
            "entityFlag": self.config.entity_flag,
            "packageName": module_config.output_package,
            "suffix": module_config.class_name_suffix,
            "className": entity.simple_name,
            "qualifiedName": entity.qualified_name,
            "tableName": entity.table_name,
            "fields": entity.fields,
            "idField": entity.primary_key(),
        });
        if let Some(object) = context.as_object_mut() {
            for (key, value) in &self.config.custom_params {
                object.insert(key.clone(), Value::String(value.clone()));
            }
        }
        context
    }
}

/// `<output_dir>/<SimpleName><Suffix>.java`, absent for modules without an
/// output package.
fn target_path(entity: &EntityInfo, module_config: &ModuleConfig) -> Option<PathBuf> {
    let output_dir = module_config.output_dir.as_ref()?;
    Some(output_dir.join(format!(
        "{}{}{OUTPUT_EXTENSION}",
        entity.simple_name, module_config.class_name_suffix
    )))
}
