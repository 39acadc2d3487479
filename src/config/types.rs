//! Typed configuration model built from the flat property source.

use crate::config::Properties;
use crate::constants::{
    AUTHOR_KEY, COMMENTS_KEY, COVER_KEY, CUSTOM_PREFIX, DATE_FORMAT, DEFAULT_COMMENTS,
    DEFAULT_TEMPLATE_DIR, ENTITY_PACKAGE_KEY, OUTPUT_DIR_KEY, OUTPUT_SOURCE_ROOT,
    TEMPLATE_DIR_KEY, TEMPLATE_EXTENSION,
};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::warn;
use std::path::{Path, PathBuf};

/// Resolved settings for rendering one module, immutable once registered.
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    /// Suffix appended to the entity name in generated class names.
    pub class_name_suffix: String,
    /// Template file rendered for every entity of this module.
    pub template_file: PathBuf,
    /// Package the generated classes belong to. Optional; without it the
    /// module renders but nothing is persisted.
    pub output_package: Option<String>,
    /// Directory derived from `output_package`, absent when the package is.
    pub output_dir: Option<PathBuf>,
}

impl ModuleConfig {
    /// Resolves settings for one module from the property source, falling
    /// back to convention defaults where explicit settings are absent.
    pub fn resolve(
        module: &str,
        properties: &Properties,
        template_root: &Path,
        output_root: &Path,
    ) -> Self {
        let class_name_suffix = properties
            .get(&format!("{module}.class.suffix"))
            .map(str::to_string)
            .unwrap_or_else(|| capitalize_first(module));

        let template_name = properties
            .get(&format!("{module}.ftlName"))
            .map(str::to_string)
            .unwrap_or_else(|| format!("{module}{TEMPLATE_EXTENSION}"));
        let template_file = template_root.join(template_name);

        let output_package =
            properties.get(&format!("{module}.package")).map(str::to_string);
        let output_dir = output_package
            .as_deref()
            .map(|package| output_root.join(package.replace('.', "/")));

        Self { class_name_suffix, template_file, output_package, output_dir }
    }
}

/// Global settings of one generation run, shared read-only once built.
#[derive(Debug)]
pub struct GlobalConfig {
    /// Package scanned for entity classes. Required.
    pub entity_package: String,
    /// Last path segment of `entity_package`.
    pub entity_flag: String,
    pub author: String,
    pub comments: String,
    /// Generation date stamp, fixed at construction time.
    pub date: String,
    pub template_root: PathBuf,
    /// Root under which module output directories are resolved.
    pub output_root: PathBuf,
    /// Whether existing output files are replaced (`cover` property).
    pub overwrite_existing: bool,
    /// User-supplied `custom.*` extras, keys normalized for template use.
    pub custom_params: IndexMap<String, String>,
    /// Registered modules, insertion order is registration order.
    pub module_configs: IndexMap<String, ModuleConfig>,
}

impl GlobalConfig {
    /// Builds the configuration from the property source.
    ///
    /// Fails with [`Error::MissingEntityPackage`] before anything else when
    /// `entity.package` is absent or empty.
    pub fn from_properties(properties: &Properties) -> Result<Self> {
        let entity_package = match properties.get(ENTITY_PACKAGE_KEY) {
            Some(package) if !package.trim().is_empty() => package.trim().to_string(),
            _ => return Err(Error::MissingEntityPackage),
        };
        let entity_flag =
            entity_package.rsplit('.').next().unwrap_or_default().to_string();

        let author = properties
            .get(AUTHOR_KEY)
            .map(str::to_string)
            .unwrap_or_else(current_user);
        let comments = properties.get_or(COMMENTS_KEY, DEFAULT_COMMENTS);
        let date = chrono::Local::now().format(DATE_FORMAT).to_string();

        let template_root =
            PathBuf::from(properties.get_or(TEMPLATE_DIR_KEY, DEFAULT_TEMPLATE_DIR));
        let output_root =
            PathBuf::from(properties.get_or(OUTPUT_DIR_KEY, OUTPUT_SOURCE_ROOT));
        let overwrite_existing = properties
            .get(COVER_KEY)
            .map(|value| value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // custom.a.b=x becomes template key a_b
        let custom_params = properties
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(CUSTOM_PREFIX)
                    .map(|rest| (rest.replace('.', "_"), value.to_string()))
            })
            .collect();

        Ok(Self {
            entity_package,
            entity_flag,
            author,
            comments,
            date,
            template_root,
            output_root,
            overwrite_existing,
            custom_params,
            module_configs: IndexMap::new(),
        })
    }

    /// Resolves and stores the configuration for one module.
    ///
    /// Registering the same name again replaces the earlier entry in place
    /// and logs a warning; the module renders exactly once per entity.
    pub fn register_module(&mut self, module: &str, properties: &Properties) {
        let module_config = ModuleConfig::resolve(
            module,
            properties,
            &self.template_root,
            &self.output_root,
        );
        if self.module_configs.insert(module.to_string(), module_config).is_some() {
            warn!("module '{module}' was registered twice, the last registration wins");
        }
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn current_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
