//! Class catalog: the source of raw entity-tagged class descriptors.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One annotation tag attached to a class or field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub params: IndexMap<String, String>,
}

impl Annotation {
    pub fn named(name: &str) -> Self {
        Self { name: name.to_string(), params: IndexMap::new() }
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }
}

/// Raw shape of one declared field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    /// Declared type name as written in the source, e.g. `Long` or
    /// `java.time.LocalDateTime`.
    #[serde(rename = "type")]
    pub declared_type: String,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl FieldDescriptor {
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|annotation| annotation.name == name)
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

/// Raw shape of one class yielded by a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub qualified_name: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    pub fn simple_name(&self) -> &str {
        self.qualified_name.rsplit('.').next().unwrap_or(&self.qualified_name)
    }

    pub fn package(&self) -> &str {
        self.qualified_name.rsplit_once('.').map(|(package, _)| package).unwrap_or("")
    }

    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|annotation| annotation.name == name)
    }
}

/// Capability to enumerate entity-tagged classes under a package.
///
/// How classes are discovered (static analysis, a build step, a manifest
/// file) is up to the implementation; the generator only consumes the
/// yielded descriptors.
pub trait ClassCatalog {
    fn classes(&self, package: &str, marker: &str) -> Result<Vec<ClassDescriptor>>;
}

/// Catalog backed by a JSON manifest listing class descriptors.
#[derive(Debug, Default)]
pub struct ManifestCatalog {
    classes: Vec<ClassDescriptor>,
}

impl ManifestCatalog {
    pub fn new(classes: Vec<ClassDescriptor>) -> Self {
        Self { classes }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let classes = serde_json::from_str(&content).map_err(|source| {
            Error::ManifestParseError { path: path.display().to_string(), source }
        })?;
        Ok(Self { classes })
    }
}

impl ClassCatalog for ManifestCatalog {
    fn classes(&self, package: &str, marker: &str) -> Result<Vec<ClassDescriptor>> {
        Ok(self
            .classes
            .iter()
            .filter(|class| {
                let class_package = class.package();
                class_package == package
                    || class_package.starts_with(&format!("{package}."))
            })
            .filter(|class| class.annotation(marker).is_some())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn descriptor(qualified_name: &str, annotations: Vec<Annotation>) -> ClassDescriptor {
        ClassDescriptor {
            qualified_name: qualified_name.to_string(),
            annotations,
            fields: vec![],
        }
    }

    #[test]
    fn splits_qualified_name() {
        let class = descriptor("com.x.model.User", vec![]);
        assert_eq!(class.simple_name(), "User");
        assert_eq!(class.package(), "com.x.model");
    }

    #[test]
    fn unqualified_name_has_empty_package() {
        let class = descriptor("User", vec![]);
        assert_eq!(class.simple_name(), "User");
        assert_eq!(class.package(), "");
    }

    #[test]
    fn filters_by_package_and_marker() {
        let catalog = ManifestCatalog::new(vec![
            descriptor("com.x.model.User", vec![Annotation::named("Entity")]),
            descriptor("com.x.model.inner.Order", vec![Annotation::named("Entity")]),
            descriptor("com.x.model.Helper", vec![]),
            descriptor("com.x.modeling.Fake", vec![Annotation::named("Entity")]),
            descriptor("com.other.Thing", vec![Annotation::named("Entity")]),
        ]);

        let classes = catalog.classes("com.x.model", "Entity").unwrap();
        let names: Vec<&str> = classes.iter().map(|c| c.simple_name()).collect();
        assert_eq!(names, ["User", "Order"]);
    }

    #[test]
    fn loads_descriptors_from_a_json_manifest() {
        let mut manifest = NamedTempFile::new().unwrap();
        write!(
            manifest,
            r#"[{{
                "qualified_name": "com.x.model.User",
                "annotations": [{{"name": "Entity"}}],
                "fields": [{{"name": "id", "type": "Long", "annotations": [{{"name": "Id"}}]}}]
            }}]"#
        )
        .unwrap();

        let catalog = ManifestCatalog::from_file(manifest.path()).unwrap();
        let classes = catalog.classes("com.x.model", "Entity").unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].fields[0].declared_type, "Long");
        assert!(classes[0].fields[0].annotation("Id").is_some());
    }

    #[test]
    fn invalid_manifest_reports_parse_error() {
        let mut manifest = NamedTempFile::new().unwrap();
        write!(manifest, "not json").unwrap();

        let result = ManifestCatalog::from_file(manifest.path());
        assert!(matches!(result, Err(Error::ManifestParseError { .. })));
    }
}
