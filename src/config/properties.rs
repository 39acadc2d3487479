//! Flat key/value configuration source.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Java-style `.properties` store preserving insertion order.
#[derive(Debug, Default, Clone)]
pub struct Properties {
    entries: IndexMap<String, String>,
}

impl Properties {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| Error::ConfigReadError {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self::parse(&content))
    }

    /// Parses `key=value` lines. Lines starting with `#` or `!` are comments,
    /// `:` is an accepted separator, surrounding whitespace is trimmed and
    /// lines without a separator are ignored.
    pub fn parse(content: &str) -> Self {
        let mut entries = IndexMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some(split_at) = line.find(|c| c == '=' || c == ':') else {
                continue;
            };
            let key = line[..split_at].trim();
            let value = line[split_at + 1..].trim();
            if !key.is_empty() {
                entries.insert(key.to_string(), value.to_string());
            }
        }
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::default();
        for (key, value) in iter {
            properties.set(key, value);
        }
        properties
    }
}
