use log::warn;
use regex::Regex;

// Re-export the case conversion and string manipulation functions
pub use cruet::{
    case::{
        camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
        screaming_snake::to_screaming_snake_case, snake::to_snake_case,
        table::to_table_case, train::to_train_case,
    },
    string::{pluralize::to_plural, singularize::to_singular},
    suffix::foreign_key::to_foreign_key,
};

use crate::metadata::FieldType;

/// Tests if a string matches a given regular expression pattern.
///
/// # Arguments
/// * `val` - The string to test
/// * `re` - The regular expression pattern
///
/// # Returns
/// * `bool` - True if the string matches the pattern, false otherwise
pub fn regex_filter(val: &str, re: &str) -> bool {
    match Regex::new(re) {
        Ok(re) => re.is_match(val),
        Err(err) => {
            warn!("Invalid regex '{re}': {err}");
            false
        }
    }
}

/// Maps a normalized field type name onto the Java source type it renders
/// back to. Names outside the normalized set pass through unchanged so
/// templates can feed declared types directly.
pub fn java_type_filter(val: &str) -> String {
    FieldType::from_name(val)
        .map(|field_type| field_type.java_type().to_string())
        .unwrap_or_else(|| val.to_string())
}
