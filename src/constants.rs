//! Constants used throughout the entigen application

/// Property key naming the package scanned for entity classes
pub const ENTITY_PACKAGE_KEY: &str = "entity.package";

/// Property key for the author stamped into generated files
pub const AUTHOR_KEY: &str = "author";

/// Property key for the comment line stamped into generated files
pub const COMMENTS_KEY: &str = "comments";

/// Property key for the template root directory
pub const TEMPLATE_DIR_KEY: &str = "template.dir";

/// Property key for the output root directory
pub const OUTPUT_DIR_KEY: &str = "output.dir";

/// Property key for the overwrite flag (boolean-as-string)
pub const COVER_KEY: &str = "cover";

/// Prefix of user-supplied extra params passed through to templates
pub const CUSTOM_PREFIX: &str = "custom.";

/// Marker annotation identifying entity classes
pub const ENTITY_MARKER: &str = "Entity";

/// Default template root directory
pub const DEFAULT_TEMPLATE_DIR: &str = "src/main/resources/template/";

/// Default comment line
pub const DEFAULT_COMMENTS: &str = "code generated by entigen";

/// Default root under which generated sources are written
pub const OUTPUT_SOURCE_ROOT: &str = "src/main/java";

/// Extension of generated source files
pub const OUTPUT_EXTENSION: &str = ".java";

/// Conventional extension of template files
pub const TEMPLATE_EXTENSION: &str = ".j2";

/// Format of the generation date stamp
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
