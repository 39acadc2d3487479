use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Configuration property 'entity.package' is required and must not be empty.")]
    MissingEntityPackage,

    #[error("Failed to read configuration file '{path}'. Original error: {source}")]
    ConfigReadError {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse class manifest '{path}'. Original error: {source}")]
    ManifestParseError {
        path: String,
        source: serde_json::Error,
    },

    #[error("Template file '{template_file}' could not be read. Original error: {e}")]
    TemplateReadError { template_file: String, e: String },

    /// Raised when a render is requested for a module name that was never
    /// registered.
    #[error("No module '{module}' is registered.")]
    UnknownModule { module: String },
}

/// Convenience type alias for Results with this crate's Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
