//! Configuration handling: the flat property source and the typed
//! configuration model built from it.

mod properties;
mod types;

pub use properties::Properties;
pub use types::{GlobalConfig, ModuleConfig};
