use super::args::Args;
use crate::catalog::ManifestCatalog;
use crate::config::Properties;
use crate::constants::COVER_KEY;
use crate::error::Result;
use crate::generator::Generator;
use log::info;

/// Loads configuration, registers the requested modules and runs one
/// generation pass over the manifest catalog.
pub fn run(args: Args) -> Result<()> {
    let mut properties = Properties::from_file(&args.config)?;
    if args.cover {
        properties.set(COVER_KEY, "true");
    }

    let mut generator = Generator::from_properties(properties)?;
    for module in &args.modules {
        generator = generator.register_module(module);
    }

    let catalog = ManifestCatalog::from_file(&args.manifest)?;
    let summary = generator.generate(&catalog)?;
    info!("generation finished");
    println!("{summary}");
    Ok(())
}
