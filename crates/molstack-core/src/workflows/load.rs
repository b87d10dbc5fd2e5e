use crate::core::io::loader::load_molecule;
use crate::core::models::library::MoleculeLibrary;
use crate::engine::progress::ProgressReporter;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Loads every path into a library, in order.
///
/// Files that are missing, malformed, or hold no atoms are reported and skipped;
/// the returned library simply omits them. An empty result is left for the
/// caller to treat as fatal.
#[instrument(skip_all, name = "load_library")]
pub fn load_library<P: AsRef<Path>>(paths: &[P], reporter: &ProgressReporter) -> MoleculeLibrary {
    let mut molecules = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        match load_molecule(path) {
            Ok(molecule) => {
                let line = format!(
                    "Loaded: {} ({} atoms)",
                    molecule.name(),
                    molecule.atom_count()
                );
                info!("{}", line);
                reporter.message(line);
                molecules.push(molecule);
            }
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
            }
        }
    }

    info!(
        "Library ready with {} of {} input file(s).",
        molecules.len(),
        paths.len()
    );
    MoleculeLibrary::new(molecules)
}
