use crate::core::models::library::MoleculeLibrary;
use crate::engine::assembly::assemble_stack;
use crate::engine::combinations::StackPlan;
use crate::engine::config::StackParameters;
use crate::engine::error::EngineError;
use crate::engine::guard::{ConfirmationGate, requires_confirmation};
use crate::engine::layout::{artifact_file_name, order_label};
use crate::engine::output::ArtifactWriter;
use crate::engine::progress::{Progress, ProgressReporter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// A progress message is emitted after every this many artifacts.
pub const PROGRESS_INTERVAL: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct StackSummary {
    pub artifacts_written: u64,
    pub order_groups: u64,
    pub output_root: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StackOutcome {
    Completed(StackSummary),
    /// The confirmation gate refused an oversized run; nothing was written.
    Declined { total: u64 },
}

/// Writes one geometry file for every (molecule order, rotation set) pair.
///
/// The outer loop runs over molecule orders, each getting its own directory under
/// `output_root`; the inner loop writes one file per rotation set. Runs above
/// [`crate::engine::guard::CONFIRMATION_THRESHOLD`] artifacts consult `gate` first.
///
/// # Errors
///
/// Returns [`EngineError::EmptyLibrary`] before touching the filesystem when no
/// molecules are available, and [`EngineError::ArtifactWrite`] on the first failed
/// write.
#[instrument(skip_all, name = "stack_workflow")]
pub fn run(
    library: &MoleculeLibrary,
    params: &StackParameters,
    output_root: &Path,
    gate: &mut impl ConfirmationGate,
    reporter: &ProgressReporter,
) -> Result<StackOutcome, EngineError> {
    if library.is_empty() {
        return Err(EngineError::EmptyLibrary);
    }
    params.validate()?;
    debug!("Stack parameters: {:?}", params);

    let plan = StackPlan::new(library.len(), params);
    let total = plan.total_artifacts();

    reporter.message("--- Calculation Details ---");
    reporter.message(format!("Layers in stack: {}", params.layer_count));
    reporter.message(format!("Unique input molecules: {}", library.len()));
    reporter.message(format!("Total geometries to generate: {}", total));
    info!(
        "Planning {} order(s) x {} rotation set(s) = {} geometries.",
        plan.order_count(),
        plan.rotation_count(),
        total
    );

    if requires_confirmation(total) && !gate.confirm(total) {
        info!("Generation of {} geometries declined.", total);
        return Ok(StackOutcome::Declined { total });
    }

    let mut writer = ArtifactWriter::new(output_root);
    writer.prepare_root()?;

    reporter.report(Progress::PhaseStart {
        name: "Generating geometries",
    });
    reporter.report(Progress::TaskStart { total_steps: total });

    let mut order_groups = 0u64;
    for order in plan.order_tuples() {
        let label = order_label(library, &order)?;
        let group_dir = PathBuf::from(&label);
        debug!("Writing order group '{}'", label);

        for rotations in plan.rotation_tuples() {
            let geometry = assemble_stack(library, &order, &rotations, params)?;
            let relative = group_dir.join(artifact_file_name(&rotations));
            writer.write(&relative, &geometry, &label)?;
            reporter.report(Progress::TaskIncrement);

            let count = writer.written();
            if count % PROGRESS_INTERVAL == 0 {
                let line = format!("Generated {} / {}...", count, total);
                info!("{}", line);
                reporter.message(line);
            }
        }
        order_groups += 1;
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    let summary = StackSummary {
        artifacts_written: writer.written(),
        order_groups,
        output_root: output_root.to_path_buf(),
    };
    let shown_root =
        std::path::absolute(output_root).unwrap_or_else(|_| output_root.to_path_buf());
    let line = format!(
        "Done. {} files saved to {}",
        summary.artifacts_written,
        shown_root.display()
    );
    info!("{}", line);
    reporter.message(line);

    Ok(StackOutcome::Completed(summary))
}
