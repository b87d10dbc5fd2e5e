use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use crate::utils::prompt::ConsolePrompt;
use molstack::engine::guard::AutoConfirm;
use molstack::engine::progress::ProgressReporter;
use molstack::workflows::{
    load::load_library,
    stack::{self, StackOutcome},
};
use tracing::info;

pub fn run(config: AppConfig) -> Result<StackOutcome> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Loading {} input file(s).", config.input_files.len());
    let library = load_library(&config.input_files, &reporter);

    info!("Invoking the stacking workflow...");
    let outcome = if config.auto_confirm {
        stack::run(
            &library,
            &config.params,
            &config.output_dir,
            &mut AutoConfirm,
            &reporter,
        )?
    } else {
        stack::run(
            &library,
            &config.params,
            &config.output_dir,
            &mut ConsolePrompt::stdio(),
            &reporter,
        )?
    };

    if let StackOutcome::Declined { total } = &outcome {
        info!("User declined writing {} files.", total);
        println!("Aborted. No files were written.");
    }

    Ok(outcome)
}
