use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use molstack::engine::progress::{Progress, ProgressCallback};

const BAR_TEMPLATE: &str = "{msg:<22} [{bar:40.cyan/blue}] {pos}/{len} files ({per_sec}, {eta})";
const FINISHED_MARK: &str = "✓";

/// Renders a generation run as one file-count bar on stderr.
///
/// The bar stays hidden until the run announces its total, so loading and the
/// confirmation prompt print on a clean console. Text messages are printed above
/// the bar without disturbing it.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => pb.set_message(name),
            Progress::TaskStart { total_steps } => {
                pb.reset();
                pb.set_style(Self::bar_style());
                pb.set_length(total_steps);
                pb.set_position(0);
                pb.set_draw_target(ProgressDrawTarget::stderr());
            }
            Progress::TaskIncrement => pb.inc(1),
            Progress::TaskFinish => {
                if let Some(len) = pb.length() {
                    pb.set_position(len);
                }
            }
            Progress::PhaseFinish => {
                let label = format!("{} {}", FINISHED_MARK, pb.message());
                pb.finish_with_message(label);
            }
            Progress::Message(msg) => pb.suspend(|| println!("{}", msg)),
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
