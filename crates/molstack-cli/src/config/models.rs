use molstack::engine::config::StackParameters;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input_files: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub auto_confirm: bool,
    pub params: StackParameters,
}
