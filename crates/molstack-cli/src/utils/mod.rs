pub mod progress;
pub mod prompt;
