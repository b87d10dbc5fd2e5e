use molstack::engine::guard::ConfirmationGate;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Asks on the console before an oversized run; only `y` (any case) proceeds.
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, total: u64) -> io::Result<bool> {
        write!(
            self.writer,
            "Warning: This will generate {} files. Continue? (y/n): ",
            total
        )?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(answer.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y"))
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConfirmationGate for ConsolePrompt<R, W> {
    fn confirm(&mut self, total: u64) -> bool {
        match self.ask(total) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Could not read confirmation, aborting: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let decision = ConsolePrompt::new(Cursor::new(input.to_string()), &mut out).confirm(12_345);
        (decision, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prompt_mentions_total_file_count() {
        let (_, shown) = answer("y\n");
        assert_eq!(shown, "Warning: This will generate 12345 files. Continue? (y/n): ");
    }

    #[test]
    fn lowercase_and_uppercase_y_confirm() {
        assert!(answer("y\n").0);
        assert!(answer("Y\n").0);
        assert!(answer("y\r\n").0);
    }

    #[test]
    fn padded_answer_declines() {
        assert!(!answer("  y  \n").0);
        assert!(!answer("Y \n").0);
    }

    #[test]
    fn anything_else_declines() {
        assert!(!answer("yes\n").0);
        assert!(!answer("n\n").0);
        assert!(!answer("\n").0);
    }

    #[test]
    fn end_of_input_declines() {
        assert!(!answer("").0);
    }
}
