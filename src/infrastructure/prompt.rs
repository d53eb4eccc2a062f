//! Yes/no confirmation on the terminal

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Ask `question (y/n)` on stdout and read the answer from stdin.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} (y/n): ", question);
    io::stdout().flush()?;

    let stdin = io::stdin();
    read_answer(stdin.lock())
}

/// Only `y` or `yes` (any case) accept. End of input declines.
pub fn read_answer<R: BufRead>(mut input: R) -> Result<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_yes() {
        assert!(read_answer("y\n".as_bytes()).unwrap());
        assert!(read_answer("  YES \n".as_bytes()).unwrap());
    }

    #[test]
    fn declines_anything_else() {
        assert!(!read_answer("n\n".as_bytes()).unwrap());
        assert!(!read_answer("yep\n".as_bytes()).unwrap());
        assert!(!read_answer("".as_bytes()).unwrap());
    }
}
