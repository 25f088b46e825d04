//! Turns raw text into the form the rule engine accepts.

use std::io::{self, BufRead};

/// Trims and upper-cases every line, then joins them with single spaces.
///
/// Characters outside the rule alphabet are left in place; the translator
/// reports them.
pub fn normalize_lines<R: BufRead>(reader: R) -> io::Result<String> {
    let lines = reader
        .lines()
        .map(|line| line.map(|line| line.trim().to_uppercase()))
        .collect::<io::Result<Vec<_>>>()?;
    Ok(lines.join(" "))
}

/// [`normalize_lines`] for text already in memory.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.lines()
        .map(|line| line.trim().to_uppercase())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_trimmed_lines() {
        let input = "  Hello\nworld.  \r\n";
        assert_eq!(normalize_lines(input.as_bytes()).unwrap(), "HELLO WORLD.");
        assert_eq!(normalize(input), "HELLO WORLD.");
    }

    #[test]
    fn keeps_blank_lines_as_spaces() {
        assert_eq!(normalize("one\n\ntwo"), "ONE  TWO");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize_lines("".as_bytes()).unwrap(), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn inner_spacing_is_kept() {
        assert_eq!(normalize("don't  stop"), "DON'T  STOP");
    }
}
