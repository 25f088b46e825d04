//! The rule engine: scans normalized text left to right, one rule per step.

use tracing::trace;

use crate::allophone::{Allophone, END_OF_UTTERANCE, encode};
use crate::error::{Error, Result};
use crate::table::RuleTable;

/// Translates normalized text into allophones.
///
/// At each position the section of the current character is searched in
/// order and the first rule that matches is applied: its output is appended
/// and its literal consumed. [`END_OF_UTTERANCE`] is appended at the end, so
/// the empty string yields `[PA3]`.
///
/// The input must already be normalized (upper case, single spaces); no
/// normalization happens here.
///
/// # Errors
///
/// - [`Error::NoRuleForCharacter`] if a character has no section.
/// - [`Error::NoMatchingContext`] if no rule of the section matches.
///
/// Either aborts the whole translation.
pub fn translate(table: &RuleTable, text: &str) -> Result<Vec<Allophone>> {
    let mut output = Vec::with_capacity(text.len() * 2 + 1);
    let mut position = 0;

    while let Some(character) = text[position..].chars().next() {
        let rules = table
            .section(character)
            .ok_or(Error::NoRuleForCharacter {
                character,
                position,
            })?;
        let rule = rules
            .iter()
            .find(|rule| rule.matches(text, position))
            .ok_or(Error::NoMatchingContext {
                character,
                position,
            })?;
        trace!(position, %rule, "applied rule");
        output.extend_from_slice(rule.output());
        position += rule.literal().len();
    }

    output.push(END_OF_UTTERANCE);
    Ok(output)
}

/// Translates normalized text straight to chip codes.
///
/// # Errors
///
/// As [`translate`].
pub fn text_to_codes(table: &RuleTable, text: &str) -> Result<Vec<u8>> {
    translate(table, text).map(|allophones| encode(&allophones))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allophone::Allophone::*;
    use crate::meta::input_alphabet;
    use crate::table::{RuleConfig, RuleTableConfig};

    fn table() -> RuleTable {
        RuleTable::builtin().unwrap()
    }

    /// Every input character maps to `PA1` except `A`, which only speaks
    /// after a non-letter.
    fn partial_table() -> RuleTable {
        let sections = input_alphabet()
            .map(|c| {
                let left = if c == 'A' { "<" } else { "" };
                let rule = RuleConfig {
                    left: left.to_string(),
                    literal: c.to_string(),
                    right: String::new(),
                    output: vec!["PA1".to_string()],
                };
                (c.to_string(), vec![rule])
            })
            .collect();
        RuleTable::compile(&RuleTableConfig { sections }).unwrap()
    }

    #[test]
    fn empty_input_is_just_the_pause() {
        assert_eq!(translate(&table(), ""), Ok(vec![PA3]));
    }

    #[test]
    fn punctuation() {
        let table = table();
        assert_eq!(translate(&table, "-"), Ok(vec![PA1, PA3]));
        assert_eq!(translate(&table, ","), Ok(vec![PA4, PA3]));
        assert_eq!(translate(&table, " "), Ok(vec![PA2, PA3]));
        assert_eq!(translate(&table, "."), Ok(vec![PA5, PA5, PA3]));
    }

    #[test]
    fn multi_character_literal_is_consumed_whole() {
        assert_eq!(
            translate(&table(), " THE "),
            Ok(vec![PA2, DH1, AX, PA2, PA3])
        );
    }

    #[test]
    fn silent_letters_produce_nothing() {
        // The first L of a double L matches `[L]L = []`.
        assert_eq!(
            translate(&table(), " HELLO "),
            Ok(vec![PA2, HH1, EH, LL, OW, PA2, PA3])
        );
    }

    #[test]
    fn left_context_spans_the_whole_prefix() {
        let table = table();
        assert_eq!(translate(&table, " A "), Ok(vec![PA2, EY, PA2, PA3]));
        // With two leading spaces `<[A]<` no longer sees a lone non-letter.
        assert_eq!(
            translate(&table, "  A "),
            Ok(vec![PA2, PA2, AX, PA2, PA3])
        );
    }

    #[test]
    fn lowercase_has_no_section() {
        assert_eq!(
            translate(&table(), "HI there"),
            Err(Error::NoRuleForCharacter {
                character: 't',
                position: 3,
            })
        );
    }

    #[test]
    fn exhausted_section() {
        let table = partial_table();
        assert_eq!(translate(&table, " A"), Ok(vec![PA1, PA1, PA3]));
        assert_eq!(
            translate(&table, "BA"),
            Err(Error::NoMatchingContext {
                character: 'A',
                position: 1,
            })
        );
    }

    #[test]
    fn codes() {
        assert_eq!(text_to_codes(&table(), "-"), Ok(vec![0, 2]));
        assert_eq!(
            text_to_codes(&table(), " HELLO "),
            Ok(vec![1, 27, 7, 45, 53, 1, 2])
        );
        assert!(text_to_codes(&table(), "é").is_err());
    }
}
