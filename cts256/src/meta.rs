//! Meta-symbols used in rule contexts and the compiler that expands them.
//!
//! A context such as `#:.E` reads as "one or more vowels, any consonants, a
//! voiced consonant run, then `E`". Each meta-symbol expands to a fixed
//! character class over the upper-case input alphabet; every other character
//! of a context is matched literally.

use std::collections::HashMap;

use regex::Regex;
use tracing::trace;

use crate::error::{Error, Result};

/// Punctuation accepted in normalized input, besides letters and digits.
pub const PUNCTUATION: &str = " -',;.!?:%$#";

/// Whether `c` may appear in normalized input.
#[must_use]
pub fn is_input_char(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit() || PUNCTUATION.contains(c)
}

/// Every character that may appear in normalized input.
pub fn input_alphabet() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('0'..='9').chain(PUNCTUATION.chars())
}

/// A wildcard token of the rule language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaSymbol {
    /// `#`: one or more vowels.
    Vowels,
    /// `.`: one or more voiced consonants.
    VoicedConsonants,
    /// `%`: a suffix (`ER`, `E`, `ES`, `ED`, `ING`, `ELY`).
    Suffix,
    /// `&`: a sibilant (`S`, `C`, `G`, `Z`, `X`, `J`, `CH`, `SH`).
    Sibilant,
    /// `@`: a consonant that makes a following `U` long.
    LongU,
    /// `^`: exactly one consonant.
    Consonant,
    /// `+`: a front vowel.
    FrontVowel,
    /// `:`: zero or more consonants.
    ZeroOrMoreConsonants,
    /// `*`: one or more consonants.
    OneOrMoreConsonants,
    /// `>`: a back vowel.
    BackVowel,
    /// `<`: one character that is not a letter.
    NonLetter,
    /// `?`: two or more vowels.
    TwoOrMoreVowels,
}

impl MetaSymbol {
    /// Every meta-symbol, in the order the rule language numbers them.
    pub const ALL: [MetaSymbol; 12] = [
        MetaSymbol::Vowels,
        MetaSymbol::VoicedConsonants,
        MetaSymbol::Suffix,
        MetaSymbol::Sibilant,
        MetaSymbol::LongU,
        MetaSymbol::Consonant,
        MetaSymbol::FrontVowel,
        MetaSymbol::ZeroOrMoreConsonants,
        MetaSymbol::OneOrMoreConsonants,
        MetaSymbol::BackVowel,
        MetaSymbol::NonLetter,
        MetaSymbol::TwoOrMoreVowels,
    ];

    /// The symbol written as `c`, if any.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.token() == c)
    }

    /// The character that stands for this symbol in a context.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            MetaSymbol::Vowels => '#',
            MetaSymbol::VoicedConsonants => '.',
            MetaSymbol::Suffix => '%',
            MetaSymbol::Sibilant => '&',
            MetaSymbol::LongU => '@',
            MetaSymbol::Consonant => '^',
            MetaSymbol::FrontVowel => '+',
            MetaSymbol::ZeroOrMoreConsonants => ':',
            MetaSymbol::OneOrMoreConsonants => '*',
            MetaSymbol::BackVowel => '>',
            MetaSymbol::NonLetter => '<',
            MetaSymbol::TwoOrMoreVowels => '?',
        }
    }

    /// The regular expression fragment the token expands to.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            MetaSymbol::Vowels => "[AEIOU]+",
            MetaSymbol::VoicedConsonants => "[BDGJLMNRVWX]+",
            MetaSymbol::Suffix => "(?:ER|E|ES|ED|ING|ELY)",
            MetaSymbol::Sibilant => "(?:S|C|G|Z|X|J|CH|SH)",
            MetaSymbol::LongU => "(?:T|S|R|D|L|Z|N|J|TH|CH|SH)",
            MetaSymbol::Consonant => "[BCDFGHJKLMNPQRSTVWXYZ]",
            MetaSymbol::FrontVowel => "[EIY]",
            MetaSymbol::ZeroOrMoreConsonants => "[BCDFGHJKLMNPQRSTVWXYZ]*",
            MetaSymbol::OneOrMoreConsonants => "[BCDFGHJKLMNPQRSTVWXYZ]+",
            MetaSymbol::BackVowel => "[OU]",
            MetaSymbol::NonLetter => "[^A-Z]",
            MetaSymbol::TwoOrMoreVowels => "[AEIOU]{2,}",
        }
    }
}

/// Which side of the matched literal a context constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Must account for the whole text before the literal.
    Left,
    /// Must match a prefix of the text after the literal.
    Right,
}

/// Expands contexts into anchored regular expressions, compiling each
/// distinct context once.
#[derive(Debug, Default)]
pub struct PatternCompiler {
    expanded: HashMap<String, String>,
    compiled: HashMap<(Side, String), Regex>,
}

impl PatternCompiler {
    /// A compiler with empty caches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands every meta-symbol of `context`; other characters are escaped.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRuleConfiguration`] if `context` contains a character
    /// that is neither a meta-symbol nor part of the input alphabet.
    pub fn expand(&mut self, context: &str) -> Result<&str> {
        if !self.expanded.contains_key(context) {
            let pattern = expand_uncached(context)?;
            trace!(context, %pattern, "expanded context");
            let _ = self.expanded.insert(context.to_string(), pattern);
        }
        Ok(self.expanded[context].as_str())
    }

    /// Compiles a context for one side of a rule. An empty context has no
    /// matcher and always holds.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRuleConfiguration`] for an unknown character or a
    /// pattern the regex engine rejects.
    pub fn compile(&mut self, side: Side, context: &str) -> Result<Option<Regex>> {
        if context.is_empty() {
            return Ok(None);
        }
        let key = (side, context.to_string());
        if let Some(regex) = self.compiled.get(&key) {
            return Ok(Some(regex.clone()));
        }
        let expanded = self.expand(context)?;
        let anchored = match side {
            Side::Left => format!("^(?:{expanded})$"),
            Side::Right => format!("^(?:{expanded})"),
        };
        let regex = Regex::new(&anchored).map_err(|err| {
            Error::InvalidRuleConfiguration(format!("context {context:?}: {err}"))
        })?;
        let _ = self.compiled.insert(key, regex.clone());
        Ok(Some(regex))
    }

    /// Number of distinct compiled matchers.
    #[must_use]
    pub fn cached(&self) -> usize {
        self.compiled.len()
    }
}

fn expand_uncached(context: &str) -> Result<String> {
    let mut pattern = String::with_capacity(context.len() * 8);
    for c in context.chars() {
        if let Some(meta) = MetaSymbol::from_char(c) {
            pattern.push_str(meta.pattern());
        } else if is_input_char(c) {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        } else {
            return Err(Error::InvalidRuleConfiguration(format!(
                "context {context:?} contains unsupported character {c:?}"
            )));
        }
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(context: &str) -> Regex {
        PatternCompiler::new()
            .compile(Side::Left, context)
            .unwrap()
            .unwrap()
    }

    fn right(context: &str) -> Regex {
        PatternCompiler::new()
            .compile(Side::Right, context)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn tokens_round_trip() {
        for meta in MetaSymbol::ALL {
            assert_eq!(MetaSymbol::from_char(meta.token()), Some(meta));
        }
        assert_eq!(MetaSymbol::from_char('A'), None);
        assert_eq!(MetaSymbol::from_char('$'), None);
    }

    #[test]
    fn expand_mixes_literals_and_classes() {
        let mut compiler = PatternCompiler::new();
        assert_eq!(compiler.expand("^E").unwrap(), "[BCDFGHJKLMNPQRSTVWXYZ]E");
        assert_eq!(compiler.expand("'S").unwrap(), "'S");
        assert_eq!(compiler.expand("").unwrap(), "");
    }

    #[test]
    fn expand_rejects_foreign_characters() {
        let mut compiler = PatternCompiler::new();
        assert!(matches!(
            compiler.expand("[I]"),
            Err(Error::InvalidRuleConfiguration(_))
        ));
        assert!(compiler.expand("a").is_err());
    }

    #[test]
    fn empty_context_has_no_matcher() {
        let mut compiler = PatternCompiler::new();
        assert!(compiler.compile(Side::Left, "").unwrap().is_none());
        assert!(compiler.compile(Side::Right, "").unwrap().is_none());
    }

    #[test]
    fn left_context_covers_whole_prefix() {
        let non_letter = left("<");
        assert!(non_letter.is_match(" "));
        assert!(!non_letter.is_match(""));
        assert!(!non_letter.is_match("  "));
        assert!(!non_letter.is_match("A "));

        let word_start = left("<:");
        assert!(word_start.is_match(" ST"));
        assert!(word_start.is_match("-"));
        assert!(!word_start.is_match("A ST"));
    }

    #[test]
    fn right_context_matches_prefix_only() {
        let suffix = right("^%");
        assert!(suffix.is_match("TING AND MORE"));
        assert!(suffix.is_match("DELY"));
        assert!(!suffix.is_match("TAL"));
        assert!(!suffix.is_match(" TE"));
    }

    #[test]
    fn class_semantics() {
        assert!(right("?").is_match("OUT"));
        assert!(!right("?").is_match("OT"));
        assert!(left("#:.E").is_match("ABRE"));
        assert!(left("#:.E").is_match("ASTRE"));
        assert!(!left("#:.E").is_match("STRE"));
        assert!(right("&").is_match("CHIN"));
        assert!(right(">").is_match("U"));
        assert!(!right("+").is_match("A"));
        assert!(right("<").is_match("9"));
    }

    #[test]
    fn compile_is_memoized_per_side() {
        let mut compiler = PatternCompiler::new();
        let _ = compiler.compile(Side::Left, "#:").unwrap();
        let _ = compiler.compile(Side::Left, "#:").unwrap();
        assert_eq!(compiler.cached(), 1);
        let _ = compiler.compile(Side::Right, "#:").unwrap();
        assert_eq!(compiler.cached(), 2);
        assert_eq!(compiler.expanded.len(), 1);
    }

    #[test]
    fn alphabet_membership() {
        assert!(input_alphabet().all(is_input_char));
        assert_eq!(input_alphabet().count(), 26 + 10 + PUNCTUATION.len());
        assert!(!is_input_char('a'));
        assert!(!is_input_char('\t'));
    }
}
