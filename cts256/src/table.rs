//! Rule tables: their serializable description and the compiled form the
//! translator runs on.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allophone::Allophone;
use crate::error::{Error, Result};
use crate::meta::{PatternCompiler, Side, input_alphabet, is_input_char};
use crate::rules::SECTIONS;

/// One rule as it appears in a JSON rule table.
///
/// ```json
/// { "left": "#:", "match": "ALLY", "output": ["AX", "LL", "IY"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Context the text before the literal must match; empty means any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub left: String,
    /// Text consumed by the rule. Starts with the section's character.
    #[serde(rename = "match")]
    pub literal: String,
    /// Context the text after the literal must start with; empty means any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub right: String,
    /// Allophone mnemonics spoken for the literal. May be empty.
    #[serde(default)]
    pub output: Vec<String>,
}

/// A complete rule table, keyed by the character each section handles.
///
/// Rule order within a section is priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTableConfig {
    pub sections: BTreeMap<String, Vec<RuleConfig>>,
}

impl RuleTableConfig {
    /// The built-in English rules.
    #[must_use]
    pub fn builtin() -> Self {
        let sections = SECTIONS
            .iter()
            .map(|(key, rules)| {
                let rules = rules
                    .iter()
                    .map(|spec| RuleConfig {
                        left: spec.left.to_string(),
                        literal: spec.literal.to_string(),
                        right: spec.right.to_string(),
                        output: spec.output.iter().map(|a| a.name().to_string()).collect(),
                    })
                    .collect();
                (key.to_string(), rules)
            })
            .collect();
        Self { sections }
    }

    /// # Errors
    ///
    /// [`Error::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A compiled rule: `left[literal]right = output`.
#[derive(Debug, Clone)]
pub struct Rule {
    left: Option<Regex>,
    literal: String,
    right: Option<Regex>,
    output: Vec<Allophone>,
    source: RuleConfig,
}

impl Rule {
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    #[must_use]
    pub fn output(&self) -> &[Allophone] {
        &self.output
    }

    /// Whether the rule applies at byte offset `position` of `text`.
    ///
    /// The literal must start at `position`, the left context must match all
    /// of `text[..position]`, and the right context must match a prefix of
    /// what follows the literal.
    #[must_use]
    pub fn matches(&self, text: &str, position: usize) -> bool {
        let Some(after) = text[position..].strip_prefix(self.literal.as_str()) else {
            return false;
        };
        if let Some(left) = &self.left {
            if !left.is_match(&text[..position]) {
                return false;
            }
        }
        self.right.as_ref().is_none_or(|right| right.is_match(after))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]{} = [{}]",
            self.source.left,
            self.literal,
            self.source.right,
            self.source.output.join(" ")
        )
    }
}

/// Compiled, immutable rule table. Build once and share by reference.
#[derive(Debug, Clone)]
pub struct RuleTable {
    sections: HashMap<char, Vec<Rule>>,
}

impl RuleTable {
    /// Compiles the built-in English rules.
    ///
    /// # Errors
    ///
    /// Propagates [`RuleTable::compile`] errors; none occur for the shipped data.
    pub fn builtin() -> Result<Self> {
        Self::compile(&RuleTableConfig::builtin())
    }

    /// Parses and compiles a JSON rule table.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] for malformed JSON, otherwise as [`RuleTable::compile`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RuleTableConfig = serde_json::from_str(json)?;
        Self::compile(&config)
    }

    /// Reads, parses and compiles a JSON rule table file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file cannot be read, otherwise as
    /// [`RuleTable::from_json_str`].
    pub fn from_json_path(path: &Path) -> Result<Self> {
        debug!(?path, "loading rule table");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validates a rule table and compiles every context.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRuleConfiguration`] if a section key is not a single
    ///   input character, a literal is empty, does not start with its key or
    ///   holds characters outside the input alphabet, a context cannot be
    ///   compiled, or an input character has no section.
    /// - [`Error::UnknownAllophone`] if an output names no allophone.
    pub fn compile(config: &RuleTableConfig) -> Result<Self> {
        let mut compiler = PatternCompiler::new();
        let mut sections = HashMap::with_capacity(config.sections.len());
        let mut total = 0;

        for (key, rules) in &config.sections {
            let key = section_key(key)?;
            let compiled = rules
                .iter()
                .enumerate()
                .map(|(index, rule)| compile_rule(&mut compiler, key, index, rule))
                .collect::<Result<Vec<_>>>()?;
            total += compiled.len();
            let _ = sections.insert(key, compiled);
        }

        if let Some(missing) = input_alphabet().find(|c| !sections.contains_key(c)) {
            return Err(Error::InvalidRuleConfiguration(format!(
                "no section for input character {missing:?}"
            )));
        }

        debug!(
            sections = sections.len(),
            rules = total,
            matchers = compiler.cached(),
            "compiled rule table"
        );
        Ok(Self { sections })
    }

    /// The ordered rules for `c`, if it has a section.
    #[must_use]
    pub fn section(&self, c: char) -> Option<&[Rule]> {
        self.sections.get(&c).map(Vec::as_slice)
    }

    /// Total number of rules over all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// See [`translate`](fn@crate::translate).
    ///
    /// # Errors
    ///
    /// As [`translate`](fn@crate::translate).
    pub fn translate(&self, text: &str) -> Result<Vec<Allophone>> {
        crate::translate::translate(self, text)
    }
}

fn section_key(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_input_char(c) => Ok(c),
        _ => Err(Error::InvalidRuleConfiguration(format!(
            "section key {key:?} is not a single input character"
        ))),
    }
}

fn compile_rule(
    compiler: &mut PatternCompiler,
    key: char,
    index: usize,
    rule: &RuleConfig,
) -> Result<Rule> {
    let invalid = |reason: String| {
        Error::InvalidRuleConfiguration(format!("section {key:?}, rule {index}: {reason}"))
    };

    if !rule.literal.starts_with(key) {
        return Err(invalid(format!(
            "literal {:?} does not start with the section character",
            rule.literal
        )));
    }
    if let Some(c) = rule.literal.chars().find(|c| !is_input_char(*c)) {
        return Err(invalid(format!(
            "literal {:?} contains unsupported character {c:?}",
            rule.literal
        )));
    }

    let context = |err: Error| match err {
        Error::InvalidRuleConfiguration(reason) => invalid(reason),
        other => other,
    };
    let left = compiler.compile(Side::Left, &rule.left).map_err(context)?;
    let right = compiler.compile(Side::Right, &rule.right).map_err(context)?;
    let output = rule
        .output
        .iter()
        .map(|name| name.parse::<Allophone>())
        .collect::<Result<Vec<_>>>()?;

    Ok(Rule {
        left,
        literal: rule.literal.clone(),
        right,
        output,
        source: rule.clone(),
    })
}
