//! Letter-to-sound rules for the SP0256-AL2 speech chip.
//!
//! *NOTE*: This does not make any sound by itself.
//! It turns normalized English text into the allophone codes the chip speaks,
//! using the context-sensitive rules of the CTS256A-AL2 text-to-speech controller.
//!
//! ```
//! use cts256::{Allophone, RuleTable};
//!
//! let table = RuleTable::builtin()?;
//! let allophones = table.translate(" HELLO ")?;
//! assert_eq!(allophones.last(), Some(&Allophone::PA3));
//! assert_eq!(cts256::encode(&allophones), [1, 27, 7, 45, 53, 1, 2]);
//! # Ok::<(), cts256::Error>(())
//! ```
//!
//! Input must be upper case letters, digits, spaces and `-',;.!?:%$#`.
//! Anything else fails with [`Error::NoRuleForCharacter`].

#![deny(clippy::all, clippy::pedantic, unsafe_code)]

mod allophone;
pub use allophone::{Allophone, END_OF_UTTERANCE, encode, encode_names};
mod error;
pub use error::{Error, Result};
mod meta;
pub use meta::{MetaSymbol, PUNCTUATION, PatternCompiler, Side, input_alphabet, is_input_char};
mod rules;
mod table;
pub use table::{Rule, RuleConfig, RuleTable, RuleTableConfig};
mod translate;
pub use translate::{text_to_codes, translate};
#[cfg(test)]
mod lib_tests;
