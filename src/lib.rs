//! Speak English text on an SP0256-AL2 speech chip.
//!
//! The rule engine lives in [`cts256`]; this crate adds what a complete tool
//! needs around it: text normalization, settings, and the echo-acknowledged
//! serial protocol the chip's controller speaks.
//!
//! ```no_run
//! use sp0256::cts256::{RuleTable, text_to_codes};
//! use sp0256::speaker::{SerialLink, Speaker, SpeakerOptions};
//!
//! let table = RuleTable::builtin()?;
//! let codes = text_to_codes(&table, &sp0256::normalize("Hello, world."))?;
//! let link = SerialLink::open("/dev/ttyACM0".as_ref(), 115_200)?;
//! Speaker::connect(link, SpeakerOptions::default())?.speak(&codes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub use cts256;

pub mod config;
pub use config::{
    Settings, load_settings, load_settings_from_path, load_settings_from_path_with_env,
    settings_path,
};
mod error;
pub use error::{Error, Result};
mod normalize;
pub use normalize::{normalize, normalize_lines};
pub mod speaker;
