//! Program option handling for the audio host.
//!
//! Options live in a fixed-size [`OptionRegistry`], addressed by index. Both
//! input forms go through the same parse loop:
//!
//! ```text
//! argv / config file → Tokens → match (short | long) → arity → typed value
//! ```
//!
//! Parsing mutates the registered entries in place. A failure stops the loop
//! but keeps whatever was matched before it.

mod catalog;
mod entry;
mod error;
mod help;
mod registry;
mod store;
mod token;

pub use catalog::{app_options, AppOption};
pub use entry::{ArgumentArity, OptionEntry, OptionValue, ValueKind};
pub use error::OptionsError;
pub use help::{wrap_text, HelpLayout};
pub use registry::{Case, OptionRegistry};
pub use store::NUMBER_SENTINEL;
pub use token::{classify, TokenShape, Tokens};
