//! Option registry: fixed-size table of options plus the parse loop.

use std::io::{self, Write};
use std::path::Path;

use crate::options::entry::{ArgumentArity, OptionEntry};
use crate::options::error::OptionsError;
use crate::options::help::HelpLayout;
use crate::options::token::{classify, TokenShape, Tokens};

/// Name comparison mode for [`OptionRegistry::find_by_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Case {
    Sensitive,
    #[default]
    Insensitive,
}

impl Case {
    fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Case::Sensitive => a == b,
            Case::Insensitive => a == b || a.to_lowercase() == b.to_lowercase(),
        }
    }
}

/// Fixed-capacity table of options addressed by index.
#[derive(Debug, Clone)]
pub struct OptionRegistry {
    pub(crate) slots: Vec<Option<OptionEntry>>,
}

impl OptionRegistry {
    /// Create a table with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `entry` at its own index. An existing entry at that index is
    /// replaced. Out-of-range indices leave the table untouched.
    pub fn register(&mut self, entry: OptionEntry) -> Result<(), OptionsError> {
        let capacity = self.capacity();
        match self.slots.get_mut(entry.index()) {
            Some(slot) => {
                *slot = Some(entry);
                Ok(())
            }
            None => Err(OptionsError::IndexOutOfRange {
                index: entry.index(),
                capacity,
            }),
        }
    }

    pub fn entry(&self, index: usize) -> Option<&OptionEntry> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut OptionEntry> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Registered entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = &OptionEntry> {
        self.slots.iter().flatten()
    }

    pub fn is_enabled(&self, index: usize) -> bool {
        self.entry(index).is_some_and(OptionEntry::is_enabled)
    }

    /// Look up an option from a command-line token (`-x` or `--name`).
    ///
    /// Long names compare case-sensitively. First match wins.
    pub fn find_by_token(&self, token: &str) -> Option<&OptionEntry> {
        let shape = classify(token);
        self.entries().find(|e| matches_token(e, shape, token))
    }

    fn find_by_token_mut(&mut self, token: &str) -> Option<&mut OptionEntry> {
        let shape = classify(token);
        self.slots
            .iter_mut()
            .flatten()
            .find(|e| matches_token(e, shape, token))
    }

    /// Look up an option by its bare name, without dashes.
    pub fn find_by_name(&self, name: &str, case: Case) -> Option<&OptionEntry> {
        self.entries().find(|e| case.matches(e.name(), name))
    }

    /// Run the parse loop over `tokens`.
    ///
    /// Stops at the first failure. Entries matched before the failure stay
    /// enabled with their captured arguments.
    pub fn parse(&mut self, tokens: &Tokens) -> Result<(), OptionsError> {
        let tokens = tokens.parsed();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let token = &tokens[cursor];
            let next = tokens.get(cursor + 1).map(String::as_str);
            let Some(entry) = self.find_by_token_mut(token) else {
                tracing::error!("Invalid option '{}'", token);
                return Err(OptionsError::UnknownOption {
                    token: token.clone(),
                });
            };

            match resolve_argument(entry, next) {
                Ok(consumed) => {
                    entry.enabled = true;
                    tracing::debug!(
                        option = entry.name(),
                        argument = entry.raw_argument(),
                        "Matched option"
                    );
                    if consumed {
                        cursor += 1;
                    }
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    return Err(e);
                }
            }
            cursor += 1;
        }

        Ok(())
    }

    /// Parse a process argument vector; token 0 is skipped.
    pub fn parse_args<I, S>(&mut self, args: I) -> Result<(), OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parse(&Tokens::from_args(args))
    }

    /// Parse a config file holding one token per line.
    pub fn parse_config_file(&mut self, path: &Path) -> Result<(), OptionsError> {
        let tokens = Tokens::from_config_file(path).inspect_err(|e| {
            tracing::error!("{}", e);
        })?;
        tracing::debug!(path = %path.display(), tokens = tokens.parsed().len(), "Parsing config file");
        self.parse(&tokens)
    }

    /// Write help for every registered option in index order.
    pub fn print_help<W: Write>(
        &self,
        out: &mut W,
        with_full_help: bool,
        layout: &HelpLayout,
    ) -> io::Result<()> {
        for entry in self.entries() {
            entry.render_help(out, with_full_help, layout, layout.indent)?;
        }
        Ok(())
    }

    /// Write full help for the option called `name` (any case).
    pub fn print_help_for<W: Write>(
        &self,
        out: &mut W,
        name: &str,
        layout: &HelpLayout,
    ) -> Result<(), OptionsError> {
        let Some(entry) = self.find_by_name(name, Case::Insensitive) else {
            tracing::error!(
                "Can't find help for option '{}'. Try running with --help to see all options",
                name
            );
            return Err(OptionsError::UnknownOption {
                token: name.to_string(),
            });
        };

        entry
            .render_help(out, true, layout, 0)
            .map_err(|e| OptionsError::HelpOutput { source: e })
    }
}

fn matches_token(entry: &OptionEntry, shape: TokenShape, token: &str) -> bool {
    match shape {
        TokenShape::Short => entry
            .short_form()
            .is_some_and(|c| token.chars().nth(1) == Some(c)),
        TokenShape::Long => entry.name() == &token[2..],
        TokenShape::Plain => false,
    }
}

/// Apply the entry's arity to the following token.
///
/// Returns whether `next` was consumed as the entry's argument.
fn resolve_argument(entry: &mut OptionEntry, next: Option<&str>) -> Result<bool, OptionsError> {
    match entry.arity() {
        ArgumentArity::None => Ok(false),
        ArgumentArity::Optional => match next {
            Some(argument) if !classify(argument).is_option() => {
                // an unusable optional argument is dropped, never fatal
                if let Err(e) = entry.capture_argument(argument) {
                    tracing::warn!("{}, ignoring it", e);
                }
                Ok(true)
            }
            _ => Ok(false),
        },
        ArgumentArity::Required => match next {
            None => Err(OptionsError::MissingArgument {
                option: entry.name().to_string(),
            }),
            Some(token) if classify(token).is_option() => Err(OptionsError::InvalidArgument {
                option: entry.name().to_string(),
                token: token.to_string(),
            }),
            Some(argument) => {
                entry.capture_argument(argument)?;
                Ok(true)
            }
        },
    }
}
