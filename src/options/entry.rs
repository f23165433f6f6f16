//! A single program option: static metadata plus parse state.

use std::io::{self, Write};

use crate::options::error::OptionsError;
use crate::options::help::{wrap_text, HelpLayout};

/// Whether an option takes the token that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentArity {
    /// Flag only (e.g., --quiet).
    None,
    /// Takes the next token if it is not itself an option (e.g., --help [option]).
    Optional,
    /// Next token must exist and must not look like an option (e.g., --input <file>).
    Required,
}

/// How an option's value is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Number,
    List,
}

/// Stored value of an option, tagged by its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Number(f64),
    List(Vec<String>),
}

impl OptionValue {
    /// Empty value for a kind: `""`, `0.0` or an empty list.
    pub fn empty(kind: ValueKind) -> Self {
        match kind {
            ValueKind::String => OptionValue::String(String::new()),
            ValueKind::Number => OptionValue::Number(0.0),
            ValueKind::List => OptionValue::List(Vec::new()),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            OptionValue::String(_) => ValueKind::String,
            OptionValue::Number(_) => ValueKind::Number,
            OptionValue::List(_) => ValueKind::List,
        }
    }
}

/// One registered option.
#[derive(Debug, Clone)]
pub struct OptionEntry {
    index: usize,
    name: String,
    help: String,
    default_display: Option<i32>,
    has_short_form: bool,
    arity: ArgumentArity,
    pub(crate) enabled: bool,
    pub(crate) raw_argument: String,
    pub(crate) value: OptionValue,
}

impl OptionEntry {
    pub fn new(
        index: usize,
        name: &str,
        help: &str,
        has_short_form: bool,
        kind: ValueKind,
        arity: ArgumentArity,
    ) -> Self {
        Self {
            index,
            name: name.to_string(),
            help: help.to_string(),
            default_display: None,
            has_short_form,
            arity,
            enabled: false,
            raw_argument: String::new(),
            value: OptionValue::empty(kind),
        }
    }

    /// Default shown in help output. Purely presentational.
    pub fn with_default_display(mut self, value: i32) -> Self {
        self.default_display = Some(value);
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn default_display(&self) -> Option<i32> {
        self.default_display
    }

    pub fn has_short_form(&self) -> bool {
        self.has_short_form
    }

    /// The single-dash alias, i.e. the first character of the name.
    pub fn short_form(&self) -> Option<char> {
        if self.has_short_form {
            self.name.chars().next()
        } else {
            None
        }
    }

    pub fn arity(&self) -> ArgumentArity {
        self.arity
    }

    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// True once the option has been matched during parsing.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last argument text captured for this option, empty if none.
    pub fn raw_argument(&self) -> &str {
        &self.raw_argument
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    /// Store an argument according to the declared kind.
    ///
    /// Strings are replaced, numbers parsed, list items appended. On error
    /// the entry is left unchanged.
    pub(crate) fn capture_argument(&mut self, argument: &str) -> Result<(), OptionsError> {
        match &mut self.value {
            OptionValue::String(s) => {
                *s = argument.to_string();
            }
            OptionValue::Number(n) => {
                *n = argument
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| OptionsError::InvalidNumber {
                        option: self.name.clone(),
                        value: argument.to_string(),
                    })?;
            }
            OptionValue::List(items) => items.push(argument.to_string()),
        }
        self.raw_argument = argument.to_string();
        Ok(())
    }

    /// Write this option's help line, and with `with_full_help` the wrapped
    /// description beneath it.
    pub fn render_help<W: Write>(
        &self,
        out: &mut W,
        with_full_help: bool,
        layout: &HelpLayout,
        initial_indent: usize,
    ) -> io::Result<()> {
        write!(out, "{:width$}--{}", "", self.name, width = initial_indent)?;

        if let Some(short) = self.short_form() {
            write!(out, " (or -{})", short)?;
        }

        match self.arity {
            ArgumentArity::Required => write!(out, " <argument>")?,
            ArgumentArity::Optional => write!(out, " [argument]")?,
            ArgumentArity::None => {}
        }

        if let Some(default) = self.default_display {
            write!(out, ", default value: {}", default)?;
        }

        if with_full_help {
            let wrapped = wrap_text(&self.help, initial_indent + layout.indent, layout.line_width);
            write!(out, "\n{}\n\n", wrapped)
        } else {
            writeln!(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(entry: &OptionEntry, full: bool) -> String {
        let mut out = Vec::new();
        entry
            .render_help(&mut out, full, &HelpLayout::default(), 2)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn short_form_is_first_character() {
        let entry = OptionEntry::new(0, "tempo", "", true, ValueKind::Number, ArgumentArity::Required);
        assert_eq!(entry.short_form(), Some('t'));

        let entry = OptionEntry::new(0, "tempo", "", false, ValueKind::Number, ArgumentArity::Required);
        assert_eq!(entry.short_form(), None);
    }

    #[test]
    fn capture_replaces_string_and_appends_list() {
        let mut s = OptionEntry::new(0, "input", "", true, ValueKind::String, ArgumentArity::Required);
        s.capture_argument("a.wav").unwrap();
        s.capture_argument("b.wav").unwrap();
        assert_eq!(s.value(), &OptionValue::String("b.wav".into()));
        assert_eq!(s.raw_argument(), "b.wav");

        let mut l = OptionEntry::new(0, "plugin", "", true, ValueKind::List, ArgumentArity::Required);
        l.capture_argument("again").unwrap();
        l.capture_argument("vst2").unwrap();
        assert_eq!(l.value(), &OptionValue::List(vec!["again".into(), "vst2".into()]));
    }

    #[test]
    fn capture_rejects_non_numeric_for_number() {
        let mut n = OptionEntry::new(0, "tempo", "", true, ValueKind::Number, ArgumentArity::Required);
        let err = n.capture_argument("fast").unwrap_err();
        assert!(matches!(err, OptionsError::InvalidNumber { .. }));
        assert_eq!(n.value(), &OptionValue::Number(0.0));
        assert_eq!(n.raw_argument(), "");
    }

    #[test]
    fn help_line_shows_forms_arity_and_default() {
        let entry = OptionEntry::new(0, "sample-rate", "Rate", true, ValueKind::Number, ArgumentArity::Required)
            .with_default_display(44100);
        assert_eq!(
            render(&entry, false),
            "  --sample-rate (or -s) <argument>, default value: 44100\n"
        );

        let entry = OptionEntry::new(0, "help", "Show help", false, ValueKind::String, ArgumentArity::Optional);
        assert_eq!(render(&entry, false), "  --help [argument]\n");
    }

    #[test]
    fn full_help_appends_wrapped_description() {
        let entry = OptionEntry::new(0, "quiet", "Only log errors", true, ValueKind::String, ArgumentArity::None);
        assert_eq!(render(&entry, true), "  --quiet (or -q)\n    Only log errors\n\n");
    }
}
