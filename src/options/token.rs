//! Token sources: the process argument vector and config-file lines.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::options::error::OptionsError;

/// How a single token reads to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// `-x`: a dash and exactly one character (`--` included).
    Short,
    /// `--name`: two dashes and at least one more character.
    Long,
    /// Anything else, including `-` and `-abc`.
    Plain,
}

impl TokenShape {
    pub fn is_option(self) -> bool {
        !matches!(self, TokenShape::Plain)
    }
}

pub fn classify(token: &str) -> TokenShape {
    let mut chars = token.chars();
    if chars.next() != Some('-') {
        return TokenShape::Plain;
    }
    let rest = chars.as_str();
    match rest.chars().count() {
        1 => TokenShape::Short,
        n if n > 1 && rest.starts_with('-') => TokenShape::Long,
        _ => TokenShape::Plain,
    }
}

/// A token sequence ready for the parse loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    items: Vec<String>,
    start: usize,
}

impl Tokens {
    /// Process arguments. Token 0 is the program name and is not parsed.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: args.into_iter().map(Into::into).collect(),
            start: 1,
        }
    }

    /// Config-file content: one trimmed token per non-blank line, all parsed.
    pub fn from_lines<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut items = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let token = line.trim();
            if !token.is_empty() {
                items.push(token.to_string());
            }
        }
        Ok(Self { items, start: 0 })
    }

    pub fn from_config_file(path: &Path) -> Result<Self, OptionsError> {
        if !path.is_file() {
            return Err(OptionsError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| OptionsError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_lines(content.as_bytes()).map_err(|e| OptionsError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Tokens the parse loop will visit.
    pub fn parsed(&self) -> &[String] {
        self.items.get(self.start..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.parsed().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_short_and_long() {
        assert_eq!(classify("-t"), TokenShape::Short);
        assert_eq!(classify("--test"), TokenShape::Long);
        assert_eq!(classify("--t"), TokenShape::Long);
    }

    #[test]
    fn classify_plain_lookalikes() {
        assert_eq!(classify("-"), TokenShape::Plain);
        assert_eq!(classify("-ab"), TokenShape::Plain);
        assert_eq!(classify("-1.5"), TokenShape::Plain);
        assert_eq!(classify("input.wav"), TokenShape::Plain);
        assert_eq!(classify(""), TokenShape::Plain);
    }

    #[test]
    fn classify_two_characters_is_short() {
        assert_eq!(classify("-1"), TokenShape::Short);
        assert_eq!(classify("--"), TokenShape::Short);
    }

    #[test]
    fn args_skip_program_name() {
        let tokens = Tokens::from_args(["exe", "-t", "1"]);
        assert_eq!(tokens.parsed(), &["-t".to_string(), "1".to_string()]);

        assert!(Tokens::from_args(Vec::<String>::new()).is_empty());
        assert!(Tokens::from_args(["exe"]).is_empty());
    }

    #[test]
    fn lines_are_trimmed_and_blank_lines_dropped() {
        let tokens = Tokens::from_lines("--test\n\n  -o \nfoo bar\n".as_bytes()).unwrap();
        assert_eq!(
            tokens.parsed(),
            &["--test".to_string(), "-o".to_string(), "foo bar".to_string()]
        );
    }
}
