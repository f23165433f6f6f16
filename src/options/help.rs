//! Help text layout.

/// Indentation and line width used when rendering option help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpLayout {
    /// Spaces before each option line, and again before its description.
    pub indent: usize,
    /// Maximum columns per line.
    pub line_width: usize,
}

impl Default for HelpLayout {
    fn default() -> Self {
        Self {
            indent: 2,
            line_width: 80,
        }
    }
}

/// Greedy word wrap. Every line starts with `indent` spaces and stays within
/// `width` columns unless a single word is longer than that.
pub fn wrap_text(text: &str, indent: usize, width: usize) -> String {
    let prefix = " ".repeat(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = format!("{}{}", prefix, word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = format!("{}{}", prefix, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
