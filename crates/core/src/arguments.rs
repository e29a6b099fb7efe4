// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line argument accumulation.
//!
//! Arguments are kept as typed tokens until they are rendered, so secrets can
//! be redacted from logs and switches keep their value quoting intact:
//!
//! ```text
//! Cover /TargetExecutable="/usr/bin/tests" /Output="/work/cov.xml"
//! ^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ switch + separator + quoted value
//! text
//! ```

use std::fmt;

/// Wrap `text` in double quotes unless it already is.
pub fn quote(text: &str) -> String {
    if is_quoted(text) {
        text.to_string()
    } else {
        format!("\"{}\"", text)
    }
}

/// Escape embedded double quotes as `\"`.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\\\"")
}

fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// A single command-line token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessArgument {
    /// Rendered verbatim.
    Text(String),
    /// Rendered wrapped in double quotes.
    Quoted(String),
    /// Rendered normally, redacted in [`ProcessArgument::render_safe`].
    Secret(Box<ProcessArgument>),
    /// `switch` + `separator` + `value`, e.g. `/Output="x"`.
    Switch { switch: String, separator: String, value: Box<ProcessArgument> },
}

impl ProcessArgument {
    pub fn render(&self) -> String {
        match self {
            ProcessArgument::Text(text) => text.clone(),
            ProcessArgument::Quoted(text) => quote(text),
            ProcessArgument::Secret(inner) => inner.render(),
            ProcessArgument::Switch { switch, separator, value } => {
                format!("{}{}{}", switch, separator, value.render())
            }
        }
    }

    pub fn is_secret(&self) -> bool {
        match self {
            ProcessArgument::Secret(_) => true,
            ProcessArgument::Switch { value, .. } => value.is_secret(),
            _ => false,
        }
    }

    /// Render with secrets replaced by `[REDACTED]`.
    pub fn render_safe(&self) -> String {
        match self {
            ProcessArgument::Secret(_) => "[REDACTED]".to_string(),
            ProcessArgument::Switch { switch, separator, value } => {
                format!("{}{}{}", switch, separator, value.render_safe())
            }
            other => other.render(),
        }
    }
}

impl fmt::Display for ProcessArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

/// Ordered list of argument tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessArguments {
    tokens: Vec<ProcessArgument>,
}

impl ProcessArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, argument: ProcessArgument) -> &mut Self {
        self.tokens.push(argument);
        self
    }

    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::Text(text.into()))
    }

    pub fn append_quoted(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::Quoted(text.into()))
    }

    pub fn append_secret(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(ProcessArgument::Secret(Box::new(ProcessArgument::Text(text.into()))))
    }

    /// Append `switch` + `separator` + `value`, with `value` rendered verbatim.
    pub fn append_switch(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push(ProcessArgument::Switch {
            switch: switch.into(),
            separator: separator.into(),
            value: Box::new(ProcessArgument::Text(value.into())),
        })
    }

    /// Append `switch` + `separator` + `"value"`.
    pub fn append_switch_quoted(
        &mut self,
        switch: impl Into<String>,
        separator: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push(ProcessArgument::Switch {
            switch: switch.into(),
            separator: separator.into(),
            value: Box::new(ProcessArgument::Quoted(value.into())),
        })
    }

    /// Copy every token of `other` onto the end, preserving order.
    pub fn extend(&mut self, other: ProcessArguments) -> &mut Self {
        self.tokens.extend(other.tokens);
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether any token (or switch value) is a secret.
    pub fn has_secrets(&self) -> bool {
        self.tokens.iter().any(ProcessArgument::is_secret)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessArgument> {
        self.tokens.iter()
    }

    /// Tokens joined by single spaces.
    pub fn render(&self) -> String {
        self.tokens.iter().map(ProcessArgument::render).collect::<Vec<_>>().join(" ")
    }

    pub fn render_safe(&self) -> String {
        self.tokens.iter().map(ProcessArgument::render_safe).collect::<Vec<_>>().join(" ")
    }

    /// Rendered tokens, one per entry.
    pub fn to_raw(&self) -> Vec<String> {
        self.tokens.iter().map(ProcessArgument::render).collect()
    }

    /// The argv a Windows-style command-line parser would produce for each token.
    pub fn to_argv(&self) -> Vec<String> {
        self.tokens.iter().map(|t| unquote_token(&t.render())).collect()
    }
}

impl From<&str> for ProcessArguments {
    fn from(text: &str) -> Self {
        let mut args = ProcessArguments::new();
        args.append(text);
        args
    }
}

impl From<String> for ProcessArguments {
    fn from(text: String) -> Self {
        let mut args = ProcessArguments::new();
        args.append(text);
        args
    }
}

impl<'a> IntoIterator for &'a ProcessArguments {
    type Item = &'a ProcessArgument;
    type IntoIter = std::slice::Iter<'a, ProcessArgument>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for ProcessArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

/// Strip quoting from one rendered token using the MSVC runtime rules:
/// `2n` backslashes before a quote become `n` and the quote toggles quoting;
/// `2n+1` backslashes before a quote become `n` plus a literal quote;
/// backslashes not followed by a quote are literal.
pub fn unquote_token(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut backslashes = 0usize;
    for ch in token.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                out.extend(std::iter::repeat('\\').take(backslashes / 2));
                if backslashes % 2 == 1 {
                    out.push('"');
                }
                backslashes = 0;
            }
            other => {
                out.extend(std::iter::repeat('\\').take(backslashes));
                backslashes = 0;
                out.push(other);
            }
        }
    }
    out.extend(std::iter::repeat('\\').take(backslashes));
    out
}

#[cfg(test)]
#[path = "arguments_tests.rs"]
mod tests;
