//! Styled text tokens
//!
//!     A token is the atomic unit the wrapping algorithm works on: it is never split, and
//!     its width is its character count. Glyph width (double-width or zero-width
//!     characters) is not taken into account.
//!
//!     Free text is normalized when a token is built: every run of whitespace, newlines
//!     included, collapses to a single space. Whitespace-only tokens are left as they are,
//!     so a standalone space keeps its width of one and a newline token stays a hard break.

use std::fmt;

/// Semantic style of a token. Plain text carries no tag.
///
/// The backend decides what each tag looks like (see
/// [Theme](crate::docterm::layout::Theme)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTag {
    Directive,
    InlineCode,
    /// Fallback dump of a node kind without a rendering rule.
    Unimplemented,
    Parameter,
    TypeAnnotation,
    Signature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    value: String,
    style: Option<StyleTag>,
}

impl Token {
    pub fn new(value: impl Into<String>, style: Option<StyleTag>) -> Self {
        let value = value.into();
        let value = if value.chars().all(char::is_whitespace) {
            value
        } else {
            normalize_whitespace(&value)
        };
        Token { value, style }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, None)
    }

    pub fn styled(value: impl Into<String>, style: StyleTag) -> Self {
        Self::new(value, Some(style))
    }

    /// A visibly marked stand-in for content the renderer has no rule for.
    pub fn unimplemented(dump: impl Into<String>) -> Self {
        Self::new(dump, Some(StyleTag::Unimplemented))
    }

    /// A hard line break.
    pub fn newline() -> Self {
        Self::plain("\n")
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn style(&self) -> Option<StyleTag> {
        self.style
    }

    /// Display width in columns (character count).
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// A single space, the only token the wrapper may drop at a line end.
    pub fn is_space(&self) -> bool {
        self.value == " "
    }

    /// Made only of newlines; each one forces a line break.
    pub fn is_hard_break(&self) -> bool {
        !self.value.is_empty() && self.value.chars().all(|c| c == '\n')
    }

    pub fn is_unimplemented(&self) -> bool {
        self.style == Some(StyleTag::Unimplemented)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Collapse each run of whitespace into one space.
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                result.push(' ');
            }
            in_whitespace = true;
        } else {
            result.push(c);
            in_whitespace = false;
        }
    }
    result
}
