//! Token lines and the wrapping algorithm
//!
//!     A [TokenLine] is one paragraph-equivalent unit: an ordered run of tokens that the
//!     backend flows into as many terminal lines as the width requires.
//!
//! Wrapping
//!
//!     Wrapping is greedy and single pass. Widths accumulate token by token; once the
//!     running width reaches or exceeds the target:
//!
//!         - an overflowing single space is dropped and the line is broken, so a wrapped
//!           line never starts with whitespace;
//!         - any other token moves to a fresh line and the running width restarts at its
//!           length. Tokens are never dropped or split, so a token wider than the target
//!           sits alone on its own line.
//!
//!     A break is only emitted when the current line already holds something. An
//!     oversized first token therefore does not leave an empty line above it, and two
//!     overflowing spaces in a row cannot produce two breaks.
//!
//!     Tokens made only of newlines are hard breaks: one break per newline, width reset.

use super::block::Renderable;
use super::token::Token;
use crate::docterm::error::RenderError;
use std::num::NonZeroUsize;
use std::ops::Add;

/// One instruction for the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint<'a> {
    Token(&'a Token),
    LineBreak,
}

/// Wrap `tokens` to `max_width` columns.
pub fn wrap<'a, I>(tokens: I, max_width: NonZeroUsize) -> Vec<Paint<'a>>
where
    I: IntoIterator<Item = &'a Token>,
{
    let max_width = max_width.get();
    let mut paints = Vec::new();
    let mut width = 0;

    for token in tokens {
        if token.is_hard_break() {
            paints.extend(token.value().chars().map(|_| Paint::LineBreak));
            width = 0;
            continue;
        }

        let len = token.len();
        if width + len < max_width {
            paints.push(Paint::Token(token));
            width += len;
            continue;
        }

        if width > 0 {
            paints.push(Paint::LineBreak);
        }
        if token.is_space() {
            width = 0;
        } else {
            paints.push(Paint::Token(token));
            width = len;
        }
    }

    paints
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenLine {
    children: Vec<Token>,
}

impl TokenLine {
    pub fn new(children: Vec<Token>) -> Self {
        TokenLine { children }
    }

    /// The blank line that terminates paragraphs and headings.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Build a line out of visitor output, rejecting anything that is not a token.
    ///
    /// `kind` names the node being rendered, for the error message.
    pub fn try_from_renderables(
        kind: &str,
        items: Vec<Renderable>,
    ) -> Result<Self, RenderError> {
        let mut children = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Renderable::Token(token) => children.push(token),
                other => {
                    return Err(RenderError::contract(
                        kind,
                        format!("expected only inline tokens, found {}", other.describe()),
                    ))
                }
            }
        }
        Ok(TokenLine { children })
    }

    pub fn children(&self) -> &[Token] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Token> {
        self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// No visible content: empty, or hard breaks only.
    pub fn is_blank(&self) -> bool {
        self.children.iter().all(Token::is_hard_break)
    }

    /// Total width of the unwrapped line.
    pub fn width(&self) -> usize {
        self.children.iter().map(Token::len).sum()
    }

    /// Concatenated token values.
    pub fn text(&self) -> String {
        self.children.iter().map(Token::value).collect()
    }

    /// New line holding this line's tokens followed by `other`'s.
    pub fn concat(&self, other: &TokenLine) -> TokenLine {
        let mut children = self.children.clone();
        children.extend(other.children.iter().cloned());
        TokenLine { children }
    }

    pub fn wrap(&self, max_width: NonZeroUsize) -> Vec<Paint<'_>> {
        wrap(&self.children, max_width)
    }
}

impl Add for TokenLine {
    type Output = TokenLine;

    fn add(mut self, rhs: TokenLine) -> TokenLine {
        self.children.extend(rhs.children);
        self
    }
}

impl FromIterator<Token> for TokenLine {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        TokenLine {
            children: iter.into_iter().collect(),
        }
    }
}
