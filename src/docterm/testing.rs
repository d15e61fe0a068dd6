//! Testing utilities for render forest assertions
//!
//! Checking visitor output by hand means matching through several layers of enums for
//! every item. The fluent API here walks the forest instead and reports the path of
//! the failing item:
//!
//! ```rust-example
//! use crate::docterm::testing::assert_render;
//!
//! assert_render(&items)
//!     .item_count(1)
//!     .item(0, |item| {
//!         item.assert_block()
//!             .name("list")
//!             .item(0, |indent| {
//!                 indent.assert_indent().item(0, |line| {
//!                     line.assert_line().text("- first");
//!                 });
//!             });
//!     });
//! ```
//!
//! Every assertion panics on mismatch, so it is only meant for tests.

use crate::docterm::render::{Block, Renderable, StyleTag, Token, TokenLine};

/// Start asserting over a sequence of render items.
pub fn assert_render(items: &[Renderable]) -> ItemsAssertion<'_> {
    ItemsAssertion {
        items,
        context: "items".to_string(),
    }
}

/// Assertions over an ordered sequence of items (visitor output, block or group children).
pub struct ItemsAssertion<'a> {
    items: &'a [Renderable],
    context: String,
}

impl<'a> ItemsAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.items.len(),
            expected,
            "{}: expected {} items, found {}: {:#?}",
            self.context,
            expected,
            self.items.len(),
            self.items
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        let item = self.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: no item at index {} ({} items)",
                self.context,
                index,
                self.items.len()
            )
        });
        assertion(ItemAssertion {
            item,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Token values of a sequence made only of bare tokens.
    pub fn token_values(self, expected: &[&str]) -> Self {
        let values: Vec<&str> = self
            .items
            .iter()
            .map(|item| match item {
                Renderable::Token(token) => token.value(),
                other => panic!("{}: expected only tokens, found {}", self.context, other.describe()),
            })
            .collect();
        assert_eq!(values, expected, "{}: token values differ", self.context);
        self
    }
}

/// Assertions on a single item; pick the expected variant first.
pub struct ItemAssertion<'a> {
    item: &'a Renderable,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    pub fn assert_token(self) -> TokenAssertion<'a> {
        match self.item {
            Renderable::Token(token) => TokenAssertion {
                token,
                context: self.context,
            },
            other => panic!("{}: expected token, found {}", self.context, other.describe()),
        }
    }

    pub fn assert_line(self) -> LineAssertion<'a> {
        match self.item {
            Renderable::Line(line) => LineAssertion {
                line,
                context: self.context,
            },
            other => panic!("{}: expected token line, found {}", self.context, other.describe()),
        }
    }

    pub fn assert_block(self) -> BlockAssertion<'a> {
        match self.item {
            Renderable::Block(block) => BlockAssertion {
                block,
                context: self.context,
            },
            other => panic!("{}: expected block, found {}", self.context, other.describe()),
        }
    }

    /// Children of an indent group.
    pub fn assert_indent(self) -> ItemsAssertion<'a> {
        match self.item {
            Renderable::Indent(indent) => ItemsAssertion {
                items: indent.children(),
                context: format!("{}(indent)", self.context),
            },
            other => panic!("{}: expected indent, found {}", self.context, other.describe()),
        }
    }

    /// Children of a panel group.
    pub fn assert_panel(self) -> ItemsAssertion<'a> {
        match self.item {
            Renderable::Panel(panel) => ItemsAssertion {
                items: panel.children(),
                context: format!("{}(panel)", self.context),
            },
            other => panic!("{}: expected panel, found {}", self.context, other.describe()),
        }
    }
}

pub struct TokenAssertion<'a> {
    token: &'a Token,
    context: String,
}

impl TokenAssertion<'_> {
    pub fn value(self, expected: &str) -> Self {
        assert_eq!(self.token.value(), expected, "{}: token value", self.context);
        self
    }

    pub fn value_contains(self, needle: &str) -> Self {
        assert!(
            self.token.value().contains(needle),
            "{}: token {:?} does not contain {:?}",
            self.context,
            self.token.value(),
            needle
        );
        self
    }

    pub fn style(self, expected: Option<StyleTag>) -> Self {
        assert_eq!(self.token.style(), expected, "{}: token style", self.context);
        self
    }

    pub fn unimplemented(self) -> Self {
        self.style(Some(StyleTag::Unimplemented))
    }
}

pub struct LineAssertion<'a> {
    line: &'a TokenLine,
    context: String,
}

impl LineAssertion<'_> {
    /// Concatenated text of the line.
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.line.text(), expected, "{}: line text", self.context);
        self
    }

    /// Token values, in order.
    pub fn values(self, expected: &[&str]) -> Self {
        let values: Vec<&str> = self.line.children().iter().map(Token::value).collect();
        assert_eq!(values, expected, "{}: line tokens", self.context);
        self
    }

    pub fn blank(self) -> Self {
        assert!(
            self.line.is_blank(),
            "{}: expected blank line, found {:?}",
            self.context,
            self.line.text()
        );
        self
    }

    /// Every token carries `style`.
    pub fn all_styled(self, style: Option<StyleTag>) -> Self {
        for (index, token) in self.line.children().iter().enumerate() {
            assert_eq!(
                token.style(),
                style,
                "{}: token {} ({:?})",
                self.context,
                index,
                token.value()
            );
        }
        self
    }

    pub fn token<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TokenAssertion<'_>),
    {
        let token = self.line.children().get(index).unwrap_or_else(|| {
            panic!("{}: no token at index {}", self.context, index)
        });
        assertion(TokenAssertion {
            token,
            context: format!("{}.token[{}]", self.context, index),
        });
        self
    }
}

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.block.name(), expected, "{}: block name", self.context);
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        self.children().item_count(expected);
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        self.children().item(index, assertion);
        self
    }

    fn children(&self) -> ItemsAssertion<'a> {
        ItemsAssertion {
            items: self.block.children(),
            context: format!("{}({})", self.context, self.block.name()),
        }
    }
}
