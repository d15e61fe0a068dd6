//! Structural render items
//!
//! The visitor output is a strict tree of [Renderable]s. Every item has one owner and
//! nothing is mutated once the visitor hands it back.

use super::token::Token;
use super::token_line::TokenLine;

/// Anything the visitor can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderable {
    /// A bare inline token, not yet grouped into a line.
    Token(Token),
    Line(TokenLine),
    Block(Block),
    Indent(Indent),
    Panel(Panel),
}

impl Renderable {
    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Renderable::Token(token) => format!("token {:?}", token.value()),
            Renderable::Line(line) => format!("token line of {} tokens", line.len()),
            Renderable::Block(block) => format!("block `{}`", block.name()),
            Renderable::Indent(indent) => format!("indent of {} items", indent.children.len()),
            Renderable::Panel(panel) => format!("panel of {} items", panel.children.len()),
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Renderable::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&TokenLine> {
        match self {
            Renderable::Line(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Renderable::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Nested items for the grouping variants.
    pub fn children(&self) -> &[Renderable] {
        match self {
            Renderable::Block(block) => &block.children,
            Renderable::Indent(indent) => &indent.children,
            Renderable::Panel(panel) => &panel.children,
            Renderable::Token(_) | Renderable::Line(_) => &[],
        }
    }
}

impl From<Token> for Renderable {
    fn from(token: Token) -> Self {
        Renderable::Token(token)
    }
}

impl From<TokenLine> for Renderable {
    fn from(line: TokenLine) -> Self {
        Renderable::Line(line)
    }
}

impl From<Block> for Renderable {
    fn from(block: Block) -> Self {
        Renderable::Block(block)
    }
}

impl From<Indent> for Renderable {
    fn from(indent: Indent) -> Self {
        Renderable::Indent(indent)
    }
}

impl From<Panel> for Renderable {
    fn from(panel: Panel) -> Self {
        Renderable::Panel(panel)
    }
}

/// A named structural unit: the root document, a list, a definition list...
///
/// The name is a diagnostic tag only; layout never branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    name: String,
    children: Vec<Renderable>,
}

impl Block {
    pub fn new(name: impl Into<String>, children: Vec<Renderable>) -> Self {
        Block {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Renderable] {
        &self.children
    }

    pub fn into_children(self) -> Vec<Renderable> {
        self.children
    }
}

/// One level of nesting: the children are laid out [Indent::WIDTH] columns further right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indent {
    children: Vec<Renderable>,
}

impl Indent {
    pub const WIDTH: usize = 2;

    pub fn new(children: Vec<Renderable>) -> Self {
        Indent { children }
    }

    pub fn children(&self) -> &[Renderable] {
        &self.children
    }
}

/// An emphasized group, drawn with a gutter on its left side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    children: Vec<Renderable>,
}

impl Panel {
    /// Columns taken by the gutter.
    pub const GUTTER: usize = 2;

    pub fn new(children: Vec<Renderable>) -> Self {
        Panel { children }
    }

    pub fn children(&self) -> &[Renderable] {
        &self.children
    }
}
