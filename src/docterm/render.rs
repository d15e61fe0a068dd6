//! Render model: tokens, token lines, blocks and the visitor that builds them
//!
//!     The visitor turns a document tree into a forest of [Renderable]s:
//!
//!         Node tree --RenderVisitor--> Block("root")
//!                                        ├── TokenLine [Token, Token, ...]
//!                                        ├── Block("list")
//!                                        │     └── Indent [TokenLine, ...]
//!                                        └── ...
//!
//!     Nothing here knows about terminals. Width only comes into play when a consumer
//!     wraps a [TokenLine] (see [wrap]) while laying out the forest.

pub mod block;
pub mod partition;
pub mod token;
pub mod token_line;
pub mod visitor;

pub use block::{Block, Indent, Panel, Renderable};
pub use partition::{partition, Partition};
pub use token::{normalize_whitespace, StyleTag, Token};
pub use token_line::{wrap, Paint, TokenLine};
pub use visitor::RenderVisitor;
