//! Document tree consumed by the renderer
//!
//!     The tree is produced upstream by a markup parser; this crate never parses source
//!     markup itself. Nodes arrive either built in code (see the constructors on [Node])
//!     or as JSON in the internally tagged form:
//!
//!         {"type": "paragraph", "children": [{"type": "text", "value": "hello"}]}
//!
//!     The grammar evolves independently of the renderer, so any kind this crate does not
//!     know about is kept as [Node::Unknown] instead of failing to load.

pub mod dump;
pub mod node;

pub use dump::dump;
pub use node::Node;
