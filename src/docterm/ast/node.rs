//! Node element
//!
//! A single closed enum covers every kind of node the renderer has a rule for.
//! The last variant, [Node::Unknown], holds any other kind verbatim as JSON.
//!
//! Deserialization reads the `type` tag first. A known tag is deserialized strictly, so
//! a missing or mistyped field is an error; only an unrecognized tag becomes
//! [Node::Unknown].

use crate::docterm::error::RenderError;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Tags with a dedicated variant, as they appear in the JSON form.
pub const KNOWN_KINDS: &[&str] = &[
    "root",
    "paragraph",
    "heading",
    "text",
    "emphasis",
    "strong",
    "inline_code",
    "directive",
    "list",
    "list_item",
    "definition_list",
    "definition_list_item",
    "admonition",
    "admonition_title",
    "parameters",
    "parameter",
    "link",
    "block_quote",
    "math",
    "field_list",
    "code",
    "signature",
];

/// A node of the parsed document tree.
// `remote = "Self"` turns the derives into inherent `Node::serialize`/`Node::deserialize`
// functions; the trait impls below wrap them to route `Unknown` by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Document root.
    Root { children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    Heading {
        #[serde(default)]
        depth: u8,
        children: Vec<Node>,
    },
    /// Plain text run.
    Text { value: String },
    Emphasis { children: Vec<Node> },
    Strong { children: Vec<Node> },
    InlineCode { value: String },
    /// Role/domain markup such as `:py:func:`foo``.
    Directive {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        domain: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        role: Option<String>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        children: Vec<Node>,
    },
    ListItem { children: Vec<Node> },
    DefinitionList { children: Vec<Node> },
    /// A term (`dt`) and its definition body (`dd`).
    DefinitionListItem {
        dt: Box<Node>,
        #[serde(default)]
        dd: Vec<Node>,
    },
    /// First child is expected to be an [Node::AdmonitionTitle].
    Admonition { children: Vec<Node> },
    AdmonitionTitle { children: Vec<Node> },
    Parameters { children: Vec<Node> },
    /// One entry of a parameters section: `name : type` and its description.
    Parameter {
        param: String,
        type_: String,
        #[serde(default)]
        desc: Vec<Node>,
    },
    Link {
        #[serde(default)]
        url: String,
        children: Vec<Node>,
    },
    BlockQuote { children: Vec<Node> },
    Math { value: String },
    FieldList {
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Code block.
    Code {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    /// Object signature followed by its contents.
    Signature {
        value: String,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Any node kind without a variant above, kept as raw JSON.
    #[serde(skip)]
    Unknown(Value),
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Unknown(value) => value.serialize(serializer),
            known => Node::serialize(known, serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = match value.get("type").and_then(Value::as_str) {
            Some(kind) => kind.to_string(),
            None => return Err(de::Error::custom("node without a string `type` tag")),
        };
        if !KNOWN_KINDS.contains(&kind.as_str()) {
            return Ok(Node::Unknown(value));
        }
        Node::deserialize(value)
            .map_err(|err| de::Error::custom(format!("malformed `{kind}` node: {err}")))
    }
}


impl Node {
    /// Parse a document tree from its JSON form.
    ///
    /// Text that is not JSON is a [RenderError::Json]. Well-formed JSON that does not
    /// describe a valid tree (a known kind with a missing or mistyped field, a node
    /// without a tag) is a contract violation.
    pub fn from_json(source: &str) -> Result<Node, RenderError> {
        let value: Value = serde_json::from_str(source)?;
        Node::from_value(value)
    }

    /// Same as [Node::from_json], from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Node, RenderError> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("document")
            .to_string();
        serde_json::from_value::<Node>(value)
            .map_err(|err| RenderError::contract(kind, err.to_string()))
    }

    /// The kind tag, as it appears in the `type` field of the JSON form.
    pub fn kind(&self) -> &str {
        match self {
            Node::Root { .. } => "root",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Text { .. } => "text",
            Node::Emphasis { .. } => "emphasis",
            Node::Strong { .. } => "strong",
            Node::InlineCode { .. } => "inline_code",
            Node::Directive { .. } => "directive",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "list_item",
            Node::DefinitionList { .. } => "definition_list",
            Node::DefinitionListItem { .. } => "definition_list_item",
            Node::Admonition { .. } => "admonition",
            Node::AdmonitionTitle { .. } => "admonition_title",
            Node::Parameters { .. } => "parameters",
            Node::Parameter { .. } => "parameter",
            Node::Link { .. } => "link",
            Node::BlockQuote { .. } => "block_quote",
            Node::Math { .. } => "math",
            Node::FieldList { .. } => "field_list",
            Node::Code { .. } => "code",
            Node::Signature { .. } => "signature",
            Node::Unknown(value) => value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }

    /// Ordered children for container kinds, empty for leaves.
    ///
    /// Definition items and parameters keep their parts in named fields (`dt`/`dd`,
    /// `desc`) and report no children here.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Emphasis { children }
            | Node::Strong { children }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::DefinitionList { children }
            | Node::Admonition { children }
            | Node::AdmonitionTitle { children }
            | Node::Parameters { children }
            | Node::Link { children, .. }
            | Node::BlockQuote { children }
            | Node::FieldList { children }
            | Node::Signature { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Node::Unknown(_))
    }

    // Constructors

    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading { depth, children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis { children }
    }

    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong { children }
    }

    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode {
            value: value.into(),
        }
    }

    pub fn directive(value: impl Into<String>, domain: Option<&str>, role: Option<&str>) -> Self {
        Node::Directive {
            value: value.into(),
            domain: domain.map(str::to_string),
            role: role.map(str::to_string),
        }
    }

    pub fn list(children: Vec<Node>) -> Self {
        Node::List {
            ordered: false,
            children,
        }
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem { children }
    }

    pub fn definition_list(children: Vec<Node>) -> Self {
        Node::DefinitionList { children }
    }

    pub fn definition_list_item(dt: Node, dd: Vec<Node>) -> Self {
        Node::DefinitionListItem {
            dt: Box::new(dt),
            dd,
        }
    }

    pub fn admonition(children: Vec<Node>) -> Self {
        Node::Admonition { children }
    }

    pub fn admonition_title(children: Vec<Node>) -> Self {
        Node::AdmonitionTitle { children }
    }

    pub fn parameters(children: Vec<Node>) -> Self {
        Node::Parameters { children }
    }

    pub fn parameter(param: impl Into<String>, type_: impl Into<String>, desc: Vec<Node>) -> Self {
        Node::Parameter {
            param: param.into(),
            type_: type_.into(),
            desc,
        }
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            url: url.into(),
            children,
        }
    }

    pub fn block_quote(children: Vec<Node>) -> Self {
        Node::BlockQuote { children }
    }

    pub fn math(value: impl Into<String>) -> Self {
        Node::Math {
            value: value.into(),
        }
    }

    pub fn field_list(children: Vec<Node>) -> Self {
        Node::FieldList { children }
    }

    pub fn code(value: impl Into<String>, lang: Option<&str>) -> Self {
        Node::Code {
            value: value.into(),
            lang: lang.map(str::to_string),
        }
    }

    pub fn signature(value: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Signature {
            value: value.into(),
            children,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.children().len();
        if count == 0 {
            write!(f, "{}", self.kind())
        } else {
            write!(f, "{}({} children)", self.kind(), count)
        }
    }
}
