//! Document tree to render forest
//!
//!     [RenderVisitor] walks a [Node] tree and maps each node to zero or more
//!     [Renderable]s. Dispatch is a single match over the closed node enum; kinds without
//!     a dedicated rule fall through to the fallback arm, which emits the node's
//!     structured dump as an unimplemented marker. Rendering never fails on unknown input.
//!
//!     It does fail on malformed input. These shapes are guaranteed by the upstream parser,
//!     and breaking one aborts the document with [RenderError::ContractViolation]:
//!
//!         - a list item must reduce to exactly one token line, not counting the blank
//!           line that ends its paragraph;
//!         - an admonition must start with its title;
//!         - a directive with a domain must also have a role;
//!         - paragraphs and headings may only contain inline content.
//!
//! Rules
//!
//!     root                    block "root" over all children
//!     paragraph, heading      one token line, then a blank line
//!     text                    split on spaces into plain tokens
//!     emphasis, strong, link  children, unstyled
//!     inline_code             literal value, split on spaces, code style
//!     directive               `:domain:role:`value`` rebuilt, split on spaces, directive style
//!     list                    block "list" over an indent of rendered items
//!     list_item               "- " prepended to the item's single line
//!     definition_list         block "deflist" over an indent of rendered items
//!     definition_list_item    term, then an indent over the body
//!     admonition              title, then a panel over the remaining children
//!     parameter               `name : type`, a newline, then an indent over the description
//!     parameters              children, no wrapping
//!     block_quote             indent over children
//!     signature               signature line, then children
//!     anything else           fallback dump

use super::block::{Block, Indent, Panel, Renderable};
use super::partition::partition;
use super::token::{normalize_whitespace, StyleTag, Token};
use super::token_line::TokenLine;
use crate::docterm::ast::{dump, Node};
use crate::docterm::error::RenderError;
use log::{debug, trace};

/// Stateless tree walker; one value can render any number of documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderVisitor;

impl RenderVisitor {
    pub fn new() -> Self {
        RenderVisitor
    }

    /// Render a whole document. `root` must be a [Node::Root].
    pub fn render_document(&self, root: &Node) -> Result<Block, RenderError> {
        match root {
            Node::Root { children } => self.visit_root(children),
            other => Err(RenderError::contract(
                other.kind(),
                "a document must start at a root node",
            )),
        }
    }

    pub fn visit_many(&self, nodes: &[Node]) -> Result<Vec<Renderable>, RenderError> {
        let mut items = Vec::new();
        for node in nodes {
            items.extend(self.visit(node)?);
        }
        Ok(items)
    }

    pub fn visit(&self, node: &Node) -> Result<Vec<Renderable>, RenderError> {
        trace!("visiting {node}");
        match node {
            Node::Root { children } => Ok(vec![self.visit_root(children)?.into()]),
            Node::Paragraph { children } | Node::Heading { children, .. } => {
                self.visit_paragraph(node.kind(), children)
            }
            Node::Text { value } => Ok(self.visit_text(value)),
            Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Link { children, .. }
            | Node::Parameters { children } => self.visit_many(children),
            Node::InlineCode { value } => Ok(split_styled(value, StyleTag::InlineCode)),
            Node::Directive {
                value,
                domain,
                role,
            } => self.visit_directive(value, domain.as_deref(), role.as_deref()),
            Node::List { children, .. } => self.visit_list(children),
            Node::ListItem { children } => self.visit_list_item(children),
            Node::DefinitionList { children } => Ok(vec![Block::new(
                "deflist",
                vec![Indent::new(self.visit_many(children)?).into()],
            )
            .into()]),
            Node::DefinitionListItem { dt, dd } => self.visit_definition_list_item(dt, dd),
            Node::Admonition { children } => self.visit_admonition(children),
            Node::Parameter { param, type_, desc } => self.visit_parameter(param, type_, desc),
            Node::BlockQuote { children } => {
                Ok(vec![Indent::new(self.visit_many(children)?).into()])
            }
            Node::Signature { value, children } => self.visit_signature(value, children),
            Node::AdmonitionTitle { .. }
            | Node::Math { .. }
            | Node::FieldList { .. }
            | Node::Code { .. }
            | Node::Unknown(_) => Ok(vec![self.fallback(node)]),
        }
    }

    fn visit_root(&self, children: &[Node]) -> Result<Block, RenderError> {
        Ok(Block::new("root", self.visit_many(children)?))
    }

    fn visit_paragraph(
        &self,
        kind: &str,
        children: &[Node],
    ) -> Result<Vec<Renderable>, RenderError> {
        let line = TokenLine::try_from_renderables(kind, self.visit_many(children)?)?;
        Ok(vec![line.into(), TokenLine::blank().into()])
    }

    fn visit_text(&self, value: &str) -> Vec<Renderable> {
        let value = normalize_whitespace(value);
        partition(&value, " ")
            .filter(|piece| !piece.is_empty())
            .map(|piece| Token::plain(piece).into())
            .collect()
    }

    fn visit_directive(
        &self,
        value: &str,
        domain: Option<&str>,
        role: Option<&str>,
    ) -> Result<Vec<Renderable>, RenderError> {
        let literal = match (domain, role) {
            (Some(domain), Some(role)) => format!(":{domain}:{role}:`{value}`"),
            (None, Some(role)) => format!(":{role}:`{value}`"),
            (None, None) => format!("`{value}`"),
            (Some(domain), None) => {
                return Err(RenderError::contract(
                    "directive",
                    format!("domain `{domain}` given without a role"),
                ))
            }
        };
        Ok(split_styled(&literal, StyleTag::Directive))
    }

    fn visit_list(&self, items: &[Node]) -> Result<Vec<Renderable>, RenderError> {
        let rendered = self.visit_many(items)?;
        Ok(vec![Block::new("list", vec![Indent::new(rendered).into()]).into()])
    }

    fn visit_list_item(&self, children: &[Node]) -> Result<Vec<Renderable>, RenderError> {
        let mut items = self.visit_many(children)?;
        // Drop the paragraph terminator only; an empty paragraph still leaves its line.
        let terminated = matches!(items.last(), Some(Renderable::Line(line)) if line.is_blank());
        if terminated && items.len() > 1 {
            items.pop();
        }

        let found = items.len();
        match (items.pop(), found) {
            (Some(Renderable::Line(line)), 1) => {
                let bullet = TokenLine::new(vec![Token::plain("- ")]);
                Ok(vec![(bullet + line).into()])
            }
            (last, _) => Err(RenderError::contract(
                "list_item",
                format!(
                    "expected exactly one token line, found {found} item(s){}",
                    last.map(|item| format!(" ending with {}", item.describe()))
                        .unwrap_or_default()
                ),
            )),
        }
    }

    fn visit_definition_list_item(
        &self,
        dt: &Node,
        dd: &[Node],
    ) -> Result<Vec<Renderable>, RenderError> {
        let mut items = self.visit(dt)?;
        items.push(Indent::new(self.visit_many(dd)?).into());
        Ok(items)
    }

    fn visit_admonition(&self, children: &[Node]) -> Result<Vec<Renderable>, RenderError> {
        let (title, body) = match children.split_first() {
            Some((title @ Node::AdmonitionTitle { .. }, body)) => (title, body),
            Some((other, _)) => {
                return Err(RenderError::contract(
                    "admonition",
                    format!(
                        "first child must be an admonition_title, found {}",
                        other.kind()
                    ),
                ))
            }
            None => {
                return Err(RenderError::contract("admonition", "missing admonition_title"))
            }
        };

        let mut items = self.visit(title)?;
        if !body.is_empty() {
            items.push(Panel::new(self.visit_many(body)?).into());
        }
        Ok(vec![Block::new("admonition", items).into()])
    }

    fn visit_parameter(
        &self,
        param: &str,
        type_: &str,
        desc: &[Node],
    ) -> Result<Vec<Renderable>, RenderError> {
        Ok(vec![
            Token::styled(param, StyleTag::Parameter).into(),
            Token::plain(" : ").into(),
            Token::styled(type_, StyleTag::TypeAnnotation).into(),
            Token::newline().into(),
            Indent::new(self.visit_many(desc)?).into(),
        ])
    }

    fn visit_signature(
        &self,
        value: &str,
        children: &[Node],
    ) -> Result<Vec<Renderable>, RenderError> {
        let signature = TokenLine::new(vec![Token::styled(value, StyleTag::Signature)]);
        let mut items = vec![signature.into()];
        items.extend(self.visit_many(children)?);
        Ok(items)
    }

    fn fallback(&self, node: &Node) -> Renderable {
        debug!("no render rule for `{}`, emitting fallback dump", node.kind());
        Token::unimplemented(dump(node)).into()
    }
}

/// Split literal text on spaces, styling every piece (spaces included).
fn split_styled(text: &str, style: StyleTag) -> Vec<Renderable> {
    partition(text, " ")
        .filter(|piece| !piece.is_empty())
        .map(|piece| Token::styled(piece, style).into())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[Renderable]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                Renderable::Token(token) => token.value().to_string(),
                other => other.describe(),
            })
            .collect()
    }

    #[test]
    fn test_text_splits_on_spaces() {
        let items = RenderVisitor.visit(&Node::text("hello world")).unwrap();
        assert_eq!(texts(&items), vec!["hello", " ", "world"]);
    }

    #[test]
    fn test_text_normalizes_newlines_and_runs() {
        let items = RenderVisitor.visit(&Node::text("a\nb  c\n")).unwrap();
        assert_eq!(texts(&items), vec!["a", " ", "b", " ", "c", " "]);
        assert!(!items.last().unwrap().as_token().unwrap().is_hard_break());
    }

    #[test]
    fn test_inline_code_is_styled_and_split() {
        let items = RenderVisitor.visit(&Node::inline_code("x = 1")).unwrap();
        assert_eq!(texts(&items), vec!["x", " ", "=", " ", "1"]);
        assert!(items
            .iter()
            .all(|item| item.as_token().unwrap().style() == Some(StyleTag::InlineCode)));
    }

    #[test]
    fn test_directive_without_domain() {
        let items = RenderVisitor
            .visit(&Node::directive("foo", None, Some("ref")))
            .unwrap();
        assert_eq!(texts(&items), vec![":ref:`foo`"]);

        let items = RenderVisitor
            .visit(&Node::directive("a b", None, None))
            .unwrap();
        assert_eq!(texts(&items), vec!["`a", " ", "b`"]);
    }

    #[test]
    fn test_emphasis_adds_no_style() {
        let node = Node::emphasis(vec![Node::strong(vec![Node::text("loud")])]);
        let items = RenderVisitor.visit(&node).unwrap();
        assert_eq!(items, vec![Renderable::Token(Token::plain("loud"))]);
    }

    #[test]
    fn test_parameters_flatten() {
        let node = Node::parameters(vec![
            Node::parameter("a", "int", vec![]),
            Node::parameter("b", "str", vec![]),
        ]);
        let items = RenderVisitor.visit(&node).unwrap();
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn test_render_document_requires_root() {
        let err = RenderVisitor
            .render_document(&Node::paragraph(vec![]))
            .unwrap_err();
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_paragraph_rejects_block_content() {
        let node = Node::paragraph(vec![Node::list(vec![])]);
        let err = RenderVisitor.visit(&node).unwrap_err();
        assert!(err.to_string().contains("`paragraph`"));
    }

    #[test]
    fn test_list_item_reports_what_it_found() {
        let node = Node::list_item(vec![Node::text("bare")]);
        let err = RenderVisitor.visit(&node).unwrap_err();
        assert!(err.is_contract_violation());
        assert!(err.to_string().contains("found 1 item(s)"));
    }

    #[test]
    fn test_empty_admonition_is_a_violation() {
        let err = RenderVisitor.visit(&Node::admonition(vec![])).unwrap_err();
        assert!(err.to_string().contains("missing admonition_title"));
    }
}
