//! Layout of a render forest into styled terminal lines
//!
//!     This is the reference consumer of the render model. It wraps every token line to
//!     the available width and produces ratatui [Line]s; painting them on a terminal is
//!     left to the caller.
//!
//!     Structure is expressed with left margins:
//!
//!         Block   no margin; in debug mode preceded by a `[name]` label line
//!         Indent  2 columns of padding
//!         Panel   a 2 column gutter, `│ `, in the panel style
//!
//!     Sibling items always start on a new line. Consecutive bare tokens are wrapped
//!     together as one run. Nesting never shrinks the wrapping width below one column,
//!     so deep documents still lay out, just badly.

pub mod theme;

pub use theme::Theme;

use crate::docterm::ast::Node;
use crate::docterm::config::RenderConfig;
use crate::docterm::error::RenderError;
use crate::docterm::render::{wrap, Indent, Paint, RenderVisitor, Renderable, Token};
use log::warn;
use ratatui::text::{Line, Span};
use std::num::NonZeroUsize;

/// Must stay [Panel::GUTTER](crate::docterm::render::Panel::GUTTER) columns wide.
const PANEL_GUTTER: &str = "│ ";

#[derive(Debug, Clone)]
pub struct Layout {
    width: NonZeroUsize,
    debug: bool,
    theme: Theme,
}

impl Layout {
    pub fn new(config: &RenderConfig) -> Result<Self, RenderError> {
        let theme = Theme::from_config(&config.theme)?;
        Ok(Self::with_theme(config.layout.width, theme)?.debug(config.layout.debug))
    }

    pub fn with_theme(width: usize, theme: Theme) -> Result<Self, RenderError> {
        let width = NonZeroUsize::new(width).ok_or(RenderError::InvalidWidth(width))?;
        Ok(Layout {
            width,
            debug: false,
            theme,
        })
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn width(&self) -> usize {
        self.width.get()
    }

    /// Render a document tree and lay it out in one go.
    pub fn render_document(&self, root: &Node) -> Result<Vec<Line<'static>>, RenderError> {
        let block = RenderVisitor.render_document(root)?;
        Ok(self.lines(&[block.into()]))
    }

    pub fn lines(&self, items: &[Renderable]) -> Vec<Line<'static>> {
        let mut out = Vec::new();
        self.lay_out(items, &Margin::default(), &mut out);
        out
    }

    /// Lines as unstyled text, one per row, trailing whitespace removed.
    pub fn plain_text(&self, items: &[Renderable]) -> String {
        to_plain_text(&self.lines(items))
    }

    fn lay_out(&self, items: &[Renderable], margin: &Margin, out: &mut Vec<Line<'static>>) {
        let mut run: Vec<&Token> = Vec::new();
        for item in items {
            if let Renderable::Token(token) = item {
                run.push(token);
                continue;
            }
            self.flush_run(&mut run, margin, out);

            match item {
                Renderable::Token(_) => {}
                Renderable::Line(line) => self.paint(line.children(), margin, out),
                Renderable::Block(block) => {
                    if self.debug {
                        let label = format!("[{}]", block.name());
                        out.push(margin.line(vec![Span::styled(label, self.theme.block_label)]));
                    }
                    self.lay_out(block.children(), margin, out);
                }
                Renderable::Indent(indent) => {
                    let margin = margin.nest(Span::raw(" ".repeat(Indent::WIDTH)));
                    self.lay_out(indent.children(), &margin, out);
                }
                Renderable::Panel(panel) => {
                    let margin = margin.nest(Span::styled(PANEL_GUTTER, self.theme.panel));
                    self.lay_out(panel.children(), &margin, out);
                }
            }
        }
        self.flush_run(&mut run, margin, out);
    }

    fn flush_run(&self, run: &mut Vec<&Token>, margin: &Margin, out: &mut Vec<Line<'static>>) {
        if run.is_empty() {
            return;
        }
        self.paint(run.iter().copied(), margin, out);
        run.clear();
    }

    fn paint<'a, I>(&self, tokens: I, margin: &Margin, out: &mut Vec<Line<'static>>)
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let available = self.width.get().saturating_sub(margin.width);
        let max_width = NonZeroUsize::new(available).unwrap_or_else(|| {
            warn!(
                "nesting of {} columns leaves no room in width {}, wrapping at 1 column",
                margin.width, self.width
            );
            NonZeroUsize::MIN
        });

        let mut current = Vec::new();
        let mut broke = false;
        for paint in wrap(tokens, max_width) {
            match paint {
                Paint::Token(token) => current.push(self.span(token)),
                Paint::LineBreak => {
                    out.push(margin.line(std::mem::take(&mut current)));
                    broke = true;
                }
            }
        }
        // An empty line still takes a row: that is how blank lines are drawn.
        if !current.is_empty() || !broke {
            out.push(margin.line(current));
        }
    }

    fn span(&self, token: &Token) -> Span<'static> {
        let style = if self.debug && token.is_space() {
            self.theme.debug_space
        } else {
            self.theme.style_for(token.style())
        };
        Span::styled(token.value().to_string(), style)
    }
}

/// Left margin accumulated from enclosing indents and panels.
#[derive(Debug, Clone, Default)]
struct Margin {
    spans: Vec<Span<'static>>,
    width: usize,
}

impl Margin {
    fn nest(&self, span: Span<'static>) -> Margin {
        let mut spans = self.spans.clone();
        let width = self.width + span.content.chars().count();
        spans.push(span);
        Margin { spans, width }
    }

    fn line(&self, content: Vec<Span<'static>>) -> Line<'static> {
        let mut spans = self.spans.clone();
        spans.extend(content);
        Line::from(spans)
    }
}

/// Flatten styled lines into text, trailing whitespace removed from each row.
pub fn to_plain_text(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|line| {
            let row: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docterm::render::{Block, Panel, StyleTag, TokenLine};

    fn layout(width: usize) -> Layout {
        Layout::with_theme(width, Theme::default()).unwrap()
    }

    fn words(text: &str) -> TokenLine {
        crate::docterm::render::partition(text, " ")
            .filter(|piece| !piece.is_empty())
            .map(Token::plain)
            .collect()
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let err = Layout::with_theme(0, Theme::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidWidth(0)));

        let err = Layout::new(&RenderConfig::default().with_width(0)).unwrap_err();
        assert!(matches!(err, RenderError::InvalidWidth(0)));
    }

    #[test]
    fn test_line_wraps_to_width() {
        let items = vec![words("aaa bbb ccc").into()];
        assert_eq!(layout(10).plain_text(&items), "aaa bbb\nccc");
    }

    #[test]
    fn test_blank_line_takes_a_row() {
        let items = vec![
            words("one").into(),
            TokenLine::blank().into(),
            words("two").into(),
        ];
        assert_eq!(layout(20).plain_text(&items), "one\n\ntwo");
    }

    #[test]
    fn test_indent_adds_margin_and_narrows_width() {
        let items = vec![Indent::new(vec![words("aaa bbb").into()]).into()];
        // 8 columns minus 2 of margin leaves 6: "aaa bbb" no longer fits.
        assert_eq!(layout(8).plain_text(&items), "  aaa\n  bbb");
    }

    #[test]
    fn test_panel_draws_gutter() {
        let items = vec![Panel::new(vec![words("note").into()]).into()];
        let lines = layout(20).lines(&items);
        assert_eq!(to_plain_text(&lines), "│ note");
        assert_eq!(lines[0].spans[0].style, Theme::default().panel);
    }

    #[test]
    fn test_bare_tokens_are_coalesced_and_hard_breaks_end_the_row() {
        let items: Vec<Renderable> = vec![
            Token::styled("x", StyleTag::Parameter).into(),
            Token::plain(" : ").into(),
            Token::styled("int", StyleTag::TypeAnnotation).into(),
            Token::newline().into(),
            Indent::new(vec![words("desc").into()]).into(),
        ];
        assert_eq!(layout(20).plain_text(&items), "x : int\n  desc");
    }

    #[test]
    fn test_styles_follow_tags() {
        let items = vec![TokenLine::new(vec![
            Token::styled("code", StyleTag::InlineCode),
            Token::plain(" "),
            Token::plain("text"),
        ])
        .into()];
        let lines = layout(20).lines(&items);
        let theme = Theme::default();
        assert_eq!(lines[0].spans[0].style, theme.inline_code);
        assert_eq!(lines[0].spans[2].style, theme.style_for(None));
    }

    #[test]
    fn test_debug_labels_blocks_and_marks_spaces() {
        let items = vec![Block::new("root", vec![words("a b").into()]).into()];
        let lines = layout(20).debug(true).lines(&items);
        assert_eq!(to_plain_text(&lines), "[root]\na b");
        assert_eq!(lines[1].spans[1].style, Theme::default().debug_space);

        let lines = layout(20).lines(&items);
        assert_eq!(to_plain_text(&lines), "a b");
    }

    #[test]
    fn test_deep_nesting_clamps_width() {
        let mut item: Renderable = words("deep words").into();
        for _ in 0..10 {
            item = Indent::new(vec![item]).into();
        }
        let text = layout(6).plain_text(&[item]);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].trim_start(), "deep");
        assert_eq!(rows[1].trim_start(), "words");
    }
}
