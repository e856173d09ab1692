//! Slide body markdown → ratatui `Text`.
//!
//! Walks `pulldown_cmark` events and emits styled lines tuned for projection:
//! headings drop their `#` markers, bullets become `•`, quotes get a bar,
//! fenced code is highlighted with syntect.

use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

const CODE_THEME: &str = "base16-ocean.dark";
const ACCENT: Color = Color::LightCyan;
const MUTED: Color = Color::DarkGray;

/// Render a slide body. `base_fg` colors plain paragraphs.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut out = SlideText::new(base_fg);
    for event in Parser::new_ext(content, opts) {
        out.handle(event);
    }
    out.text
}

enum Code {
    None,
    Plain,
    Highlighted(Box<HighlightLines<'static>>),
}

struct SlideText {
    text: Text<'static>,
    base: Style,
    /// Nested inline styles; each entry is already patched onto its parent.
    inline: Vec<Style>,
    /// Prefix spans for the current block (quote bars).
    gutter: Vec<Span<'static>>,
    /// `None` = bullet list, `Some(n)` = ordered list at item n.
    lists: Vec<Option<u64>>,
    code: Code,
    link: Option<String>,
    pending_gap: bool,
}

impl SlideText {
    fn new(base_fg: Color) -> Self {
        Self {
            text: Text::default(),
            base: Style::default().fg(base_fg),
            inline: Vec::new(),
            gutter: Vec::new(),
            lists: Vec::new(),
            code: Code::None,
            link: None,
            pending_gap: false,
        }
    }

    fn current_style(&self) -> Style {
        self.inline.last().copied().unwrap_or(self.base)
    }

    fn enter_style(&mut self, style: Style) {
        let patched = self.current_style().patch(style);
        self.inline.push(patched);
    }

    fn new_line(&mut self) {
        self.text.lines.push(Line::from(self.gutter.clone()));
    }

    fn append(&mut self, span: Span<'static>) {
        if self.text.lines.is_empty() {
            self.new_line();
        }
        if let Some(line) = self.text.lines.last_mut() {
            line.push_span(span);
        }
    }

    /// Start a block element, separated from the previous one by a blank line.
    fn open_block(&mut self) {
        if self.pending_gap {
            self.text.lines.push(Line::default());
            self.pending_gap = false;
        }
        self.new_line();
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(t) => self.push_text(&t),
            Event::Code(c) => self.append(Span::styled(
                c.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Event::SoftBreak => self.append(Span::raw(" ")),
            Event::HardBreak => self.new_line(),
            Event::Rule => {
                self.open_block();
                self.append(Span::styled("─".repeat(32), Style::default().fg(MUTED)));
                self.pending_gap = true;
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                // List items already opened their line
                if self.lists.is_empty() {
                    self.open_block();
                }
            }
            Tag::Heading { level, .. } => {
                self.open_block();
                self.enter_style(heading_style(level));
            }
            Tag::BlockQuote(_) => {
                self.gutter.push(Span::styled("▌ ", Style::default().fg(ACCENT)));
                self.enter_style(Style::default().add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => {
                self.open_block();
                let lang = match &kind {
                    CodeBlockKind::Fenced(lang) => lang.to_string(),
                    CodeBlockKind::Indented => String::new(),
                };
                self.code = match SYNTAX_SET.find_syntax_by_token(&lang) {
                    Some(syntax) if !lang.is_empty() => {
                        let theme = &THEME_SET.themes[CODE_THEME];
                        Code::Highlighted(Box::new(HighlightLines::new(syntax, theme)))
                    }
                    _ => Code::Plain,
                };
                // The opening line stays empty; code lines follow it
            }
            Tag::List(start) => {
                if self.lists.is_empty() {
                    self.pending_gap = !self.text.lines.is_empty();
                }
                self.lists.push(start);
            }
            Tag::Item => {
                if self.pending_gap {
                    self.text.lines.push(Line::default());
                    self.pending_gap = false;
                }
                self.new_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}• "),
                };
                self.append(Span::styled(marker, Style::default().fg(ACCENT)));
            }
            Tag::Emphasis => self.enter_style(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.enter_style(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.enter_style(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link { dest_url, .. } => {
                self.link = Some(dest_url.to_string());
                let link = Style::default().fg(ACCENT);
                self.enter_style(link.add_modifier(Modifier::UNDERLINED));
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Heading(_) => {
                if matches!(tag, TagEnd::Heading(_)) {
                    self.inline.pop();
                }
                self.pending_gap = true;
            }
            TagEnd::BlockQuote(_) => {
                self.gutter.pop();
                self.inline.pop();
                self.pending_gap = true;
            }
            TagEnd::CodeBlock => {
                self.code = Code::None;
                self.pending_gap = true;
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.pending_gap = true;
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.inline.pop();
            }
            TagEnd::Link => {
                self.inline.pop();
                if let Some(url) = self.link.take() {
                    self.append(Span::styled(format!(" <{url}>"), Style::default().fg(MUTED)));
                }
            }
            _ => {}
        }
    }

    fn push_text(&mut self, raw: &str) {
        // ratatui draws tabs as zero-width
        let text = raw.replace('\t', "    ");

        match &mut self.code {
            Code::Highlighted(highlighter) => {
                let mut lines = Vec::new();
                for source_line in LinesWithEndings::from(&text) {
                    let Ok(ranges) = highlighter.highlight_line(source_line, &SYNTAX_SET) else {
                        continue;
                    };
                    let spans: Vec<Span<'static>> = ranges
                        .into_iter()
                        .map(|(style, fragment)| {
                            let rgb = style.foreground;
                            let fg = Color::Rgb(rgb.r, rgb.g, rgb.b);
                            let fragment = fragment.trim_end_matches('\n').to_string();
                            Span::styled(fragment, Style::default().fg(fg))
                        })
                        .filter(|span| !span.content.is_empty())
                        .collect();
                    lines.push(spans);
                }
                for spans in lines {
                    self.push_code_line(spans);
                }
            }
            Code::Plain => {
                let lines: Vec<String> = text.lines().map(str::to_string).collect();
                for line in lines {
                    self.push_code_line(vec![Span::styled(line, Style::default().fg(Color::Gray))]);
                }
            }
            Code::None => {
                let style = self.current_style();
                self.append(Span::styled(text, style));
            }
        }
    }

    fn push_code_line(&mut self, spans: Vec<Span<'static>>) {
        let mut line = Line::from(Span::styled("  ", Style::default()));
        for span in spans {
            line.push_span(span);
        }
        self.text.lines.push(line);
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => style.add_modifier(Modifier::UNDERLINED),
        HeadingLevel::H2 => style,
        _ => style.add_modifier(Modifier::ITALIC),
    }
}
