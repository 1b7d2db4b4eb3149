//! Renderer for the restricted Markdown dialect the game-plan generator is
//! asked to produce: `### ` headings, `* ` / `- ` bullets, `**bold**` spans
//! and plain paragraphs.
//!
//! This is not a Markdown parser. Anything outside the dialect degrades to a
//! paragraph per line. Bold spans are matched per line, so a span never
//! crosses a line, list item or heading boundary.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static MERGED_BULLET_RE: OnceLock<Regex> = OnceLock::new();
static BOLD_RE: OnceLock<Regex> = OnceLock::new();

fn merged_bullet_re() -> &'static Regex {
    MERGED_BULLET_RE.get_or_init(|| Regex::new(r"\. ([*-]) ").unwrap())
}

fn bold_re() -> &'static Regex {
    BOLD_RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").unwrap())
}

/// Split bullets the generator merged onto one line.
///
/// Every `". * "` or `". - "` becomes a period, a line break and the bullet
/// marker. Input without that pattern is returned borrowed and unchanged.
pub fn split_merged_bullets(text: &str) -> Cow<'_, str> {
    merged_bullet_re().replace_all(text, ".\n$1 ")
}

/// Replace every shortest non-empty `**x**` with `<strong>x</strong>`.
pub fn render_bold(line: &str) -> Cow<'_, str> {
    bold_re().replace_all(line, "<strong>$1</strong>")
}

// ---------------------------------------------------------------------------
// Structural pass
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    OutsideList,
    InsideList,
}

/// One classified input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Heading(&'a str),
    Bullet(&'a str),
    Paragraph(&'a str),
    Blank,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix("### ") {
            Line::Heading(rest)
        } else if let Some(rest) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) {
            Line::Bullet(rest)
        } else if line.trim().is_empty() {
            Line::Blank
        } else {
            Line::Paragraph(line)
        }
    }
}

struct Renderer {
    html: String,
    state: ListState,
}

impl Renderer {
    fn new(capacity: usize) -> Self {
        Self {
            html: String::with_capacity(capacity),
            state: ListState::OutsideList,
        }
    }

    fn close_list(&mut self) {
        if self.state == ListState::InsideList {
            self.html.push_str("</ul>");
            self.state = ListState::OutsideList;
        }
    }

    fn open_list(&mut self) {
        if self.state == ListState::OutsideList {
            self.html.push_str("<ul>");
            self.state = ListState::InsideList;
        }
    }

    fn wrap(&mut self, tag: &str, content: &str) {
        self.html.push('<');
        self.html.push_str(tag);
        self.html.push('>');
        self.html.push_str(content);
        self.html.push_str("</");
        self.html.push_str(tag);
        self.html.push('>');
    }

    fn line(&mut self, line: Line<'_>) {
        match line {
            Line::Heading(text) => {
                self.close_list();
                self.wrap("h3", text);
            }
            Line::Bullet(text) => {
                self.open_list();
                self.wrap("li", &render_bold(text));
            }
            Line::Paragraph(text) => {
                self.close_list();
                self.wrap("p", &render_bold(text));
            }
            Line::Blank => self.close_list(),
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.html
    }
}

/// Render generator output to markup.
///
/// The result is well-formed only with respect to the elements this function
/// opens; inline HTML in the input passes through untouched.
pub fn render(text: &str) -> String {
    let cleaned = split_merged_bullets(text);
    let mut renderer = Renderer::new(cleaned.len() + 64);
    for line in cleaned.lines() {
        renderer.line(Line::classify(line));
    }
    renderer.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
