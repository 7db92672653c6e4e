//! Markup to text-line rendering for the live preview pane
//!
//! The preview is a pure function of the buffer text: every frame calls
//! [`render_preview`] on the current source, so there is never a second
//! copy of the content to keep in sync.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches comments and opening/closing/self-closing tags
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<(/?)([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*?(/?)>")
        .expect("Tag regex pattern is valid")
});

/// Matches named and numeric character references
static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("Entity regex pattern is valid")
});

/// Blank line inside a text run, treated as a paragraph break
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n").expect("Paragraph regex pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Whitespace regex pattern is valid"));

/// Tags that start and end their own line (`button` is handled separately)
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "div", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tr",
    "ul",
];

/// Tags whose content never reaches the preview
const HIDDEN_TAGS: &[&str] = &["script", "style", "head", "title"];

/// Styling hint for a preview line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewLineKind {
    /// `<h1>`..`<h6>`, carrying the level
    Heading(u8),
    /// `<li>` content
    Bullet,
    /// Ordinary paragraph text
    Text,
}

/// One rendered line of the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLine {
    pub kind: PreviewLineKind,
    pub text: String,
}

impl PreviewLine {
    fn new(kind: PreviewLineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Accumulates inline text until a block boundary flushes it
struct LineBuilder {
    lines: Vec<PreviewLine>,
    current: String,
    kind: PreviewLineKind,
    hidden_depth: usize,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current: String::new(),
            kind: PreviewLineKind::Text,
            hidden_depth: 0,
        }
    }

    fn push_text(&mut self, raw: &str) {
        if self.hidden_depth > 0 {
            return;
        }
        let mut parts = PARAGRAPH_BREAK.split(raw).peekable();
        while let Some(part) = parts.next() {
            let decoded = decode_entities(part);
            let collapsed = WHITESPACE_RUN.replace_all(&decoded, " ");
            if self.current.is_empty() {
                self.current.push_str(collapsed.trim_start());
            } else {
                self.current.push_str(&collapsed);
            }
            if parts.peek().is_some() {
                self.flush();
            }
        }
    }

    fn push_literal(&mut self, literal: &str) {
        if self.hidden_depth > 0 {
            return;
        }
        if !self.current.is_empty() && !self.current.ends_with(' ') {
            self.current.push(' ');
        }
        self.current.push_str(literal);
    }

    fn flush(&mut self) {
        let text = self.current.trim();
        if !text.is_empty() {
            self.lines.push(PreviewLine::new(self.kind, text));
        }
        self.current.clear();
        self.kind = PreviewLineKind::Text;
    }

    fn open(&mut self, name: &str) {
        if HIDDEN_TAGS.contains(&name) {
            self.hidden_depth += 1;
            return;
        }
        match name {
            "br" => self.flush(),
            "button" => {
                self.flush();
                self.push_literal("[ ");
            }
            _ if BLOCK_TAGS.contains(&name) => {
                self.flush();
                if let Some(level) = heading_level(name) {
                    self.kind = PreviewLineKind::Heading(level);
                } else if name == "li" {
                    self.kind = PreviewLineKind::Bullet;
                }
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &str) {
        if HIDDEN_TAGS.contains(&name) {
            self.hidden_depth = self.hidden_depth.saturating_sub(1);
            return;
        }
        match name {
            "button" if self.hidden_depth == 0 => {
                let trimmed = self.current.trim_end().len();
                self.current.truncate(trimmed);
                self.current.push_str(" ]");
                self.flush();
            }
            _ if BLOCK_TAGS.contains(&name) => self.flush(),
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<PreviewLine> {
        self.flush();
        self.lines
    }
}

fn heading_level(name: &str) -> Option<u8> {
    let rest = name.strip_prefix('h')?;
    match rest.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// Decode the HTML character references the preview can display
pub fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match body {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some(' '),
                    "copy" => Some('©'),
                    "mdash" => Some('—'),
                    _ => None,
                }
            };
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Render source markup into preview lines
pub fn render_preview(source: &str) -> Vec<PreviewLine> {
    let mut builder = LineBuilder::new();
    let mut last_end = 0;

    for caps in TAG_PATTERN.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        builder.push_text(&source[last_end..whole.start()]);
        last_end = whole.end();

        // Comments have no tag name group
        let Some(name) = caps.get(2) else {
            continue;
        };
        let name = name.as_str().to_ascii_lowercase();
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closing = caps.get(3).is_some_and(|m| !m.as_str().is_empty());

        if closing {
            builder.close(&name);
        } else {
            builder.open(&name);
            if self_closing && name != "br" {
                builder.close(&name);
            }
        }
    }
    builder.push_text(&source[last_end..]);

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[PreviewLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_plain_text_is_single_paragraph() {
        let lines = render_preview("hello   world");
        assert_eq!(lines, vec![PreviewLine::new(PreviewLineKind::Text, "hello world")]);
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let lines = render_preview("first line\n\nsecond line");
        assert_eq!(texts(&lines), vec!["first line", "second line"]);
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let src = r#"<div class="p-8">
  <h1 class="text-3xl">STOLEN STREET</h1>
  <p class="mt-4">Run the Streets, Own Your Style.</p>
</div>"#;
        let lines = render_preview(src);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, PreviewLineKind::Heading(1));
        assert_eq!(lines[0].text, "STOLEN STREET");
        assert_eq!(lines[1].kind, PreviewLineKind::Text);
        assert_eq!(lines[1].text, "Run the Streets, Own Your Style.");
    }

    #[test]
    fn test_buttons_render_as_bracketed_lines() {
        let src = r#"<div><button class="a">SHOP NOW</button>
<button>VIEW DROPS</button></div>"#;
        let lines = render_preview(src);
        assert_eq!(texts(&lines), vec!["[ SHOP NOW ]", "[ VIEW DROPS ]"]);
    }

    #[test]
    fn test_button_breaks_surrounding_text() {
        let lines = render_preview("<p>Welcome<button>Go</button>back soon</p>");
        assert_eq!(texts(&lines), vec!["Welcome", "[ Go ]", "back soon"]);
        assert!(lines.iter().all(|l| l.kind == PreviewLineKind::Text));
    }

    #[test]
    fn test_list_items_are_bullets() {
        let lines = render_preview("<ul><li>Header</li><li>Hero   Section</li></ul>");
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.kind == PreviewLineKind::Bullet));
        assert_eq!(lines[1].text, "Hero Section");
    }

    #[test]
    fn test_script_and_style_are_hidden() {
        let src = "<style>body { color: red; }</style><p>Visible</p><script>alert(1)</script>";
        assert_eq!(texts(&render_preview(src)), vec!["Visible"]);
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(
            texts(&render_preview("<p>a<!-- hidden <b>x</b> --> b</p>")),
            vec!["a b"]
        );
    }

    #[test]
    fn test_br_breaks_line() {
        assert_eq!(
            texts(&render_preview("one<br/>two<br>three")),
            vec!["one", "two", "three"]
        );
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(decode_entities("a &amp; b &lt;c&gt;"), "a & b <c>");
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
        assert_eq!(decode_entities("&unknown;"), "&unknown;");
    }

    #[test]
    fn test_empty_source_renders_nothing() {
        assert!(render_preview("").is_empty());
        assert!(render_preview("   \n  ").is_empty());
    }

    #[test]
    fn test_uppercase_tags_are_recognized() {
        let lines = render_preview("<H2>Title</H2>");
        assert_eq!(lines[0].kind, PreviewLineKind::Heading(2));
    }
}
