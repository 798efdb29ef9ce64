//! Rendering of backend answers into the HTML fragment shown in the results card.

pub const SOURCES_SEPARATOR: &str = "\n\nRelevant Sources:\n";

const BOLD_MARKER: &str = "**";
const SOURCE_PREFIX: &str = "- ";

/// An answer split into its recommendation body and cited sources.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recommendation {
    pub body: String,
    pub sources: Vec<String>,
    /// The answer carried a non-empty sources block, even if no line in it
    /// qualified as a source. Controls the "Relevant Sources:" heading.
    pub has_sources_block: bool,
}

impl Recommendation {
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="mb-3"><strong>Recommendation:</strong></div>"#);
        html.push_str(r#"<div class="mb-4">"#);
        html.push_str(&render_body(&self.body));
        html.push_str("</div>");

        if self.has_sources_block {
            html.push_str(r#"<div class="border-top pt-3">"#);
            html.push_str(r#"<div class="mb-2"><strong>Relevant Sources:</strong></div>"#);
            for source in &self.sources {
                html.push_str(r#"<div class="source-item">"#);
                html.push_str(&escape_html(source));
                html.push_str("</div>");
            }
            html.push_str("</div>");
        }

        html
    }
}

pub fn format_recommendation(answer: &str) -> String {
    parse_answer(answer).to_html()
}

pub fn parse_answer(answer: &str) -> Recommendation {
    let mut parts = answer.split(SOURCES_SEPARATOR);
    let body = parts.next().unwrap_or_default();
    // Text after a repeated separator is not part of the sources block
    let sources_block = parts.next().unwrap_or_default();

    Recommendation {
        body: body.to_string(),
        sources: parse_sources(sources_block),
        has_sources_block: !sources_block.is_empty(),
    }
}

fn parse_sources(block: &str) -> Vec<String> {
    block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.trim_start().strip_prefix(SOURCE_PREFIX))
        .map(|source| source.trim_end().to_string())
        .collect()
}

/// Escapes the body, applies `**bold**` spans, and turns newlines into `<br>`.
fn render_body(body: &str) -> String {
    body.split('\n')
        .map(|line| emphasize(&escape_html(line)))
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Non-greedy `**X**` to `<strong>X</strong>` within a single line.
/// An unmatched trailing marker is left as literal text.
fn emphasize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find(BOLD_MARKER) {
        let after_open = &rest[open + BOLD_MARKER.len()..];
        let Some(close) = after_open.find(BOLD_MARKER) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str("<strong>");
        out.push_str(&after_open[..close]);
        out.push_str("</strong>");
        rest = &after_open[close + BOLD_MARKER.len()..];
    }
    out.push_str(rest);
    out
}

/// Escapes markup-significant characters. Well-formed character references are
/// kept as-is so text the backend already escaped is not escaped twice.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        match ch {
            '&' if starts_with_char_reference(&text[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `&name;`, `&#123;` or `&#x7B;` at the start of `text`.
fn starts_with_char_reference(text: &str) -> bool {
    let Some(rest) = text.strip_prefix('&') else {
        return false;
    };
    let Some(end) = rest.find(';') else {
        return false;
    };
    let name = &rest[..end];

    if let Some(numeric) = name.strip_prefix('#') {
        return match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit()),
        };
    }

    let mut chars = name.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}
