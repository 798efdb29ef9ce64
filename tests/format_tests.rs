//! Integration tests for answer formatting

use spars::format::{Recommendation, format_recommendation, parse_answer};

const SAMPLE_ANSWER: &str = "A **b** c\n\nRelevant Sources:\n- X\n- Y\nignored";

fn body_html(html: &str) -> &str {
    let start = html.find(r#"<div class="mb-4">"#).expect("body wrapper") + r#"<div class="mb-4">"#.len();
    let end = start + html[start..].find("</div>").expect("body end");
    &html[start..end]
}

#[test]
fn test_sample_answer_renders_bold_and_sources() {
    let html = format_recommendation(SAMPLE_ANSWER);

    assert!(html.contains("<strong>Recommendation:</strong>"));
    assert!(html.contains("A <strong>b</strong> c"));
    assert!(html.contains("<strong>Relevant Sources:</strong>"));
    assert_eq!(html.matches(r#"<div class="source-item">"#).count(), 2);
    assert!(html.contains(r#"<div class="source-item">X</div>"#));
    assert!(html.contains(r#"<div class="source-item">Y</div>"#));
    assert!(!html.contains("ignored"));
}

#[test]
fn test_newlines_become_line_breaks() {
    let html = format_recommendation("first line\nsecond line");
    assert_eq!(body_html(&html), "first line<br>second line");
}

#[test]
fn test_no_sources_heading_without_separator() {
    for answer in [
        "",
        "plain",
        "Relevant Sources:\n- X",
        "A\nRelevant Sources:\n- X",
        "A\n\nRelevant Sources: - X",
    ] {
        let html = format_recommendation(answer);
        assert!(!html.contains("Relevant Sources:</strong>"), "unexpected heading for {answer:?}");
        assert!(!html.contains("source-item"));
    }
}

#[test]
fn test_unprefixed_sources_block_keeps_heading() {
    let html = format_recommendation("A\n\nRelevant Sources:\nno dash here");
    assert!(html.contains("<strong>Relevant Sources:</strong>"));
    assert!(!html.contains("source-item"));
    assert!(!html.contains("no dash here"));
}

#[test]
fn test_second_separator_ends_sources() {
    let html = format_recommendation("A\n\nRelevant Sources:\n- one\n\nRelevant Sources:\n- two");
    assert_eq!(html.matches(r#"<div class="source-item">"#).count(), 1);
    assert!(html.contains(r#"<div class="source-item">one</div>"#));
    assert!(!html.contains("two"));
}

#[test]
fn test_plain_escaped_text_passes_through() {
    let input = "Ciprofloxacin: 80% S, 10% I\nNitrofurantoin &amp; Fosfomycin &lt;first line&gt;";
    let html = format_recommendation(input);
    assert_eq!(body_html(&html), input.replace('\n', "<br>"));
}

#[test]
fn test_body_and_sources_are_escaped() {
    let html = format_recommendation(
        "<script>alert(1)</script> **<i>x</i>**\n\nRelevant Sources:\n- <img src=x onerror=alert(1)>",
    );

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<i>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<strong>&lt;i&gt;x&lt;/i&gt;</strong>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn test_backend_source_lines() {
    let answer = "1. Nitrofurantoin\n\nRelevant Sources:\n\
                  - Source: Atlas Dataset, Row: 1042\n\
                  - Source: Gsk Dataset, Row: 7\n";
    assert_eq!(
        parse_answer(answer),
        Recommendation {
            body: "1. Nitrofurantoin".to_string(),
            sources: vec![
                "Source: Atlas Dataset, Row: 1042".to_string(),
                "Source: Gsk Dataset, Row: 7".to_string(),
            ],
            has_sources_block: true,
        }
    );
}
