//! Markdown Rendering
//!
//! pulldown-cmark with two tweaks for the details panel:
//! - images are size-constrained so they fit the page
//! - raw HTML in the source is escaped instead of passed through

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown into HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // Nesting depth inside an image whose alt text is being dropped
    let mut in_image = 0usize;

    for event in parser {
        if in_image > 0 {
            match event {
                Event::Start(Tag::Image { .. }) => in_image += 1,
                Event::End(TagEnd::Image) => in_image -= 1,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::Image { dest_url, .. }) => {
                let html = format!(
                    r#"<img src="{}" style="max-width: 100%; max-height: 400px; display: block;" />"#,
                    escape_html(&dest_url)
                );
                events.push(Event::Html(CowStr::from(html)));
                in_image = 1;
            }
            Event::Html(raw) | Event::InlineHtml(raw) => {
                events.push(Event::Text(raw));
            }
            other => events.push(other),
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
