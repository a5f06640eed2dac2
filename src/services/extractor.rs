use scraper::{ElementRef, Html, Node, Selector};

use crate::domain::page::{BodyText, RawPage};

const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];
// html5ever parses with scripting on, so noscript children arrive as raw text
const RAW_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ExtractError {
    #[error("page has no <body> element")]
    MissingBody,
}

/// Parses `page` and returns its first `<body>` element pretty-printed, one
/// tag or text node per line.
pub fn extract_body(page: &RawPage) -> Result<BodyText, ExtractError> {
    let body_selector = Selector::parse("body").unwrap();
    let document = Html::parse_document(page.as_str());

    let body = document
        .select(&body_selector)
        .next()
        .ok_or(ExtractError::MissingBody)?;

    let mut out = String::new();
    prettify(body, 0, &mut out);

    Ok(BodyText::new(out))
}

fn prettify(element: ElementRef, depth: usize, out: &mut String) {
    let name = element.value().name();

    push_line(out, depth, &open_tag(element));
    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&name);

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                match raw_text {
                    true => push_line(out, depth + 1, text),
                    false => push_line(out, depth + 1, &escape_text(text)),
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    prettify(child_element, depth + 1, out);
                }
            }
            Node::Comment(comment) => {
                push_line(out, depth + 1, &format!("<!--{}-->", &**comment));
            }
            _ => {}
        }
    }

    push_line(out, depth, &format!("</{}>", name));
}

fn open_tag(element: ElementRef) -> String {
    let value = element.value();
    let mut tag = format!("<{}", value.name());

    for (attr, attr_value) in value.attrs() {
        tag.push_str(&format!(" {}=\"{}\"", attr, escape_attribute(attr_value)));
    }

    match VOID_ELEMENTS.contains(&value.name()) {
        true => tag.push_str("/>"),
        false => tag.push('>'),
    }

    tag
}

fn push_line(out: &mut String, depth: usize, content: &str) {
    out.push_str(&" ".repeat(depth));
    out.push_str(content);
    out.push('\n');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
