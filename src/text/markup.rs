//! Markup handling: stripping, sanitizing, and structure extraction.
//!
//! This is deliberate pattern scanning, not an HTML parser. The scoring
//! heuristics are pinned to this level of precision and tests depend on it.

use crate::vocab::ALLOWED_TAGS;

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Remove all markup. Script, style, and comment blocks are dropped with
/// their contents; block-closing boundaries become line breaks first so
/// adjacent blocks do not concatenate into one word or sentence.
pub fn strip_markup(text: &str) -> String {
    let mut out = remove_block(text, "script");
    out = remove_block(&out, "style");
    out = remove_comments(&out);
    out = break_blocks(&out);
    remove_tags(&out)
}

/// Permissive sanitizer: keeps tags on the allowed list, removes the rest
/// (the tag only; inner text survives). Script/style/comment blocks are
/// removed with their contents.
pub fn sanitize_markup(content: &str) -> String {
    let mut cleaned = remove_block(content, "script");
    cleaned = remove_block(&cleaned, "style");
    cleaned = remove_comments(&cleaned);

    let mut out = String::with_capacity(cleaned.len());
    let mut rest = cleaned.as_str();
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('>') {
            Some(end) => {
                let tag = &tail[..=end];
                if is_allowed_tag(tag) {
                    out.push_str(tag);
                }
                rest = &tail[end + 1..];
            }
            None => {
                // Unterminated tag: drop the remainder.
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_allowed_tag(tag: &str) -> bool {
    let name = tag_name(tag);
    !name.is_empty() && ALLOWED_TAGS.contains(&name.as_str())
}

/// Lowercased element name of a `<...>` fragment, closing slash skipped.
fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|ch| ch.is_ascii_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}

/// Remove `<tag ...> ... </tag>` blocks, contents included.
fn remove_block(content: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let lower = content.to_ascii_lowercase();
    let mut out = String::with_capacity(content.len());
    let mut pos = 0;
    while let Some(start) = lower[pos..].find(&open) {
        let start = pos + start;
        out.push_str(&content[pos..start]);
        match lower[start..].find(&close) {
            Some(end) => pos = start + end + close.len(),
            None => return out,
        }
    }
    out.push_str(&content[pos..]);
    out
}

fn remove_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

const BLOCK_BREAKS: [&str; 12] = [
    "</p>", "</div>", "</li>", "</h1>", "</h2>", "</h3>", "</h4>", "</h5>", "</h6>",
    "</blockquote>", "</tr>", "<br",
];

fn break_blocks(content: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with the original.
    let lower = content.to_ascii_lowercase();
    let mut out = String::with_capacity(content.len() + 16);
    for (idx, ch) in content.char_indices() {
        if BLOCK_BREAKS.iter().any(|marker| lower[idx..].starts_with(marker)) {
            out.push('\n');
        }
        out.push(ch);
    }
    out
}

fn remove_tags(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        match rest[start..].find('>') {
            Some(end) => rest = &rest[start + end + 1..],
            None => rest = "",
        }
    }
    out.push_str(rest);
    out
}

/// All `<hN>` headings in document order, for N in 1..=6.
pub fn headings(content: &str) -> Vec<Heading> {
    let mut found = Vec::new();
    for level in 1..=6u8 {
        let open = format!("<h{level}");
        let close = format!("</h{level}>");
        let lower = content.to_ascii_lowercase();
        let mut pos = 0;
        while let Some(start) = lower[pos..].find(&open) {
            let start = pos + start;
            let Some(open_end) = lower[start..].find('>') else {
                break;
            };
            let body_start = start + open_end + 1;
            let Some(end) = lower[body_start..].find(&close) else {
                break;
            };
            found.push(Heading {
                level,
                text: strip_markup(&content[body_start..body_start + end])
                    .trim()
                    .to_string(),
            });
            pos = body_start + end + close.len();
        }
    }
    found
}

pub fn headings_of_level(content: &str, level: u8) -> Vec<String> {
    headings(content)
        .into_iter()
        .filter(|heading| heading.level == level)
        .map(|heading| heading.text)
        .collect()
}

/// `<img>` elements with their src and alt attributes. An empty alt counts
/// as missing, matching the coverage rules.
pub fn images(content: &str) -> Vec<Image> {
    let lower = content.to_ascii_lowercase();
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(start) = lower[pos..].find("<img") {
        let start = pos + start;
        let end = match lower[start..].find('>') {
            Some(end) => start + end,
            None => break,
        };
        let tag = &content[start..=end];
        found.push(Image {
            src: attribute(tag, "src").unwrap_or_default(),
            alt: attribute(tag, "alt").filter(|alt| !alt.is_empty()),
        });
        pos = end + 1;
    }
    found
}

/// All link hrefs in document order.
pub fn links(content: &str) -> Vec<String> {
    let lower = content.to_ascii_lowercase();
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(start) = lower[pos..].find("<a") {
        let start = pos + start;
        // Reject <abbr>, <article> and friends.
        let after = lower[start + 2..].chars().next();
        if !matches!(after, Some(ch) if ch.is_ascii_whitespace() || ch == '>') {
            pos = start + 2;
            continue;
        }
        let end = match lower[start..].find('>') {
            Some(end) => start + end,
            None => break,
        };
        if let Some(href) = attribute(&content[start..=end], "href") {
            found.push(href);
        }
        pos = end + 1;
    }
    found
}

/// Attribute value from a single tag fragment, either quote style.
fn attribute(tag: &str, name: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let needle = format!("{name}=");
    let mut search = 0;
    loop {
        let at = search + lower[search..].find(&needle)?;
        // Must be preceded by whitespace so "data-src=" never matches "src=".
        let boundary = lower[..at]
            .chars()
            .next_back()
            .is_some_and(|ch| ch.is_ascii_whitespace());
        if !boundary {
            search = at + needle.len();
            continue;
        }
        let value_start = at + needle.len();
        let quote = tag.as_bytes().get(value_start).copied()?;
        if quote != b'"' && quote != b'\'' {
            search = value_start;
            continue;
        }
        let rest = &tag[value_start + 1..];
        let end = rest.find(quote as char)?;
        return Some(rest[..end].to_string());
    }
}

/// Paragraph texts: split on `<p>` boundaries when paragraph markup is
/// present, otherwise on blank lines. Tags are stripped from each piece.
pub fn paragraphs(content: &str) -> Vec<String> {
    let lower = content.to_ascii_lowercase();
    let pieces: Vec<String> = if lower.contains("<p") {
        split_on_paragraph_tags(content)
    } else {
        content.split("\n\n").map(ToString::to_string).collect()
    };

    pieces
        .iter()
        .map(|piece| strip_markup(piece).trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn split_on_paragraph_tags(content: &str) -> Vec<String> {
    let lower = content.to_ascii_lowercase();
    let mut pieces = Vec::new();
    let mut piece_start = 0;
    let mut pos = 0;
    while let Some(start) = lower[pos..].find("<p") {
        let start = pos + start;
        let after = lower[start + 2..].chars().next();
        let is_p_tag = matches!(after, Some(ch) if ch.is_ascii_whitespace() || ch == '>');
        let close = lower[start..].starts_with("</p>");
        if !is_p_tag && !close {
            pos = start + 2;
            continue;
        }
        pieces.push(content[piece_start..start].to_string());
        let end = match lower[start..].find('>') {
            Some(end) => start + end + 1,
            None => content.len(),
        };
        piece_start = end;
        pos = end;
    }
    pieces.push(content[piece_start..].to_string());
    pieces
}
