//! Placeholder extraction for raw translation strings.
//!
//! Two placeholder forms are recognised:
//!
//! - `{name}`: single-delimited interpolation
//! - `{{name}}`: double-delimited interpolation kept for legacy message files
//!
//! Whitespace inside the braces is ignored (`{{ name }}` names `name`). A brace group
//! only counts as a placeholder when the opening and closing runs have the same length
//! (one or two braces) and the content is an identifier. Everything else, such as
//! `{{{name}}}`, `{name}}`, `{}` or `{ "a": 1 }`, is kept verbatim as literal text.

use std::collections::HashMap;

use super::language::is_valid_identifier;

/// One piece of a parsed translation string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text, emitted as-is.
    Text(String),
    /// A placeholder to substitute with the caller's argument.
    Param(String),
}

/// A translation string split into literal text and placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParsedTemplate {
    /// Distinct parameter names in first-seen order.
    pub params: Vec<String>,
    pub segments: Vec<Segment>,
}

impl ParsedTemplate {
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Substitute `inputs` into the template. Absent inputs render as empty text.
    pub fn render(&self, inputs: &HashMap<String, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Param(name) => {
                    if let Some(value) = inputs.get(name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

/// Extract the ordered, de-duplicated parameter names of `raw`.
///
/// ```
/// use d18n::core::extract_placeholders;
///
/// assert_eq!(extract_placeholders("Hello {{name}}"), vec!["name"]);
/// assert_eq!(extract_placeholders("Hello {name}"), vec!["name"]);
/// assert!(extract_placeholders("no placeholders here").is_empty());
/// ```
pub fn extract_placeholders(raw: &str) -> Vec<String> {
    parse_template(raw).params
}

/// Split `raw` into literal text and placeholder segments.
pub fn parse_template(raw: &str) -> ParsedTemplate {
    let mut template = ParsedTemplate::default();
    let mut text = String::new();
    let mut pos = 0;

    while pos < raw.len() {
        let rest = &raw[pos..];

        if rest.starts_with('{') {
            let run = brace_run(rest, '{');
            if let Some((name, consumed)) = match_placeholder(rest, run) {
                if !text.is_empty() {
                    template.segments.push(Segment::Text(std::mem::take(&mut text)));
                }
                if !template.params.iter().any(|p| p == name) {
                    template.params.push(name.to_string());
                }
                template.segments.push(Segment::Param(name.to_string()));
                pos += consumed;
            } else {
                // Not a placeholder: keep the whole brace run literally.
                text.push_str(&rest[..run]);
                pos += run;
            }
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        text.push(ch);
        pos += ch.len_utf8();
    }

    if !text.is_empty() {
        template.segments.push(Segment::Text(text));
    }

    template
}

fn brace_run(s: &str, brace: char) -> usize {
    s.chars().take_while(|c| *c == brace).count()
}

/// Try to read a placeholder at the start of `s`, which begins with `run` opening braces.
///
/// Returns the trimmed name and the number of bytes consumed.
fn match_placeholder(s: &str, run: usize) -> Option<(&str, usize)> {
    if run == 0 || run > 2 {
        return None;
    }

    let inner_start = run;
    let close = inner_start + s[inner_start..].find('}')?;
    let inner = &s[inner_start..close];
    if inner.contains('{') {
        return None;
    }

    if brace_run(&s[close..], '}') != run {
        return None;
    }

    let name = inner.trim();
    if !is_valid_identifier(name) {
        return None;
    }

    Some((name, close + run))
}
