//! Minimal MSD tag lexer.
//!
//! Both simfile variants share the MSD container format: a sequence of
//! `#KEY:VALUE;` tags, where values may span lines and `//` starts a
//! line comment. Only the tag structure is handled here; interpreting
//! the tags is the caller's job.

/// One `#KEY:VALUE;` pair, in file order. Keys are uppercased, values are
/// raw (untrimmed of inner whitespace, trimmed at the ends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Lex a simfile body into its tag sequence.
///
/// Tags with no `:` separator (e.g. the bare `#NOTEDATA:;` opener still has
/// one) are tolerated with an empty value. A tag left open at end of file is
/// emitted as-is; StepMania itself is this lenient.
pub fn parse_tags(content: &str) -> Vec<Tag> {
    let stripped = strip_comments(content);
    let mut tags = Vec::new();
    let mut rest = stripped.as_str();

    while let Some(start) = rest.find('#') {
        rest = &rest[start + 1..];
        let body = match rest.find(';') {
            Some(end) => {
                let body = &rest[..end];
                rest = &rest[end + 1..];
                body
            }
            None => {
                let body = rest;
                rest = "";
                body
            }
        };

        let (key, value) = match body.find(':') {
            Some(sep) => (&body[..sep], &body[sep + 1..]),
            None => (body, ""),
        };

        tags.push(Tag {
            key: key.trim().to_uppercase(),
            value: value.trim().to_string(),
        });
    }

    tags
}

fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for line in content.lines() {
        let line = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        out.push_str(line);
        out.push('\n');
    }
    out
}
