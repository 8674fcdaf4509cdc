//! Metadata header parsing for log documents
//!
//! A log.md may open with a `---`-delimited header of flat `key: value`
//! pairs. The header is optional; a document without one is all body.

use std::collections::HashMap;

/// A log document split into its metadata header and markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Header fields, keys lowercased.
    pub metadata: HashMap<String, String>,
    /// Everything after the header, untouched.
    pub body: String,
}

impl Document {
    /// Author field of the header, if present and non-empty.
    pub fn author(&self) -> Option<&str> {
        self.metadata
            .get("author")
            .map(String::as_str)
            .filter(|a| !a.is_empty())
    }
}

/// Split a document into metadata header and body.
///
/// The header must start on the first line with `---` and run to the next
/// `---` line. A missing or unterminated header leaves the whole content as
/// body. Values keep their case; surrounding single or double quotes are
/// removed.
pub fn parse(content: &str) -> Document {
    let lines: Vec<&str> = content.lines().collect();

    if lines.first().map(|l| l.trim_end()) != Some("---") {
        return Document {
            metadata: HashMap::new(),
            body: content.to_string(),
        };
    }

    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|line| line.trim_end() == "---")
        .map(|i| i + 1)
    else {
        // Never saw the closing delimiter: not a header after all.
        return Document {
            metadata: HashMap::new(),
            body: content.to_string(),
        };
    };

    let mut metadata = HashMap::new();
    for line in &lines[1..close] {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            metadata.insert(key, unquote(value.trim()).to_string());
        }
    }

    Document {
        metadata,
        body: lines[close + 1..].join("\n"),
    }
}

fn unquote(value: &str) -> &str {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value)
}
