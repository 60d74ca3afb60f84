//! Incremental recovery of complete records from a live text stream.
//!
//! The generation service emits one JSON-like object per logical record but
//! guarantees nothing about chunk boundaries: a chunk may end inside a string
//! literal, stray characters may sit between objects, and body text may
//! itself contain `{` and `}`. [`ObjectExtractor`] therefore scans with a
//! quote- and escape-aware brace balance and only hands a span to the JSON
//! parser once the balance returns to zero.
//!
//! An extractor instance is bound to a single stream. Retried attempts start
//! with a fresh instance; feeding two unrelated streams through one instance
//! produces garbage by construction.

use crate::record::{Record, RecordDraft};

/// Stateful extractor with a carry-over buffer for the unconsumed tail.
#[derive(Debug, Default)]
pub struct ObjectExtractor {
    buf: String,
}

impl ObjectExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and drain every record that became complete.
    ///
    /// Spans that balance but fail to parse (or lack the mandatory `style` /
    /// `content` fields) are formatting artifacts of the upstream generator
    /// and are dropped without surfacing an error.
    pub fn feed(&mut self, chunk: &str) -> Vec<Record> {
        self.buf.push_str(chunk);
        let mut out = Vec::new();

        loop {
            let Some(open) = self.buf.find('{') else {
                // Nothing object-like in flight; stray text need not be kept.
                self.buf.clear();
                break;
            };
            if open > 0 {
                self.buf.drain(..open);
            }

            let Some(len) = balanced_object_len(&self.buf) else {
                // Incomplete object; keep the tail for the next feed.
                break;
            };

            match serde_json::from_str::<RecordDraft>(&self.buf[..len]) {
                Ok(draft) if !draft.content.is_empty() => out.push(draft.into_record()),
                Ok(_) => tracing::debug!("discarding record with empty content"),
                Err(err) => tracing::debug!(%err, "discarding unparsable span"),
            }
            self.buf.drain(..len);
        }

        out
    }
}

/// Byte length of the balanced `{...}` span at the start of `s`, or `None`
/// if the closing brace has not arrived yet.
///
/// Braces inside string literals are ignored; a backslash suppresses the
/// special meaning of the following character for exactly one position.
fn balanced_object_len(s: &str) -> Option<usize> {
    debug_assert!(s.starts_with('{'));
    let mut depth = 0i64;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove markdown code-fence markup a model may wrap a reply in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Locate the first complete `{...}` span in `text` using the same
/// quote-aware scan as the streaming extractor.
pub fn first_balanced_object(text: &str) -> Option<&str> {
    let open = text.find('{')?;
    let len = balanced_object_len(&text[open..])?;
    Some(&text[open..open + len])
}
