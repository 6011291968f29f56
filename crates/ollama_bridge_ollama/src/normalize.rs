//! Normalization of Ollama response bodies.
//!
//! Ollama answers either with one JSON document or, when streaming, with one
//! JSON document per line. The whole body is buffered before it reaches this
//! module, so both shapes are folded into a single [`NormalizedResult`] here.

use ollama_bridge_core::NormalizedResult;
use serde_json::Value;
use tracing::{debug, trace};

/// Normalize a raw Ollama response body.
///
/// Never fails: a body that is not JSON is returned as
/// [`NormalizedResult::RawText`].
///
/// # Examples
///
/// ```
/// use ollama_bridge_core::NormalizedResult;
/// use ollama_bridge_ollama::normalize;
///
/// let result = normalize("{\"response\":\"Hel\"}\n{\"response\":\"lo\"}");
/// assert_eq!(result.text(), Some("Hello"));
///
/// let result = normalize("plain text");
/// assert_eq!(result, NormalizedResult::RawText { text: "plain text".to_string() });
/// ```
pub fn normalize(body: &str) -> NormalizedResult {
    let lines: Vec<String> = body
        .split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if lines.len() > 1 {
        return aggregate(lines);
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => NormalizedResult::Passthrough(value),
        Err(e) => {
            debug!(error = %e, "Response body is not JSON, returning raw text");
            NormalizedResult::RawText {
                text: body.to_string(),
            }
        }
    }
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the ASCII
/// separators `\x1c`..`\x1e`, NEL and the Unicode line/paragraph separators.
/// `\r\n` yields an empty piece between the two, which is dropped.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Fold a multi-line body into one answer.
fn aggregate(raw_lines: Vec<String>) -> NormalizedResult {
    let mut text = String::new();
    let mut last = None;
    let mut skipped = 0usize;

    for (index, line) in raw_lines.iter().enumerate() {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => {
                trace!(index, error = %e, "Skipping unparseable line");
                skipped += 1;
                continue;
            }
        };

        if let Some(fragment) = fragment(&value) {
            text.push_str(&fragment);
        }
        last = Some(value);
    }

    debug!(
        line_count = raw_lines.len(),
        skipped,
        text_len = text.len(),
        "Aggregated streamed response"
    );

    NormalizedResult::Aggregated {
        text,
        raw_lines,
        last: last.filter(is_truthy),
    }
}

/// Text contributed by one parsed line: `response`, falling back to `text`.
fn fragment(value: &Value) -> Option<String> {
    let object = value.as_object()?;
    let field = object
        .get("response")
        .filter(|v| is_truthy(v))
        .or_else(|| object.get("text").filter(|v| is_truthy(v)))?;

    Some(match field {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Null, `false`, zero and empty strings/arrays/objects count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_document_passes_through() {
        assert_eq!(
            normalize(r#"{"response":"Hello"}"#),
            NormalizedResult::Passthrough(json!({"response": "Hello"}))
        );
    }

    #[test]
    fn single_document_with_surrounding_whitespace_passes_through() {
        assert_eq!(
            normalize("\n  {\"response\":\"Hello\",\"done\":true}\n\n"),
            NormalizedResult::Passthrough(json!({"response": "Hello", "done": true}))
        );
    }

    #[test]
    fn streamed_lines_are_concatenated() {
        let body = "{\"response\":\"Hel\"}\n{\"response\":\"lo\"}";
        assert_eq!(
            normalize(body),
            NormalizedResult::Aggregated {
                text: "Hello".to_string(),
                raw_lines: vec![
                    r#"{"response":"Hel"}"#.to_string(),
                    r#"{"response":"lo"}"#.to_string(),
                ],
                last: Some(json!({"response": "lo"})),
            }
        );
    }

    #[test]
    fn malformed_line_is_skipped() {
        let body = "{\"response\":\"Hel\"}\nnot json at all\n{\"response\":\"lo\",\"done\":true}\n";
        let NormalizedResult::Aggregated {
            text,
            raw_lines,
            last,
        } = normalize(body)
        else {
            panic!("expected aggregated result");
        };

        assert_eq!(text, "Hello");
        assert_eq!(raw_lines.len(), 3);
        assert_eq!(raw_lines[1], "not json at all");
        assert_eq!(last, Some(json!({"response": "lo", "done": true})));
    }

    #[test]
    fn text_field_used_when_response_empty() {
        let body = "{\"response\":\"\",\"text\":\"A\"}\n{\"text\":\"B\"}\n{\"done\":true}";
        let result = normalize(body);

        assert_eq!(result.text(), Some("AB"));
        let NormalizedResult::Aggregated { last, .. } = result else {
            panic!("expected aggregated result");
        };
        assert_eq!(last, Some(json!({"done": true})));
    }

    #[test]
    fn non_string_fragments_use_json_text() {
        let body = "{\"response\":42}\n{\"response\":\"!\"}";
        assert_eq!(normalize(body).text(), Some("42!"));
    }

    #[test]
    fn last_omitted_when_no_line_parses() {
        let body = "first\nsecond";
        assert_eq!(
            normalize(body),
            NormalizedResult::Aggregated {
                text: String::new(),
                raw_lines: vec!["first".to_string(), "second".to_string()],
                last: None,
            }
        );
    }

    #[test]
    fn last_omitted_when_final_object_is_empty() {
        let body = "{\"response\":\"x\"}\n{}";
        let NormalizedResult::Aggregated { text, last, .. } = normalize(body) else {
            panic!("expected aggregated result");
        };
        assert_eq!(text, "x");
        assert_eq!(last, None);
    }

    #[test]
    fn plain_text_is_returned_raw() {
        assert_eq!(
            normalize("plain text"),
            NormalizedResult::RawText {
                text: "plain text".to_string()
            }
        );
    }

    #[test]
    fn empty_body_is_returned_raw() {
        assert_eq!(
            normalize(""),
            NormalizedResult::RawText {
                text: String::new()
            }
        );
    }

    #[test]
    fn lone_carriage_return_and_unicode_separators_split_lines() {
        let body = "{\"response\":\"a\"}\r{\"response\":\"b\"}\u{2028}{\"response\":\"c\"}\x0c{\"text\":\"d\"}";
        let NormalizedResult::Aggregated { text, raw_lines, .. } = normalize(body) else {
            panic!("expected aggregated result");
        };
        assert_eq!(text, "abcd");
        assert_eq!(raw_lines.len(), 4);
    }

    #[test]
    fn crlf_lines_are_split() {
        let body = "{\"response\":\"a\"}\r\n{\"response\":\"b\"}\r\n";
        assert_eq!(normalize(body).text(), Some("ab"));
    }
}
