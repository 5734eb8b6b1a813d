//! String escaping for the two encoding dialects.
//!
//! The legacy dialect only backslash-escapes what [`strip_slashes`] removes:
//! backslash, both quote characters and NUL. The strict dialect writes
//! standard JSON string escapes.

/// Escape `\`, `"`, `'` and NUL with a backslash (NUL becomes `\0`).
pub fn add_slashes(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    push_slashed(s, &mut output);
    output
}

/// Append `s` to `output` with legacy slashes added.
pub(crate) fn push_slashed(s: &str, output: &mut String) {
    for ch in s.chars() {
        match ch {
            '\\' => output.push_str("\\\\"),
            '"' => output.push_str("\\\""),
            '\'' => output.push_str("\\'"),
            '\0' => output.push_str("\\0"),
            c => output.push(c),
        }
    }
}

/// Reverse [`add_slashes`].
///
/// A backslash drops and keeps the following character, except `\0` which
/// becomes NUL. A trailing lone backslash is dropped.
pub fn strip_slashes(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => output.push('\0'),
            Some(c) => output.push(c),
            None => {}
        }
    }
    output
}

/// Append `s` to `output` as a quoted JSON string.
pub(crate) fn push_json_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

/// Quote and escape `s` as a standard JSON string.
pub fn escape_json(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    push_json_string(s, &mut output);
    output
}
