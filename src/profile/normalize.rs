// Tokenizer and normalizer.
//
// Documents are split into raw tokens on whitespace, the way formatted stream
// extraction does it, and each raw token is reduced to its ASCII alphanumeric
// characters in upper case. Anything else (punctuation, symbols, non-ASCII
// bytes) is dropped.

/// Whitespace bytes recognized by the C locale: space, tab, newline,
/// vertical tab, form feed and carriage return.
///
/// `u8::is_ascii_whitespace` leaves out vertical tab, so the set is spelled
/// out here.
fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Reduce a raw token to its canonical form.
///
/// Keeps ASCII letters and digits, uppercasing letters, and drops everything
/// else. Returns an empty string when nothing survives; callers must skip
/// empty results before counting.
pub fn normalize(raw: &str) -> String {
    normalize_bytes(raw.as_bytes())
}

/// Byte-level version of [`normalize`], for input that may not be UTF-8.
pub fn normalize_bytes(raw: &[u8]) -> String {
    raw.iter()
        .filter(|b| b.is_ascii_alphanumeric())
        .map(|b| b.to_ascii_uppercase() as char)
        .collect()
}

/// Split text into raw whitespace-delimited tokens. No token is empty and no
/// token contains whitespace.
pub fn raw_tokens(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|&b| is_separator(b)).filter(|t| !t.is_empty())
}

/// Canonical tokens of a text, in order, with empty normalizations removed.
pub fn tokens(text: &[u8]) -> impl Iterator<Item = String> + '_ {
    raw_tokens(text)
        .map(normalize_bytes)
        .filter(|token| !token.is_empty())
}
