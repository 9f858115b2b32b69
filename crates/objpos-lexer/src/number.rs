//! Leading-float scanner.
//!
//! Reads the longest numeric prefix of a string the way a `parseFloat` style
//! conversion does: leading whitespace is skipped, then an optional sign,
//! then either `Infinity` or a decimal literal with optional fraction and
//! exponent. Anything after the prefix is ignored.

/// Parse the leading float of `text`, or NaN if there is none.
///
/// ```
/// use objpos_lexer::number::parse_leading_float;
///
/// assert_eq!(parse_leading_float("50.5%"), 50.5);
/// assert!(parse_leading_float("abc%").is_nan());
/// ```
pub fn parse_leading_float(text: &str) -> f64 {
    scan_leading_float(text).map_or(f64::NAN, |(value, _)| value)
}

/// Scan the leading float of `text`.
///
/// Returns the value and the byte offset just past the numeric prefix.
pub fn scan_leading_float(text: &str) -> Option<(f64, usize)> {
    let bytes = text.as_bytes();
    let start = text.len() - text.trim_start_matches(is_number_whitespace).len();
    let mut pos = start;

    if matches!(bytes.get(pos), Some(b'+' | b'-')) {
        pos += 1;
    }

    if text[pos..].starts_with("Infinity") {
        let value = if bytes[start] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((value, pos + "Infinity".len()));
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // The exponent only counts when at least one digit follows it.
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp..]);
        if exp_digits > 0 {
            pos = exp + exp_digits;
        }
    }

    text[start..pos].parse::<f64>().ok().map(|value| (value, pos))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Whitespace skipped before a number: Unicode white space without NEL,
/// plus the byte order mark.
fn is_number_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}
