/// Parses the leading base-10 integer of `text` the way form fields are read:
/// leading whitespace is skipped, an optional sign is honoured, and parsing
/// stops at the first non-digit. `"12.7"` reads as 12, `"50px"` as 50.
/// Returns `None` when no digit follows. Saturates instead of overflowing.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits {
        seen = true;
        let d = i64::from(d - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(d)
        } else {
            value.saturating_add(d)
        };
    }
    seen.then_some(value)
}

/// Reads a field as an integer in `[min, max]`, falling back to `default`
/// when the text holds no number.
pub fn clamped_or(text: &str, default: i64, min: i64, max: i64) -> i64 {
    parse_leading_int(text).unwrap_or(default).clamp(min, max)
}
