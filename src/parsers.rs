// src/parsers.rs

/// Best-effort integer parsing in the manner of C `atoi`.
///
/// Leading whitespace is skipped, an optional sign is honoured and the longest
/// run of ASCII digits that follows is converted. Anything else yields `0`.
/// Overflow saturates instead of wrapping.
pub fn parse_lenient_i64(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative { magnitude.saturating_neg() } else { magnitude }
}

/// `clap` value parser for day counts (`-s`, `-b`). Never rejects input.
///
/// # Errors
/// Infallible; the `Result` is required by `clap`'s value parser signature.
#[allow(clippy::unnecessary_wraps)]
pub fn parse_days(s: &str) -> Result<i64, String> {
    Ok(parse_lenient_i64(s))
}
