//! Turning raw text into numeric answers.
//!
//! Voice transcripts and typed input are parsed differently: transcripts may
//! contain words and filler ("it's twelve", "12 apples"), typed input is a
//! plain integer.

/// Spoken number words, followed by common mis-hearings.
///
/// Lookup is by substring in this order, so a transcript containing both
/// "seven" and "seventeen" resolves to the first key found here.
pub const NUMBER_WORDS: &[(&str, i64)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("to", 2),
    ("too", 2),
    ("for", 4),
    ("ate", 8),
];

/// Normalize a transcript the way it is echoed back to the user.
#[must_use]
pub fn normalize_transcript(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Extract a number from a speech transcript.
///
/// The first run of digits wins; otherwise the first dictionary word that
/// appears anywhere in the text. `None` means nothing usable was heard.
#[must_use]
pub fn interpret_transcript(raw: &str) -> Option<i64> {
    let text = normalize_transcript(raw);
    if let Some(digits) = first_digit_run(&text) {
        return Some(saturating_digits(digits));
    }
    NUMBER_WORDS
        .iter()
        .find(|(word, _)| text.contains(word))
        .map(|&(_, value)| value)
}

/// Parse typed input as a leading integer.
///
/// Accepts an optional sign followed by digits and ignores anything after the
/// digits, so `"5-3"` reads as 5. Word matching never applies to typed input.
#[must_use]
pub fn parse_typed_answer(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude = saturating_digits(&rest[..digits_end]);
    Some(if negative { -magnitude } else { magnitude })
}

/// Keep only the characters the answer field accepts: digits and `-`.
#[must_use]
pub fn filter_answer_input(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect()
}

/// Value of an ASCII digit run, clamped to `i64::MAX`.
fn saturating_digits(digits: &str) -> i64 {
    digits.bytes().fold(0i64, |value, digit| {
        value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    })
}

fn first_digit_run(text: &str) -> Option<&str> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let rest = &text[start..];
    let len = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}
