/// Number of distinct symbols an index node can branch on: `a..=z` then `0..=9`.
pub const ALPHABET_SIZE: usize = 36;

pub(crate) const LETTER_COUNT: usize = 26;

/// Maps a character to its child-slot index after ASCII case folding.
///
/// Letters occupy slots 0..=25, digits 26..=35. Anything else is outside the
/// alphabet and maps to `None`; callers decide whether that skips (insert) or
/// aborts (search).
#[must_use]
pub fn symbol_index(ch: char) -> Option<usize> {
    let folded = ch.to_ascii_lowercase();
    match folded {
        'a'..='z' => Some(folded as usize - 'a' as usize),
        '0'..='9' => Some(LETTER_COUNT + (folded as usize - '0' as usize)),
        _ => None,
    }
}

/// Canonical (lowercase) character for a child-slot index.
#[must_use]
pub fn symbol_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE, "symbol slot out of range: {index}");
    if index < LETTER_COUNT {
        (b'a' + index as u8) as char
    } else {
        (b'0' + (index - LETTER_COUNT) as u8) as char
    }
}
