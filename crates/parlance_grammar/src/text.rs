//! Character-level helpers shared by the primitives.
//!
//! Offsets reported to callers are in characters; slicing needs bytes. These
//! helpers keep both in step so multi-byte input never splits a code point.

/// How much of an input a candidate string matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Prefix {
    /// Matched characters.
    pub chars: usize,
    /// Matched bytes of the input.
    pub bytes: usize,
}

/// Case-insensitive length of the common prefix of `input` and `candidate`.
pub(crate) fn shared_prefix(input: &str, candidate: &str) -> Prefix {
    let mut prefix = Prefix::default();
    for (ours, theirs) in input.chars().zip(candidate.chars()) {
        if !eq_ignore_case(ours, theirs) {
            break;
        }
        prefix.chars += 1;
        prefix.bytes += ours.len_utf8();
    }
    prefix
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Number of characters in `s`.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
