//! English list phrasing for diagnostics.
//!
//! Failure messages name candidates and alternatives inline, so lists are
//! joined the way a person would write them: `north`, `north and south`,
//! `north, south, and east`.

/// Joins `items` with commas and a final conjunction.
///
/// Zero items give an empty string, one item is returned as is, two items are
/// joined by the bare conjunction and longer lists use a serial comma.
#[must_use]
pub fn comma_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {conjunction} {}", first.as_ref(), second.as_ref()),
        [first, rest @ ..] => format!("{}, {}", first.as_ref(), serial_tail(rest, conjunction)),
    }
}

fn serial_tail<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => String::new(),
        [last] => format!("{conjunction} {}", last.as_ref()),
        [first, rest @ ..] => format!("{}, {}", first.as_ref(), serial_tail(rest, conjunction)),
    }
}

/// Joins `items` with "and".
#[must_use]
pub fn comma_list_and<S: AsRef<str>>(items: &[S]) -> String {
    comma_list(items, "and")
}

/// Joins `items` with "or".
#[must_use]
pub fn comma_list_or<S: AsRef<str>>(items: &[S]) -> String {
    comma_list(items, "or")
}
