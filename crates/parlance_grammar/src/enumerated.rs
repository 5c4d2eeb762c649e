//! Choice from a fixed set of words, by unambiguous abbreviation.
//!
//! Each candidate is compared with the start of the input and the longest
//! case-insensitive shared prefix wins. Once any candidate has matched in
//! full, only further full matches stay eligible, so a complete word such as
//! `north` beats a longer partial match of `northeast`. Two or more winners
//! are ambiguous and the player has to type more.

use parlance_foundation::{Value, comma_list_and};

use crate::output::{Output, ParseFailure, ParseResult};
use crate::spec::Parse;
use crate::text::{Prefix, char_len, shared_prefix};

/// One of an ordered set of candidate strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enumerated {
    /// Candidates, in declaration order.
    pub values: Vec<String>,
    /// Only accept candidates typed out in full.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exact: bool,
}

impl Enumerated {
    /// Candidates that may be abbreviated.
    #[must_use]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            exact: false,
        }
    }

    /// Candidates that must be typed in full.
    #[must_use]
    pub fn exact<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exact: true,
            ..Self::new(values)
        }
    }
}

impl Parse for Enumerated {
    fn parse<'a>(&self, input: &'a str, _players: &[String]) -> ParseResult<'a> {
        let (index, prefix) = match_candidates(&self.values, self.exact, input)?;
        Ok(Output::split(
            Value::from(self.values[index].as_str()),
            input,
            prefix.bytes,
        ))
    }

    fn expected(&self, _players: &[String]) -> Vec<String> {
        self.values.clone()
    }
}

/// Picks the single candidate the input abbreviates.
///
/// Returns the winning candidate's index and how much input it matched.
pub(crate) fn match_candidates<S: AsRef<str>>(
    candidates: &[S],
    exact: bool,
    input: &str,
) -> Result<(usize, Prefix), ParseFailure> {
    let mut best = Prefix::default();
    let mut matched: Vec<usize> = Vec::new();
    let mut have_full_match = false;

    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        let full_len = char_len(candidate);
        let shared = shared_prefix(input, candidate);
        let is_full = shared.chars == full_len;

        if exact && !is_full {
            continue;
        }
        if shared.chars == 0 || shared.chars < best.chars || (have_full_match && !is_full) {
            continue;
        }

        if is_full {
            have_full_match = true;
        }
        if shared.chars > best.chars {
            matched.clear();
            best = shared;
        }
        matched.push(index);
    }

    match matched.as_slice() {
        [index] => Ok((*index, best)),
        [] => Err(expecting_all(candidates)),
        _ => {
            let names: Vec<&str> = matched.iter().map(|&i| candidates[i].as_ref()).collect();
            Err(expecting_all(candidates).with_message(format!(
                "matched {}, more input is required to uniquely match one",
                comma_list_and(&names)
            )))
        }
    }
}

fn expecting_all<S: AsRef<str>>(candidates: &[S]) -> ParseFailure {
    ParseFailure::expecting(
        candidates
            .iter()
            .map(|candidate| candidate.as_ref().to_string())
            .collect(),
    )
}
