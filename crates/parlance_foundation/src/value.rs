//! The value produced by a successful parse.

use std::fmt;
use std::sync::Arc;

/// A parsed value.
///
/// The shape depends on the grammar node that produced it: integers parse to
/// [`Value::Int`], tokens and enumerated choices to [`Value::Text`], player
/// names to a roster index, and sequences or repetitions to a
/// [`Value::List`] of their children's values. Values are immutable and
/// cheap to clone for the scalar variants.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// An optional element that was not present in the input.
    Absent,
    /// 64-bit signed integer.
    Int(i64),
    /// Matched text (a token as declared, an enumerated candidate, whitespace).
    Text(Arc<str>),
    /// Zero-based index into the player roster.
    Player(usize),
    /// Ordered child values.
    List(Vec<Value>),
}

impl Value {
    /// Returns true if this is the absent marker.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a roster index.
    #[must_use]
    pub const fn as_player(&self) -> Option<usize> {
        match self {
            Self::Player(index) => Some(*index),
            _ => None,
        }
    }

    /// Attempts to extract the child values of a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the child at `index` if this is a list.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_list().and_then(|items| items.get(index))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Player(index) => write!(f, "Player({index})"),
            Self::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "-"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Player(index) => write!(f, "player#{index}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenience From implementations

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}
