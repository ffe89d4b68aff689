//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.

mod map;
mod node;
mod traversal;
mod tree;

pub use self::map::{SplayTree, SplayTreeIntoIter, SplayTreeIter, SplayTreeIterMut};
pub use self::traversal::{LevelOrder, PostOrder, PreOrder, ReverseInOrder};

use std::error;
use std::fmt;
use std::result;

/// The side of a node that a child hangs from. A root-to-node path is a sequence of directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// Errors raised by `SplayTree` construction and by the internal consistency checks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A key was required but none was supplied.
    InvalidKey,
    /// A seed key was supplied without a value.
    MissingValue,
    /// A walk or rotation found the tree in a state that should be unreachable.
    InvariantViolation(&'static str),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidKey => write!(f, "a key must be provided"),
            Error::MissingValue => write!(f, "a seed key must be paired with a value"),
            Error::InvariantViolation(reason) => write!(f, "tree invariant violated: {}", reason),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
