use std::fmt;

/// Errors returned by [`Family::add_set`](crate::Family::add_set).
///
/// Both variants represent malformed input from whatever builds the family (a file
/// parser, a generator, a caller's own code) rather than a bug in this crate, so they
/// are ordinary `Result` errors rather than panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyError {
    /// A set contained an element outside `[0, grnd_size)`.
    InvalidMember { element: usize, grnd_size: usize },
    /// A set contained the same element twice.
    DuplicateMember { element: usize },
}

impl fmt::Display for FamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FamilyError::InvalidMember { element, grnd_size } => write!(
                f,
                "element {element} is outside the ground set [0, {grnd_size})"
            ),
            FamilyError::DuplicateMember { element } => {
                write!(f, "element {element} appears more than once in the same set")
            }
        }
    }
}

impl std::error::Error for FamilyError {}
