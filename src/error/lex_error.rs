use thiserror::Error;

/// An unrecognized character found while tokenizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error at position {position}: Unrecognized character '{character}'.")]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the source.
    pub position:  usize,
}
