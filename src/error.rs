// Interpreter errors. Every one of them ends the current interpretation.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

pub type Result<T> = std::result::Result<T, ForthError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForthError {
    /// A token that is not a definition, a builtin or a number.
    UnknownWord(String),
    /// The named builtin needed more values than the stack held.
    StackUnderflow(String),
    /// The source ended before `;`. Holds the word being defined, if its name was read.
    UnterminatedDefinition(Option<String>),
    /// A boolean reached a builtin that only works on integers.
    TypeMismatch { word: String, value: String },
    IntegerOverflow(String),
    Output(String),
    /// A program file could not be opened or read.
    Load { path: String, reason: String },
}

impl Error for ForthError {}

impl Display for ForthError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ForthError::UnknownWord(word) => write!(f, "Unknown word {word}"),
            ForthError::StackUnderflow(word) => write!(f, "Stack underflow in {word}"),
            ForthError::UnterminatedDefinition(Some(name)) => {
                write!(f, "Definition of {name} is missing its terminating ;")
            }
            ForthError::UnterminatedDefinition(None) => {
                write!(f, "Definition is missing its name and terminating ;")
            }
            ForthError::TypeMismatch { word, value } => {
                write!(f, "{word} expects an integer, found {value}")
            }
            ForthError::IntegerOverflow(word) => write!(f, "Integer overflow in {word}"),
            ForthError::Output(reason) => write!(f, "Unable to write output: {reason}"),
            ForthError::Load { path, reason } => write!(f, "Unable to load {path}: {reason}"),
        }
    }
}
