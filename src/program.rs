// The remaining work of an interpretation, consumed front to back.
//
// Tokens are kept in reverse so that taking the next word is a pop from
// the end of the Vec, and splicing a definition in front is an extend.

use std::fmt;

use crate::tokenizer::tokenize;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Program {
    reversed: Vec<String>,
}

impl Program {
    pub fn new() -> Program {
        Program {
            reversed: Vec::new(),
        }
    }

    /// Remove and return the logically first token.
    pub fn next_token(&mut self) -> Option<String> {
        self.reversed.pop()
    }

    pub fn peek(&self) -> Option<&str> {
        self.reversed.last().map(String::as_str)
    }

    /// Splice `tokens` in so they are the next ones taken, in the given order.
    pub fn prepend(&mut self, tokens: &[String]) {
        self.reversed.extend(tokens.iter().rev().cloned());
    }

    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }
}

impl From<Vec<String>> for Program {
    fn from(mut tokens: Vec<String>) -> Program {
        tokens.reverse();
        Program { reversed: tokens }
    }
}

impl From<&str> for Program {
    fn from(text: &str) -> Program {
        Program::from(tokenize(text))
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.reversed.iter().rev()).finish()
    }
}
