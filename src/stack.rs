// Runtime values and the value stack

use std::fmt;

use crate::error::{ForthError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
}

impl Value {
    /// Nonzero integers and `true` are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Boolean(b) => *b,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    values: Vec<Value>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack { values: Vec::new() }
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    pub fn pop(&mut self, word: &str) -> Result<Value> {
        self.values
            .pop()
            .ok_or_else(|| ForthError::StackUnderflow(word.to_owned()))
    }

    pub fn pop_integer(&mut self, word: &str) -> Result<i64> {
        let value = self.pop(word)?;
        expect_integer(word, value)
    }

    fn require(&self, word: &str, depth: usize) -> Result<()> {
        if self.values.len() < depth {
            return Err(ForthError::StackUnderflow(word.to_owned()));
        }
        Ok(())
    }

    /// Pops `(second, top)`.
    /// The stack is left untouched if it holds fewer than two values.
    pub fn pop_two(&mut self, word: &str) -> Result<(Value, Value)> {
        self.require(word, 2)?;
        let top = self.pop(word)?;
        let second = self.pop(word)?;
        Ok((second, top))
    }

    /// Integer form of `pop_two`
    pub fn pop_two_integers(&mut self, word: &str) -> Result<(i64, i64)> {
        self.require(word, 2)?;
        let top = self.pop_integer(word)?;
        let second = self.pop_integer(word)?;
        Ok((second, top))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bottom to top.
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

fn expect_integer(word: &str, value: Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(n),
        Value::Boolean(_) => Err(ForthError::TypeMismatch {
            word: word.to_owned(),
            value: value.to_string(),
        }),
    }
}

impl From<Vec<Value>> for Stack {
    fn from(values: Vec<Value>) -> Stack {
        Stack { values }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
