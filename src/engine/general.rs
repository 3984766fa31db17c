// General-purpose builtin words: arithmetic, stack and comparison

use std::io::Write;

use crate::engine::TF;
use crate::error::{ForthError, Result};
use crate::program::Program;
use crate::stack::{Stack, Value};

macro_rules! pop2_push1 {
    // Helper macro: the expression sees (second, top) and returns None on overflow
    ($stack:ident, $word:expr, $expression:expr) => {{
        let (j, k) = $stack.pop_two_integers($word)?;
        let result = $expression(j, k)
            .ok_or_else(|| ForthError::IntegerOverflow($word.to_owned()))?;
        $stack.push(Value::Integer(result));
        Ok(())
    }};
}

impl<W: Write> TF<W> {
    pub fn f_plus(&mut self, _program: &mut Program, stack: &mut Stack) -> Result<()> {
        pop2_push1!(stack, "+", i64::checked_add)
    }

    pub fn f_minus(&mut self, _program: &mut Program, stack: &mut Stack) -> Result<()> {
        pop2_push1!(stack, "-", i64::checked_sub)
    }

    pub fn f_times(&mut self, _program: &mut Program, stack: &mut Stack) -> Result<()> {
        pop2_push1!(stack, "*", i64::checked_mul)
    }

    pub fn f_dup(&mut self, _program: &mut Program, stack: &mut Stack) -> Result<()> {
        let value = stack.pop("dup")?;
        stack.push(value);
        stack.push(value);
        Ok(())
    }

    pub fn f_equal(&mut self, _program: &mut Program, stack: &mut Stack) -> Result<()> {
        let (a, b) = stack.pop_two("==")?;
        stack.push(Value::Boolean(a == b));
        Ok(())
    }
}
