// Output words

use std::io::Write;

use crate::engine::TF;
use crate::error::Result;
use crate::program::Program;
use crate::stack::Stack;

impl<W: Write> TF<W> {
    pub fn f_print(&mut self, _program: &mut Program, stack: &mut Stack) -> Result<()> {
        let value = stack.pop("print")?;
        self.write_line(&value.to_string())
    }
}
