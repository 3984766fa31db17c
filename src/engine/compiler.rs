// Words that work on the program rather than the stack: definition and conditional skip

use std::io::Write;

use crate::engine::{TERMINATOR, TF};
use crate::error::{ForthError, Result};
use crate::program::Program;
use crate::stack::Stack;

impl<W: Write> TF<W> {
    /// : <name> <words> ;
    ///
    /// Collects the words up to the terminator without running them.
    pub fn f_colon(&mut self, program: &mut Program, _stack: &mut Stack) -> Result<()> {
        let name = program
            .next_token()
            .ok_or(ForthError::UnterminatedDefinition(None))?;
        let mut body = Vec::new();
        loop {
            match program.next_token() {
                Some(token) if token == TERMINATOR => break,
                Some(token) => {
                    if token == ":" {
                        self.msg
                            .warning("f_colon", "Colon inside definition of", Some(&name));
                    }
                    body.push(token);
                }
                None => return Err(ForthError::UnterminatedDefinition(Some(name))),
            }
        }
        self.define(name, body);
        Ok(())
    }

    /// unless ( b -- )
    ///
    /// Drops the next word, unexpanded, when b is truthy.
    pub fn f_unless(&mut self, program: &mut Program, stack: &mut Stack) -> Result<()> {
        let condition = stack.pop("unless")?;
        if !condition.is_truthy() {
            return Ok(());
        }
        match program.peek() {
            Some(next) => {
                self.msg.debug("f_unless", "Skipping", Some(next));
                program.next_token();
            }
            None => self
                .msg
                .debug("f_unless", "Nothing left to skip", None::<bool>),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::TF;
    use crate::error::ForthError;
    use crate::program::Program;
    use crate::stack::{Stack, Value};

    #[test]
    fn colon_stores_body_and_leaves_rest() {
        let mut forth = TF::with_output(Vec::<u8>::new());
        let mut program = Program::from("sq dup * ; 5 sq");
        assert_eq!(forth.f_colon(&mut program, &mut Stack::new()), Ok(()));
        assert_eq!(
            forth.find_definition("sq"),
            Some(&["dup".to_owned(), "*".to_owned()][..])
        );
        assert_eq!(format!("{program:?}"), r#"["5", "sq"]"#);
    }

    #[test]
    fn empty_body_is_allowed() {
        let mut forth = TF::with_output(Vec::<u8>::new());
        let mut program = Program::from("nothing ;");
        assert_eq!(forth.f_colon(&mut program, &mut Stack::new()), Ok(()));
        assert_eq!(forth.find_definition("nothing"), Some(&[][..]));
        assert!(program.is_empty());
    }

    #[test]
    fn missing_terminator_keeps_nothing() {
        let mut forth = TF::with_output(Vec::<u8>::new());
        let mut program = Program::from("sq dup *");
        assert_eq!(
            forth.f_colon(&mut program, &mut Stack::new()),
            Err(ForthError::UnterminatedDefinition(Some("sq".to_owned())))
        );
        assert_eq!(forth.find_definition("sq"), None);
    }

    #[test]
    fn unless_consumes_exactly_one_word() {
        let mut forth = TF::with_output(Vec::<u8>::new());
        let mut program = Program::from("a b");
        let mut stack = Stack::from(vec![Value::Integer(5)]);
        assert_eq!(forth.f_unless(&mut program, &mut stack), Ok(()));
        assert!(stack.is_empty());
        assert_eq!(program.peek(), Some("b"));
    }

    #[test]
    fn unless_false_leaves_program() {
        let mut forth = TF::with_output(Vec::<u8>::new());
        let mut program = Program::from("a b");
        let mut stack = Stack::from(vec![Value::Boolean(false)]);
        assert_eq!(forth.f_unless(&mut program, &mut stack), Ok(()));
        assert_eq!(program.len(), 2);
    }
}
