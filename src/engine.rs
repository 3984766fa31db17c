// The minforth interpreter struct and implementation

mod builtin;
mod compiler;
mod console;
mod debug;
mod general;

use std::collections::HashMap;
use std::io::{self, Write};

pub use builtin::{BuiltInFn, BuiltinCode};

use crate::error::{ForthError, Result};
use crate::messages::Msg;
use crate::program::Program;
use crate::stack::{Stack, Value};
use crate::utility;

/// Ends a `:` definition.
pub const TERMINATOR: &str = ";";

/// What a word turned out to be, in lookup order.
enum Resolved<W: Write> {
    Definition(Vec<String>),
    Builtin(BuiltinCode<W>),
    Literal(i64),
}

/// Interpreter state shared by every program it runs: the builtin table,
/// the user definitions and the output `print` writes to.
pub struct TF<W: Write = io::Stdout> {
    builtins: HashMap<String, BuiltInFn<W>>,
    definitions: HashMap<String, Vec<String>>,
    out: W,
    pub msg: Msg,
}

impl TF<io::Stdout> {
    pub fn new() -> TF<io::Stdout> {
        TF::with_output(io::stdout())
    }
}

impl Default for TF<io::Stdout> {
    fn default() -> Self {
        TF::new()
    }
}

impl<W: Write> TF<W> {
    pub fn with_output(out: W) -> TF<W> {
        let mut forth = TF {
            builtins: HashMap::new(),
            definitions: HashMap::new(),
            out,
            msg: Msg::new(),
        };
        forth.add_builtins();
        forth
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run `program` to completion against `stack` and hand the stack back.
    /// The first error stops the run; definitions made before it are kept.
    pub fn interpret(&mut self, mut program: Program, mut stack: Stack) -> Result<Stack> {
        while let Some(word) = program.next_token() {
            self.msg.debug("interpret", "word is", Some(&word));
            match self.resolve(&word)? {
                Resolved::Definition(body) => program.prepend(&body),
                Resolved::Builtin(code) => code(self, &mut program, &mut stack)?,
                Resolved::Literal(number) => stack.push(Value::Integer(number)),
            }
            self.msg.debug("interpret", "   Stack", Some(stack.values()));
        }
        Ok(stack)
    }

    /// Tokenize `source` and interpret it against an empty stack.
    pub fn interpret_source(&mut self, source: &str) -> Result<Stack> {
        self.interpret(Program::from(source), Stack::new())
    }

    fn resolve(&self, word: &str) -> Result<Resolved<W>> {
        if let Some(body) = self.definitions.get(word) {
            return Ok(Resolved::Definition(body.clone()));
        }
        if let Some(builtin) = self.builtins.get(word) {
            return Ok(Resolved::Builtin(builtin.code));
        }
        match utility::parse_integer(word) {
            Some(Some(number)) => Ok(Resolved::Literal(number)),
            Some(None) => Err(ForthError::IntegerOverflow(word.to_owned())),
            None => Err(ForthError::UnknownWord(word.to_owned())),
        }
    }

    /// Store a definition body, replacing any earlier one with the same name.
    pub fn define(&mut self, name: String, body: Vec<String>) {
        if self.builtins.contains_key(&name) {
            self.msg
                .warning("define", "Definition shadows builtin", Some(&name));
        }
        self.msg.info("define", "New definition", Some((&name, &body)));
        if self.definitions.insert(name, body).is_some() {
            self.msg.info("define", "Replaced earlier definition", None::<bool>);
        }
    }

    pub fn find_definition(&self, name: &str) -> Option<&[String]> {
        self.definitions.get(name).map(Vec::as_slice)
    }

    pub fn find_builtin(&self, name: &str) -> Option<&BuiltInFn<W>> {
        self.builtins.get(name)
    }

    pub(crate) fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|e| ForthError::Output(e.to_string()))
    }
}
