/// Interpreter for builtins
///
/// Set up a table of builtin functions, with names, code and stack signatures
use std::io::Write;

use crate::engine::TF;
use crate::error::Result;
use crate::program::Program;
use crate::stack::Stack;

/// Native code for a builtin. It may change the stack, the remaining
/// program and the interpreter's definitions.
pub type BuiltinCode<W> = fn(&mut TF<W>, &mut Program, &mut Stack) -> Result<()>;

pub struct BuiltInFn<W: Write> {
    pub name: String,
    pub code: BuiltinCode<W>,
    pub doc: String,
}

impl<W: Write> BuiltInFn<W> {
    pub fn new(name: String, code: BuiltinCode<W>, doc: String) -> BuiltInFn<W> {
        BuiltInFn { name, code, doc }
    }
}

impl<W: Write> TF<W> {
    fn add(&mut self, name: &str, code: BuiltinCode<W>, doc: &str) {
        self.builtins.insert(
            name.to_owned(),
            BuiltInFn::new(name.to_owned(), code, doc.to_owned()),
        );
    }

    pub(super) fn add_builtins(&mut self) {
        self.add("+", Self::f_plus, "+ ( j k -- j+k ) Push j+k on the stack");
        self.add("-", Self::f_minus, "- ( j k -- j-k ) Push j-k on the stack");
        self.add("*", Self::f_times, "* ( j k -- j*k ) Push j*k on the stack");
        self.add(
            "dup",
            Self::f_dup,
            "dup ( n -- n n ) Push a second copy of the top of the stack",
        );
        self.add(
            "==",
            Self::f_equal,
            "== ( j k -- b ) Push true if j and k are the same value, else false",
        );
        self.add(
            "print",
            Self::f_print,
            "print ( n -- ) Pop the top of the stack and print it, followed by a newline",
        );
        self.add(
            "unless",
            Self::f_unless,
            "unless ( b -- ) Skip the next word if b is true or nonzero",
        );
        self.add(
            ":",
            Self::f_colon,
            ": <name> <words> ; ( -- ) Define <name> as the words up to ;",
        );
    }
}
