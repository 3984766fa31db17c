//! A minimal stack language interpreter.
//!
//! Source text is split into words and run against a stack of integers and
//! booleans. Words are user definitions (expanded in place), builtins, or
//! unsigned integer literals, looked up in that order.
//!
//! ```
//! use minforth::engine::TF;
//!
//! let mut forth = TF::with_output(Vec::<u8>::new());
//! let stack = forth.interpret_source(": sq dup * ; 5 sq print 3 2 -").unwrap();
//! assert_eq!(stack.to_string(), "[1]");
//! assert_eq!(forth.output().as_slice(), b"25\n");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod messages;
pub mod program;
pub mod reader;
pub mod stack;
pub mod tokenizer;
pub mod utility;
