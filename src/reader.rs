// Read program text from a file or stdin.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

enum Source {
    Stdin,
    Stream(Box<dyn BufRead>),
}

pub struct Reader {
    source: Source,
    name: String,
}

impl fmt::Debug for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.source {
            Source::Stdin => "stdin",
            Source::Stream(_) => "stream",
        };
        f.debug_tuple("Reader").field(&kind).field(&self.name).finish()
    }
}

impl Reader {
    /// Open `file_path`, or stdin when it is `-`.
    pub fn new(file_path: &str) -> io::Result<Reader> {
        if file_path == STDIN_PATH {
            return Ok(Reader {
                source: Source::Stdin,
                name: "<stdin>".to_owned(),
            });
        }
        let file = File::open(file_path)?;
        Ok(Reader {
            source: Source::Stream(Box::new(BufReader::new(file))),
            name: file_path.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the whole source as text.
    pub fn read_source(&mut self) -> io::Result<String> {
        let mut text = String::new();
        match self.source {
            Source::Stdin => {
                io::stdin().lock().read_to_string(&mut text)?;
            }
            Source::Stream(ref mut input) => {
                input.read_to_string(&mut text)?;
            }
        }
        Ok(text)
    }
}
