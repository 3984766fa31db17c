// Vocabulary listing

use std::io::Write;

use crate::engine::TF;
use crate::error::Result;

impl<W: Write> TF<W> {
    /// Builtin names, sorted
    pub fn builtin_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builtins.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// User definitions, sorted by name
    pub fn definition_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Write each builtin's stack signature, then each definition as `: name body ;`
    pub fn f_words(&mut self) -> Result<()> {
        let mut lines: Vec<String> = self
            .builtin_names()
            .into_iter()
            .filter_map(|name| self.builtins.get(name))
            .map(|builtin| builtin.doc.clone())
            .collect();
        for name in self.definition_names() {
            if let Some(body) = self.definitions.get(name) {
                lines.push(format!(": {name} {} ;", body.join(" ")));
            }
        }
        for line in lines {
            self.write_line(&line)?;
        }
        Ok(())
    }
}
