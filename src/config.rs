// system configuration and command line processing

use std::io::Write;
use std::process::ExitCode;

use crate::engine::TF;
use crate::error::{ForthError, Result};
use crate::messages::{DebugLevel, Msg};
use crate::reader::Reader;

use ::clap::{arg, Arg, ArgAction, ArgMatches, Command};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    debug_level: DebugLevel,
    files: Vec<String>,
    list_words: bool,
    pub run: bool,
}

fn command() -> Command {
    Command::new("minforth")
        .version(VERSION)
        .about("A minimal stack language interpreter")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Program files to run in order; - reads standard input")
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            arg!(--debuglevel <VALUE>)
                .required(false)
                .value_parser(["error", "warning", "info", "debug"]),
        )
        .arg(arg!(-w --words "List the builtin words and exit").required(false))
}

impl Config {
    pub fn new() -> Config {
        Config {
            debug_level: DebugLevel::Error,
            files: Vec::new(),
            list_words: false,
            run: true,
        }
    }

    pub fn process_args(&mut self) -> &Config {
        let mut cmd = command();
        let arguments = cmd.get_matches_mut();
        self.apply(&arguments);
        if !self.run {
            // Nothing to do: show usage instead.
            if let Err(error) = cmd.print_help() {
                Msg::new().error("process_args", "Unable to print help", Some(error));
            }
        }
        self
    }

    fn apply(&mut self, arguments: &ArgMatches) {
        if let Some(debuglevel) = arguments.get_one::<String>("debuglevel") {
            self.debug_level =
                DebugLevel::from_name(debuglevel).unwrap_or(DebugLevel::Warning);
        }
        if let Some(files) = arguments.get_many::<String>("files") {
            self.files = files.cloned().collect();
        }
        self.list_words = arguments.get_flag("words");
        self.run = self.list_words || !self.files.is_empty();
    }

    /// Run the configured files against a fresh stdout interpreter.
    pub fn run_forth(&self) -> ExitCode {
        let mut forth = TF::new();
        match self.run_with(&mut forth) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                forth.msg.error("minforth", &error.to_string(), None::<bool>);
                ExitCode::FAILURE
            }
        }
    }

    /// List the vocabulary if asked, then run every file against `forth`,
    /// so later files see earlier definitions. Each file starts with an
    /// empty stack and its final stack is written to the output.
    /// Stops at the first failure.
    pub fn run_with<W: Write>(&self, forth: &mut TF<W>) -> Result<()> {
        forth.msg.set_level(self.debug_level);

        if self.list_words {
            forth.f_words()?;
        }

        for path in &self.files {
            let (name, text) = Reader::new(path)
                .and_then(|mut reader| {
                    let text = reader.read_source()?;
                    Ok((reader.name().to_owned(), text))
                })
                .map_err(|error| ForthError::Load {
                    path: path.clone(),
                    reason: error.to_string(),
                })?;
            forth.msg.info("run_with", "Loaded file", Some(&name));

            let stack = forth.interpret_source(&text)?;
            forth.write_line(&stack.to_string())?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Writes `source` to a per-process temp file and returns its path.
    fn program_file(name: &str, source: &str) -> String {
        let path: PathBuf = std::env::temp_dir()
            .join(format!("minforth-config-{}-{name}.fs", std::process::id()));
        std::fs::write(&path, source).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn driver_output(forth: &TF<Vec<u8>>) -> String {
        String::from_utf8_lossy(forth.output()).into_owned()
    }

    fn parse(args: &[&str]) -> Config {
        let mut config = Config::new();
        let matches = command()
            .try_get_matches_from(args.iter().copied())
            .expect("arguments parse");
        config.apply(&matches);
        config
    }

    #[test]
    fn no_arguments_means_help() {
        let config = parse(&["minforth"]);
        assert!(!config.run);
        assert!(config.files.is_empty());
    }

    #[test]
    fn files_keep_their_order() {
        let config = parse(&["minforth", "defs.fs", "-", "main.fs"]);
        assert!(config.run);
        assert_eq!(config.files, vec!["defs.fs", "-", "main.fs"]);
    }

    #[test]
    fn debuglevel_is_parsed() {
        let config = parse(&["minforth", "--debuglevel", "info", "a.fs"]);
        assert_eq!(config.debug_level, DebugLevel::Info);
    }

    #[test]
    fn words_runs_without_files() {
        let config = parse(&["minforth", "--words"]);
        assert!(config.list_words);
        assert!(config.run);
    }

    #[test]
    fn bad_debuglevel_is_rejected() {
        assert!(command()
            .try_get_matches_from(["minforth", "--debuglevel", "loud"])
            .is_err());
    }

    #[test]
    fn help_flag_is_not_an_error_kind() {
        let error = command()
            .try_get_matches_from(["minforth", "--help"])
            .unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(error.exit_code(), 0);
    }

    #[test]
    fn prints_each_final_stack_and_shares_definitions() {
        let defs = program_file("defs", ": sq dup * ; 2 3");
        let main = program_file("main", "4 sq print 1 2 ==");
        let config = parse(&["minforth", &defs, &main]);
        let mut forth = TF::with_output(Vec::<u8>::new());
        assert_eq!(config.run_with(&mut forth), Ok(()));
        assert_eq!(driver_output(&forth), "[2, 3]\n16\n[false]\n");
    }

    #[test]
    fn first_failure_stops_later_files() {
        let bad = program_file("bad", "1 print frob 2 print");
        let good = program_file("good", "7 print");
        let config = parse(&["minforth", &bad, &good]);
        let mut forth = TF::with_output(Vec::<u8>::new());
        assert_eq!(
            config.run_with(&mut forth),
            Err(ForthError::UnknownWord("frob".to_owned()))
        );
        // the failing file's own stack line and the later file never print
        assert_eq!(driver_output(&forth), "1\n");
    }

    #[test]
    fn missing_file_fails_to_load() {
        let missing = "/nonexistent/minforth/missing.fs";
        let good = program_file("after-missing", "7 print");
        let config = parse(&["minforth", missing, &good]);
        let mut forth = TF::with_output(Vec::<u8>::new());
        assert!(matches!(
            config.run_with(&mut forth),
            Err(ForthError::Load { ref path, .. }) if path == missing
        ));
        assert!(forth.output().is_empty());
    }

    #[test]
    fn words_are_listed_before_files_run() {
        let prog = program_file("after-words", "1 1 +");
        let config = parse(&["minforth", "--words", &prog]);
        let mut forth = TF::with_output(Vec::<u8>::new());
        assert_eq!(config.run_with(&mut forth), Ok(()));
        let output = driver_output(&forth);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("* ( j k -- j*k )"));
        assert!(lines.iter().any(|line| line.starts_with("unless ")));
        assert_eq!(lines[8], "[2]");
    }

    #[test]
    fn words_alone_lists_vocabulary() {
        let config = parse(&["minforth", "-w"]);
        let mut forth = TF::with_output(Vec::<u8>::new());
        assert_eq!(config.run_with(&mut forth), Ok(()));
        assert_eq!(driver_output(&forth).lines().count(), 8);
    }
}
