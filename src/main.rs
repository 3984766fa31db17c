// minforth main program

use std::process::ExitCode;

use minforth::config::Config;

fn main() -> ExitCode {
    let mut config = Config::new();
    config.process_args();

    if config.run {
        config.run_forth()
    } else {
        ExitCode::SUCCESS
    }
}
