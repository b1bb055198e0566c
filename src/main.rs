// src/main.rs
use lsdir::args::try_parse_args;
use lsdir::config::Config;
use lsdir::error::Result;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("fatal: {e:?}");
            let _ = writeln!(io::stdout(), "{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn try_main() -> Result<()> {
    let Some(args) = try_parse_args(std::env::args_os())? else {
        return Ok(());
    };
    let config = Config::try_from(args)?;

    // dropped (and flushed) before main reports any error
    let mut out = BufWriter::new(io::stdout().lock());
    lsdir::run(&config, &mut out)?;
    Ok(())
}
