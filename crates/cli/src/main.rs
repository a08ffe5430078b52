use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};

use shell_pick_cli::cli_args::Args;
#[cfg(unix)]
use shell_pick_cli::selection::exit_on_termination;
use shell_pick_cli::selection::{run_session, CrosstermTerminal, SessionResult};
use shell_pick_core::error::{Error, Result};
use shell_pick_core::{config, file_handling};

/// Controlling terminal, used for keys when stdin carries the candidates
const TTY_PATH: &str = "/dev/tty";

/// Exit code for configuration and file errors
const EXIT_ERROR: u8 = 2;

fn load_candidates(args: &Args) -> Result<Vec<String>> {
    if !args.candidates.is_empty() {
        return Ok(args.candidates.clone());
    }

    if let Some(input) = &args.input {
        let path = shellexpand::tilde(input).to_string();
        return file_handling::get_candidates(&path);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }

    debug!("Reading candidates from stdin");
    Ok(file_handling::read_candidates(stdin.lock())?)
}

/// Keys come from stdin unless stdin is already used for the candidates.
fn key_input() -> Result<Box<dyn Read>> {
    if io::stdin().is_terminal() {
        return Ok(Box::new(io::stdin()));
    }

    match File::open(TTY_PATH) {
        Ok(tty) => Ok(Box::new(tty)),
        Err(e) => Err(Error::io_error(
            "terminal".to_string(),
            TTY_PATH.to_string(),
            e,
        )),
    }
}

/// Draw on stderr when stdout is captured, so only the pick lands there.
fn screen_output() -> Box<dyn Write + Send> {
    if io::stdout().is_terminal() {
        Box::new(io::stdout())
    } else {
        Box::new(io::stderr())
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let settings_path = config::get_settings_path(&args.settings_path);
    debug!("Settings path: `{}`", settings_path);
    let settings = file_handling::get_settings(&settings_path)?;

    let candidates = load_candidates(args)?;
    if candidates.is_empty() {
        info!("{}", Error::EmptyInput);
        return Ok(ExitCode::FAILURE);
    }

    let prompt = settings.resolve_prompt(args.prompt.as_deref());
    let mut terminal = CrosstermTerminal;

    let result = {
        #[cfg(unix)]
        let _signals = exit_on_termination(terminal, screen_output())
            .inspect_err(|e| warn!("Termination signals not watched: {}", e))
            .ok();

        run_session(
            &candidates,
            &prompt,
            &settings,
            key_input()?,
            screen_output(),
            &mut terminal,
        )
    };

    match result {
        SessionResult::Selected(text) => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        SessionResult::Cancelled => Ok(ExitCode::FAILURE),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
